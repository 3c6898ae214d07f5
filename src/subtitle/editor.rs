use std::fs;
use std::path::Path;

use log::{debug, error};

use crate::errors::SubtitleError;
use crate::subtitle::srt;
use crate::subtitle::timecode;
use crate::subtitle::track::{EditOutcome, EntryDraft, EntryView, SubtitleTrack};

// @module: Edit session facade over store, codec and serializer

/// One subtitle edit session: a track plus load/save plumbing.
///
/// The editor is constructed fresh per operation and discarded when the
/// session ends; nothing is cached across sessions. Failures surface as
/// [`SubtitleError`] results with a logged diagnostic, never as panics.
#[derive(Debug, Default)]
pub struct SubtitleEditor {
    track: SubtitleTrack,
}

impl SubtitleEditor {
    /// Create an editor with an empty track
    pub fn new() -> Self {
        SubtitleEditor::default()
    }

    /// Read an SRT file into the session.
    ///
    /// Malformed blocks inside the file are dropped by the tolerant parser;
    /// only unreadable files fail.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<(), SubtitleError> {
        let path = path.as_ref();
        match srt::parse_file(path) {
            Ok(track) => {
                debug!("Loaded {} subtitle entries from {:?}", track.len(), path);
                self.track = track;
                Ok(())
            }
            Err(e) => {
                error!("Failed to load subtitle file {:?}: {}", path, e);
                Err(e)
            }
        }
    }

    /// Snapshot of the current entries for presentation
    pub fn export_view(&self) -> Vec<EntryView> {
        self.track.to_view()
    }

    /// Replace the whole track with an ordered list of drafts.
    ///
    /// Drafts are applied as given; timecode strings are not validated here
    /// (interactive clients use [`SubtitleEditor::validate_time`] per field).
    pub fn apply_bulk(&mut self, drafts: Vec<EntryDraft>) {
        self.track.replace_all(drafts);
    }

    /// Append one entry, returning its assigned index
    pub fn add(&mut self, start_time: String, end_time: String, text: String) -> usize {
        self.track.add(start_time, end_time, text)
    }

    /// Update the entry with the given index in place
    pub fn update(
        &mut self,
        index: usize,
        start_time: String,
        end_time: String,
        text: String,
    ) -> EditOutcome {
        self.track.update(index, start_time, end_time, text)
    }

    /// Delete the entry with the given index
    pub fn delete(&mut self, index: usize) -> EditOutcome {
        self.track.delete(index)
    }

    /// Serialize the session track and write it to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SubtitleError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = srt::serialize(&self.track);
        if let Err(e) = fs::write(path, content) {
            error!("Failed to save subtitle file {:?}: {}", path, e);
            return Err(e.into());
        }

        debug!("Saved {} subtitle entries to {:?}", self.track.len(), path);
        Ok(())
    }

    /// Grammar check for a single timecode string
    pub fn validate_time(&self, text: &str) -> bool {
        timecode::validate(text)
    }

    /// The underlying track
    pub fn track(&self) -> &SubtitleTrack {
        &self.track
    }
}
