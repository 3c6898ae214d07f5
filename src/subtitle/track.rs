use log::debug;
use serde::{Deserialize, Serialize};

use crate::providers::TimedSegment;
use crate::subtitle::timecode;

// @module: Ordered subtitle entry store with contiguous indexing

/// A single subtitle caption: sequence index, time range and text body.
///
/// Times are held in canonical `HH:MM:SS,mmm` text form, exactly as they
/// appear on the wire. The store does not enforce `start_time <= end_time`;
/// edit clients own that policy and downstream consumers assume it.
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleEntry {
    /// 1-based position in the track, re-derived after every structural change
    pub index: usize,

    /// Display start timecode
    pub start_time: String,

    /// Display end timecode
    pub end_time: String,

    /// Caption text, possibly multi-line
    pub text: String,
}

impl SubtitleEntry {
    /// Create a new entry
    pub fn new(index: usize, start_time: String, end_time: String, text: String) -> Self {
        SubtitleEntry {
            index,
            start_time,
            end_time,
            text,
        }
    }
}

/// Read-only snapshot of one entry for presentation and editing UIs.
///
/// This is the edit session view model: it hydrates the editor and comes
/// back (without the index) as a bulk replacement payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryView {
    /// 1-based entry index
    pub index: usize,
    /// Display start timecode
    pub start_time: String,
    /// Display end timecode
    pub end_time: String,
    /// Caption text
    pub text: String,
}

/// One element of a bulk replacement list: an entry without an index.
///
/// Indices are assigned by the store when the list is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryDraft {
    /// Display start timecode
    pub start_time: String,
    /// Display end timecode
    pub end_time: String,
    /// Caption text
    pub text: String,
}

/// Outcome of an edit that addresses an entry by index.
///
/// `NotFound` is a status, not an error: the track is unchanged and the
/// caller decides whether that matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum EditOutcome {
    /// The addressed entry existed and the edit was applied
    Applied,
    /// No entry had the given index; nothing changed
    NotFound,
}

impl EditOutcome {
    /// True if the edit touched an entry
    pub fn applied(self) -> bool {
        self == EditOutcome::Applied
    }
}

/// Ordered collection of subtitle entries.
///
/// Invariant: after any structural mutation every entry's `index` equals its
/// 1-based position in the sequence. Ordering is presentation order, not
/// necessarily sorted by time.
#[derive(Debug, Default, Clone)]
pub struct SubtitleTrack {
    entries: Vec<SubtitleEntry>,
}

impl SubtitleTrack {
    /// Create an empty track
    pub fn new() -> Self {
        SubtitleTrack::default()
    }

    /// Build a track from already-parsed entries, assigning fresh indices
    pub fn from_entries(entries: Vec<SubtitleEntry>) -> Self {
        let mut track = SubtitleTrack { entries };
        track.reindex();
        track
    }

    /// Build a track from transcription segments.
    ///
    /// This is the one place float seconds are encoded into timecode text.
    /// Segment text is trimmed of surrounding whitespace.
    pub fn from_segments(segments: &[TimedSegment]) -> Self {
        let entries = segments
            .iter()
            .map(|segment| {
                SubtitleEntry::new(
                    0,
                    timecode::encode(segment.start_seconds),
                    timecode::encode(segment.end_seconds),
                    segment.text.trim().to_string(),
                )
            })
            .collect();
        Self::from_entries(entries)
    }

    /// Number of entries in the track
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the track holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in presentation order
    pub fn entries(&self) -> &[SubtitleEntry] {
        &self.entries
    }

    /// Append a new entry and return its assigned index.
    ///
    /// Reindexing runs after the append like after any structural change,
    /// even though appending already preserves contiguity.
    pub fn add(&mut self, start_time: String, end_time: String, text: String) -> usize {
        let index = self.entries.len() + 1;
        self.entries
            .push(SubtitleEntry::new(index, start_time, end_time, text));
        self.reindex();
        index
    }

    /// Replace the fields of the entry with the given index in place.
    ///
    /// The index itself and the entry's position never change. Addressing a
    /// missing index reports `NotFound` and leaves the track untouched.
    pub fn update(
        &mut self,
        index: usize,
        start_time: String,
        end_time: String,
        text: String,
    ) -> EditOutcome {
        match self.entries.iter_mut().find(|e| e.index == index) {
            Some(entry) => {
                entry.start_time = start_time;
                entry.end_time = end_time;
                entry.text = text;
                EditOutcome::Applied
            }
            None => {
                debug!("Update addressed missing subtitle index {}", index);
                EditOutcome::NotFound
            }
        }
    }

    /// Remove the entry with the given index and close the gap.
    ///
    /// Every later entry shifts down by one during reindexing. Addressing a
    /// missing index reports `NotFound` and leaves the track untouched.
    pub fn delete(&mut self, index: usize) -> EditOutcome {
        let before = self.entries.len();
        self.entries.retain(|e| e.index != index);

        if self.entries.len() == before {
            debug!("Delete addressed missing subtitle index {}", index);
            return EditOutcome::NotFound;
        }

        self.reindex();
        EditOutcome::Applied
    }

    /// Clear the track and re-add every draft in order, indexed 1..N.
    pub fn replace_all(&mut self, drafts: Vec<EntryDraft>) {
        self.entries = drafts
            .into_iter()
            .map(|d| SubtitleEntry::new(0, d.start_time, d.end_time, d.text))
            .collect();
        self.reindex();
    }

    /// Read-only snapshot of all entries for presentation
    pub fn to_view(&self) -> Vec<EntryView> {
        self.entries
            .iter()
            .map(|e| EntryView {
                index: e.index,
                start_time: e.start_time.clone(),
                end_time: e.end_time.clone(),
                text: e.text.clone(),
            })
            .collect()
    }

    /// Restore the contiguity invariant: index = position + 1, full pass
    fn reindex(&mut self) {
        for (i, entry) in self.entries.iter_mut().enumerate() {
            entry.index = i + 1;
        }
    }
}
