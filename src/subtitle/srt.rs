use std::fs;
use std::path::Path;

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::SubtitleError;
use crate::subtitle::track::{SubtitleEntry, SubtitleTrack};

// @module: SRT wire format parsing and serialization

// @const: Blank-line block separator (one or more newlines of whitespace)
static BLOCK_SEPARATOR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

// @const: Time range line, codec grammar on each side of the arrow
static TIME_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2}:\d{2}:\d{2},\d{3})\s*-->\s*(\d{2}:\d{2}:\d{2},\d{3})$").unwrap()
});

/// Parse SRT text into a track, tolerantly.
///
/// Malformed blocks (fewer than three lines, a non-integer first line, a
/// time line that does not match the grammar) are dropped without failing
/// the operation. Surviving blocks become entries in file order; the track
/// reindexes them, so original numbering is not preserved when blocks are
/// discarded and gaps silently close.
///
/// This function never fails for arbitrary text input.
pub fn parse_str(content: &str) -> SubtitleTrack {
    let mut entries = Vec::new();
    let mut dropped = 0usize;

    for block in BLOCK_SEPARATOR_REGEX.split(content.trim()) {
        let block = block.trim();
        if block.is_empty() {
            continue;
        }

        match parse_block(block) {
            Some(entry) => entries.push(entry),
            None => {
                dropped += 1;
                debug!("Dropping malformed SRT block: {:?}", first_line(block));
            }
        }
    }

    if dropped > 0 {
        warn!("Dropped {} malformed SRT block(s) during parse", dropped);
    }

    SubtitleTrack::from_entries(entries)
}

/// Read and parse an SRT file.
///
/// Only I/O level problems fail the operation; malformed content degrades
/// per [`parse_str`].
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<SubtitleTrack, SubtitleError> {
    let content = fs::read_to_string(path.as_ref())?;
    Ok(parse_str(&content))
}

/// Render a track back to SRT text.
///
/// Each entry becomes an index line, a time range line and the caption
/// lines, with one blank line between blocks. Output always re-parses to
/// the same `(start, end, text)` triples.
pub fn serialize(track: &SubtitleTrack) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(track.len() * 4);

    for entry in track.entries() {
        lines.push(entry.index.to_string());
        lines.push(format!("{} --> {}", entry.start_time, entry.end_time));
        lines.push(entry.text.clone());
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Parse one blank-line-delimited block; None drops it.
fn parse_block(block: &str) -> Option<SubtitleEntry> {
    let lines: Vec<&str> = block.lines().collect();
    if lines.len() < 3 {
        return None;
    }

    // The wire index only proves well-formedness; the store reindexes anyway
    lines[0].trim().parse::<usize>().ok()?;

    let caps = TIME_LINE_REGEX.captures(lines[1].trim())?;
    let start_time = caps[1].to_string();
    let end_time = caps[2].to_string();

    let text = lines[2..].join("\n");

    Some(SubtitleEntry::new(0, start_time, end_time, text))
}

fn first_line(block: &str) -> &str {
    block.lines().next().unwrap_or_default()
}
