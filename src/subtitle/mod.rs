/*!
 * Subtitle data model and SRT round-trip engine.
 *
 * This module owns the editable representation of a subtitle file:
 * - `timecode`: the `HH:MM:SS,mmm` codec (encode, strict decode, validation)
 * - `track`: the ordered entry store with contiguous 1-based indexing
 * - `srt`: tolerant wire-format parsing and well-formed serialization
 * - `editor`: the per-session facade combining the above
 */

pub mod editor;
pub mod srt;
pub mod timecode;
pub mod track;

// Re-export main types
pub use editor::SubtitleEditor;
pub use track::{EditOutcome, EntryDraft, EntryView, SubtitleEntry, SubtitleTrack};
