/*!
 * # subforge - video subtitling and SRT editing toolkit
 *
 * A Rust library for turning video into subtitled video or standalone
 * subtitle files, with an editable subtitle model in between.
 *
 * ## Features
 *
 * - Extract audio from video files and transcribe it via an external
 *   speech-to-text service
 * - Build SRT subtitle files from timed transcription segments
 * - Parse, edit and re-serialize SRT tracks with a contiguous-index
 *   entry store (insert, update, delete, bulk replace)
 * - Burn subtitle files into video via ffmpeg
 * - Tolerant SRT parsing: malformed blocks are dropped, not fatal
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `subtitle`: The subtitle data model and SRT round-trip engine:
 *   - `subtitle::timecode`: `HH:MM:SS,mmm` codec
 *   - `subtitle::track`: ordered entry store with reindexing
 *   - `subtitle::srt`: wire format parser/serializer
 *   - `subtitle::editor`: per-session edit facade
 * - `media`: ffmpeg invocation (audio extraction, subtitle burn-in)
 * - `providers`: transcription service clients:
 *   - `providers::whisper_api`: OpenAI-compatible HTTP endpoint
 *   - `providers::mock`: canned behaviors for tests
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod media;
pub mod providers;
pub mod subtitle;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use errors::{AppError, MediaError, ProviderError, SubtitleError};
pub use providers::{TimedSegment, Transcript, TranscriptionProvider};
pub use subtitle::{EditOutcome, EntryDraft, EntryView, SubtitleEditor, SubtitleEntry, SubtitleTrack};
