/*!
 * Provider implementations for speech-to-text transcription services.
 *
 * This module contains client implementations for transcription backends:
 * - WhisperApi: OpenAI-compatible `audio/transcriptions` HTTP endpoint
 * - MockTranscriber: canned behaviors for tests
 */

use std::fmt::Debug;
use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;

use crate::errors::ProviderError;

/// One timed text segment from a transcription response.
///
/// `start_seconds <= end_seconds` is assumed from upstream, not enforced.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimedSegment {
    /// Segment start in elapsed seconds
    pub start_seconds: f64,
    /// Segment end in elapsed seconds
    pub end_seconds: f64,
    /// Plain caption text
    pub text: String,
}

/// A full transcription result: detected language plus ordered segments
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    /// Language detected by the service, if reported
    pub language: Option<String>,
    /// Timed segments in playback order
    pub segments: Vec<TimedSegment>,
}

/// Common trait for all transcription providers
///
/// This trait defines the interface that all provider implementations must
/// follow, allowing them to be used interchangeably by the controller.
#[async_trait]
pub trait TranscriptionProvider: Send + Sync + Debug {
    /// Transcribe an audio file into timed segments
    ///
    /// # Arguments
    /// * `audio_path` - Path to the audio file to transcribe
    /// * `language` - Optional language hint (ISO 639-1), None for auto-detect
    ///
    /// # Returns
    /// * `Result<Transcript, ProviderError>` - The transcript or an error
    async fn transcribe(
        &self,
        audio_path: &Path,
        language: Option<&str>,
    ) -> Result<Transcript, ProviderError>;

    /// Test the connection to the provider
    async fn test_connection(&self) -> Result<(), ProviderError>;
}

pub mod mock;
pub mod whisper_api;

pub use mock::MockTranscriber;
pub use whisper_api::WhisperApi;
