/*!
 * Mock transcription provider for testing.
 *
 * This module provides a mock provider that simulates different behaviors:
 * - `MockTranscriber::with_segments(...)` - Always succeeds with canned segments
 * - `MockTranscriber::empty()` - Succeeds with no segments
 * - `MockTranscriber::failing()` - Always fails with an error
 */

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::ProviderError;
use crate::providers::{TimedSegment, Transcript, TranscriptionProvider};

/// Behavior mode for the mock provider
#[derive(Debug, Clone, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with the canned segments
    Working,
    /// Succeeds with an empty segment list
    Empty,
    /// Always fails with a request error
    Failing,
}

/// Mock provider simulating a transcription backend
#[derive(Debug)]
pub struct MockTranscriber {
    /// Behavior mode
    behavior: MockBehavior,
    /// Canned segments returned in Working mode
    segments: Vec<TimedSegment>,
    /// Language reported back to the caller
    language: Option<String>,
    /// Number of transcribe calls made
    call_count: Arc<AtomicUsize>,
}

impl MockTranscriber {
    /// Create a working mock returning the given segments
    pub fn with_segments(segments: Vec<TimedSegment>) -> Self {
        Self {
            behavior: MockBehavior::Working,
            segments,
            language: Some("en".to_string()),
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a working mock with a small built-in transcript
    pub fn working() -> Self {
        Self::with_segments(vec![
            TimedSegment {
                start_seconds: 1.0,
                end_seconds: 2.5,
                text: " Hello ".to_string(),
            },
            TimedSegment {
                start_seconds: 3.0,
                end_seconds: 4.0,
                text: "World".to_string(),
            },
        ])
    }

    /// Create a mock that succeeds with no segments
    pub fn empty() -> Self {
        Self {
            behavior: MockBehavior::Empty,
            segments: Vec::new(),
            language: None,
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a mock that always fails
    pub fn failing() -> Self {
        Self {
            behavior: MockBehavior::Failing,
            segments: Vec::new(),
            language: None,
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Override the reported language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Number of transcribe calls observed so far
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranscriptionProvider for MockTranscriber {
    async fn transcribe(
        &self,
        _audio_path: &Path,
        language: Option<&str>,
    ) -> Result<Transcript, ProviderError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::Working => Ok(Transcript {
                language: language
                    .map(|l| l.to_string())
                    .or_else(|| self.language.clone()),
                segments: self.segments.clone(),
            }),
            MockBehavior::Empty => Ok(Transcript::default()),
            MockBehavior::Failing => Err(ProviderError::RequestFailed(
                "Mock transcriber configured to fail".to_string(),
            )),
        }
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        match self.behavior {
            MockBehavior::Failing => Err(ProviderError::ConnectionError(
                "Mock transcriber configured to fail".to_string(),
            )),
            _ => Ok(()),
        }
    }
}
