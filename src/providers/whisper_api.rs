use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;

use crate::errors::ProviderError;
use crate::providers::{TimedSegment, Transcript, TranscriptionProvider};

/// Client for an OpenAI-compatible `audio/transcriptions` endpoint.
///
/// Works against the hosted OpenAI API as well as local whisper servers
/// exposing the same route (e.g. whisper.cpp server, faster-whisper-server).
#[derive(Debug)]
pub struct WhisperApi {
    /// HTTP client for API requests
    client: Client,
    /// API endpoint URL, e.g. `https://api.openai.com/v1`
    endpoint: String,
    /// Model name, e.g. `whisper-1`
    model: String,
    /// API key for authentication; empty for unauthenticated local servers
    api_key: String,
}

/// Transcription response in `verbose_json` format
#[derive(Debug, Deserialize)]
struct VerboseTranscription {
    /// Detected (or forced) language
    language: Option<String>,
    /// Timed segments
    #[serde(default)]
    segments: Vec<VerboseSegment>,
}

/// One segment of a `verbose_json` response
#[derive(Debug, Deserialize)]
struct VerboseSegment {
    /// Segment start in seconds
    start: f64,
    /// Segment end in seconds
    end: f64,
    /// Segment text
    text: String,
}

impl WhisperApi {
    /// Create a new client
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
        timeout_secs: u64,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: api_key.into(),
        }
    }

    fn api_url(&self, route: &str) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), route)
    }

    /// Attach bearer auth when an API key is configured
    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if self.api_key.is_empty() {
            request
        } else {
            request.bearer_auth(&self.api_key)
        }
    }
}

#[async_trait]
impl TranscriptionProvider for WhisperApi {
    async fn transcribe(
        &self,
        audio_path: &Path,
        language: Option<&str>,
    ) -> Result<Transcript, ProviderError> {
        let file_name = audio_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "audio.wav".to_string());

        let audio_bytes = tokio::fs::read(audio_path).await.map_err(|e| {
            ProviderError::RequestFailed(format!("Failed to read audio file {:?}: {}", audio_path, e))
        })?;

        debug!(
            "Uploading {} bytes of audio to {} for transcription",
            audio_bytes.len(),
            self.endpoint
        );

        let mut form = Form::new()
            .part("file", Part::bytes(audio_bytes).file_name(file_name))
            .text("model", self.model.clone())
            .text("response_format", "verbose_json");

        if let Some(language) = language {
            form = form.text("language", language.to_string());
        }

        let response = self
            .authorized(self.client.post(self.api_url("audio/transcriptions")))
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ProviderError::ConnectionError(e.to_string())
                } else {
                    ProviderError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!("Transcription request failed with status {}: {}", status, message);

            if status.as_u16() == 401 {
                return Err(ProviderError::AuthenticationError(message));
            }
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let body: VerboseTranscription = response
            .json()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        let segments = body
            .segments
            .into_iter()
            .map(|s| TimedSegment {
                start_seconds: s.start,
                end_seconds: s.end,
                text: s.text,
            })
            .collect();

        Ok(Transcript {
            language: body.language,
            segments,
        })
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        let response = self
            .authorized(self.client.get(self.api_url("models")))
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else if status.as_u16() == 401 {
            Err(ProviderError::AuthenticationError(
                "API key rejected".to_string(),
            ))
        } else {
            Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            })
        }
    }
}
