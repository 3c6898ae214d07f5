use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::file_utils::FileManager;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Directory uploaded videos are copied into
    #[serde(default = "default_upload_dir")]
    pub upload_dir: PathBuf,

    /// Directory extracted audio tracks are written to
    #[serde(default = "default_audio_dir")]
    pub audio_dir: PathBuf,

    /// Directory generated and edited subtitle files live in
    #[serde(default = "default_subtitle_dir")]
    pub subtitle_dir: PathBuf,

    /// Directory finished output videos are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Transcription config
    #[serde(default)]
    pub transcription: TranscriptionConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upload_dir: default_upload_dir(),
            audio_dir: default_audio_dir(),
            subtitle_dir: default_subtitle_dir(),
            output_dir: default_output_dir(),
            transcription: TranscriptionConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

/// Transcription backend type
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptionBackend {
    // @backend: OpenAI-compatible whisper HTTP endpoint
    #[default]
    WhisperApi,
    // @backend: Canned segments, for tests and dry runs
    Mock,
}

impl TranscriptionBackend {
    // @returns: Lowercase backend identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::WhisperApi => "whisperapi".to_string(),
            Self::Mock => "mock".to_string(),
        }
    }
}

impl std::fmt::Display for TranscriptionBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

impl std::str::FromStr for TranscriptionBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "whisperapi" | "whisper-api" => Ok(Self::WhisperApi),
            "mock" => Ok(Self::Mock),
            _ => Err(anyhow!("Invalid transcription backend: {}", s)),
        }
    }
}

/// Transcription service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranscriptionConfig {
    /// Transcription backend to use
    #[serde(default)]
    pub backend: TranscriptionBackend,

    /// Service endpoint URL
    #[serde(default = "default_whisper_endpoint")]
    pub endpoint: String,

    /// Model name
    #[serde(default = "default_whisper_model")]
    pub model: String,

    /// API key; empty for unauthenticated local servers
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Language hint (ISO 639-1), None for auto-detect
    #[serde(default)]
    pub language: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_transcription_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TranscriptionConfig {
    fn default() -> Self {
        Self {
            backend: TranscriptionBackend::default(),
            endpoint: default_whisper_endpoint(),
            model: default_whisper_model(),
            api_key: String::new(),
            language: None,
            timeout_secs: default_transcription_timeout_secs(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_upload_dir() -> PathBuf {
    PathBuf::from("uploads")
}

fn default_audio_dir() -> PathBuf {
    PathBuf::from("audio")
}

fn default_subtitle_dir() -> PathBuf {
    PathBuf::from("subtitles")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("outputs")
}

fn default_whisper_endpoint() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_whisper_model() -> String {
    "whisper-1".to_string()
}

fn default_transcription_timeout_secs() -> u64 {
    300
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = FileManager::read_to_string(&path)?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))
    }

    /// Write configuration to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize config to JSON")?;
        FileManager::write_to_file(path, &content)
    }

    /// Create every working directory the workflows rely on
    pub fn ensure_dirs(&self) -> Result<()> {
        for dir in [
            &self.upload_dir,
            &self.audio_dir,
            &self.subtitle_dir,
            &self.output_dir,
        ] {
            FileManager::ensure_dir(dir)?;
        }
        Ok(())
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if let Some(language) = &self.transcription.language {
            crate::language_utils::validate_language_code(language)?;
        }

        match self.transcription.backend {
            TranscriptionBackend::WhisperApi => {
                if self.transcription.endpoint.is_empty() {
                    return Err(anyhow!(
                        "Transcription endpoint is required for the whisperapi backend"
                    ));
                }
            }
            TranscriptionBackend::Mock => {}
        }

        if self.transcription.timeout_secs == 0 {
            return Err(anyhow!("Transcription timeout must be greater than zero"));
        }

        Ok(())
    }
}
