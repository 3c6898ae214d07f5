/*!
 * Error types for the subforge application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when talking to a transcription service
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Errors that can occur during subtitle processing and editing
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// Text does not match the `HH:MM:SS,mmm` grammar
    #[error("Invalid timecode: {text:?}")]
    InvalidTimecode {
        /// The rejected input text
        text: String,
    },

    /// File could not be read or written
    #[error("Subtitle file I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while invoking external media tools
#[derive(Error, Debug)]
pub enum MediaError {
    /// The process could not be started
    #[error("Failed to spawn {tool}: {message}")]
    Spawn {
        /// Tool binary name
        tool: String,
        /// Underlying error description
        message: String,
    },

    /// The command did not finish within its time budget
    #[error("{tool} timed out after {timeout_secs}s")]
    Timeout {
        /// Tool binary name
        tool: String,
        /// Time budget in seconds
        timeout_secs: u64,
    },

    /// The command exited with a non-zero status
    #[error("{tool} failed: {stderr}")]
    Failed {
        /// Tool binary name
        tool: String,
        /// Filtered stderr output
        stderr: String,
    },

    /// A required input file was missing
    #[error("File not found: {0}")]
    MissingInput(PathBuf),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a transcription provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from subtitle processing
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),

    /// Error from media tool invocation
    #[error("Media error: {0}")]
    Media(#[from] MediaError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
