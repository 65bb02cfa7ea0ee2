//! Error types for hearscribe.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HearscribeError {
    // Configuration errors
    #[error("Configuration file not found at {path}")]
    ConfigFileNotFound { path: String },

    #[error("Invalid configuration value for {key}: {message}")]
    ConfigInvalidValue { key: String, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    // Pipeline errors
    #[error("Failed to get transcript: {message}")]
    TranscriptFetch { message: String },

    #[error("Failed to clean transcript chunk: {message}")]
    Cleaning { message: String },

    #[error("Failed to save transcripts: {message}")]
    Persistence { message: String },

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, HearscribeError>;
