//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while fetching rows from the sheet source
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Invalid sheet response: {0}")]
    InvalidResponse(String),

    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Errors surfaced by the fetch-and-derive pipeline
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Unknown artist: {0}")]
    UnknownArtist(String),

    #[error("Sheet source unavailable: {0}")]
    SourceUnavailable(#[from] FetchError),
}

/// Errors that can occur while loading the artist table
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("Invalid config format: {0}")]
    InvalidFormat(#[from] serde_json::Error),

    #[error("Config defines no artists")]
    Empty,
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    #[error("Failed to read report: {0}")]
    ReadFailed(std::io::Error),

    #[error("Unsupported report version {found} (expected {expected})")]
    UnsupportedVersion { found: String, expected: String },
}
