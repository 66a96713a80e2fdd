//! Utility modules for configuration and error handling.

pub mod config;
pub mod error;

// Re-export commonly used error types for convenience
pub use config::{ArtistConfig, ArtistTable, SheetTabs};
pub use error::{ConfigError, FetchError, OutputError, TrackerError};
