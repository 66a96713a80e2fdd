//! Daily-log parsing and schema definitions.
//!
//! This module handles:
//! - Normalizing sheet dates
//! - Turning raw rows into per-sound time series
//! - Defining the sound, summary and report schema

pub mod daily_log;
pub mod date;
pub mod schema;

// Re-export main types
pub use daily_log::{parse_daily_log, DailyLog};
pub use date::normalize_date;
pub use schema::{ArtistSummary, Sound, SoundReport, TimePoint, TimeSeries, Trend};
