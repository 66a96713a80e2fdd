//! Derivation of sound metrics and artist statistics.
//!
//! This module transforms parsed daily logs into:
//! - Sounds with totals, growth and spike flags
//! - Artist-level summaries
//! - Filtered, ordered sound lists

pub mod metrics;
pub mod ranking;
pub mod summary;

// Re-export main types and functions
pub use metrics::{derive_sound, derive_sounds, is_spike, slugify};
pub use ranking::{filter_and_sort, SortOrder};
pub use summary::summarize;
