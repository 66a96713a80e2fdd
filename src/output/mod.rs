//! Output writers for sound reports.
//!
//! This module handles:
//! - JSON report files
//! - Text tables and summaries for the terminal

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{read_report, write_report};
pub use text::{render_overview, render_series, render_sound_table, render_summary, sparkline};
