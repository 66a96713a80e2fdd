//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod sounds;
pub mod utils;

// Re-export main command functions
pub use models::SoundsArgs;
pub use sounds::{
    build_report, execute_overview, execute_sound, execute_sounds, execute_summary, validate_args,
};
pub use utils::{display_version, list_artists, validate_report_file};
