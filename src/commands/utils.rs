use crate::output::read_report;
use crate::utils::config::{ArtistTable, REPORT_SCHEMA_VERSION};
use anyhow::Result;
use std::path::Path;

/// Print the configured artists
pub fn list_artists(artists: &ArtistTable) {
    println!("Configured artists:");
    for (id, config) in artists.iter() {
        println!(
            "  {:<12} {:<16} sheet {} (daily log tab {})",
            id,
            artists.display_name(id),
            config.sheet_id,
            config.tabs.daily_log
        );
    }
}

/// Validate a report JSON file
pub fn validate_report_file(file_path: &Path) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(file_path)?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Artist: {} ({})", report.display_name, report.artist);
    println!("  Generated: {}", report.generated_at);
    println!("  Sounds: {}", report.sounds.len());
    println!("  Spiking Today: {}", report.summary.spiking_today);

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("Sound Tracker v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", REPORT_SCHEMA_VERSION);
    println!();
    println!("TikTok sound growth and spike tracking from Google Sheets daily logs.");
}
