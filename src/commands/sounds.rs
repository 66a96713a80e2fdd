//! Sounds command implementation.
//!
//! The sounds command:
//! 1. Fetches the artist's daily log
//! 2. Derives per-sound metrics and the summary
//! 3. Filters and sorts the list
//! 4. Prints the table
//! 5. Writes the JSON report (if requested)

use super::models::SoundsArgs;
use crate::aggregator::{filter_and_sort, summarize};
use crate::output::{
    render_overview, render_series, render_sound_table, render_summary, write_report,
};
use crate::parser::schema::{Sound, SoundReport};
use crate::sheets::RowSource;
use crate::tracker::SoundTracker;
use crate::utils::config::{ArtistTable, REPORT_SCHEMA_VERSION};
use anyhow::{bail, Context, Result};
use chrono::Utc;
use log::{debug, info, warn};
use std::time::Instant;

/// Execute the sounds command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Unknown artist
/// * Sheet fetch failures
/// * Report write errors
pub fn execute_sounds<S: RowSource>(tracker: &SoundTracker<S>, args: &SoundsArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Step 1/3: Fetching sounds for {}...", args.artist);
    let sounds = tracker
        .fetch_sounds(&args.artist)
        .with_context(|| format!("Failed to load sounds for '{}'", args.artist))?;

    info!("Step 2/3: Summarizing {} sounds...", sounds.len());
    let report = build_report(tracker.artists(), &args.artist, sounds);

    let query = args.search.as_deref().unwrap_or("");
    let mut listed = filter_and_sort(&report.sounds, query, args.sort);
    if let Some(limit) = args.limit {
        listed.truncate(limit);
    }
    debug!("{} sounds after filtering", listed.len());

    if args.print_summary {
        println!("{}", render_summary(&report.display_name, &report.summary));
        println!();
    }
    println!("{}", render_sound_table(&listed));

    if let Some(path) = &args.output_json {
        info!("Step 3/3: Writing report...");
        write_report(&report, path).context("Failed to write JSON report")?;
    } else {
        info!("Step 3/3: No report requested");
    }

    info!("Done in {:.2?}", start_time.elapsed());
    Ok(())
}

/// Print the summary for one artist
pub fn execute_summary<S: RowSource>(tracker: &SoundTracker<S>, artist: &str) -> Result<()> {
    let summary = tracker
        .fetch_summary(artist)
        .with_context(|| format!("Failed to load summary for '{}'", artist))?;

    println!(
        "{}",
        render_summary(tracker.artists().display_name(artist), &summary)
    );
    Ok(())
}

/// Print one summary line per configured artist
///
/// Artists that fail to load are reported in place; the command only
/// fails when every artist failed.
pub fn execute_overview<S: RowSource>(tracker: &SoundTracker<S>) -> Result<()> {
    let outcomes = tracker.fetch_overview();
    let artists = tracker.artists();

    let entries: Vec<(&str, _)> = outcomes
        .iter()
        .map(|(id, outcome)| (artists.display_name(id), outcome.as_ref()))
        .collect();

    let failed = outcomes.iter().filter(|(_, o)| o.is_err()).count();
    for (id, outcome) in &outcomes {
        if let Err(err) = outcome {
            warn!("Failed to load {}: {}", id, err);
        }
    }

    println!("{}", render_overview(&entries));

    if !outcomes.is_empty() && failed == outcomes.len() {
        bail!("No artist could be loaded");
    }
    Ok(())
}

/// Print the full series of one sound, looked up by slug id
pub fn execute_sound<S: RowSource>(
    tracker: &SoundTracker<S>,
    artist: &str,
    sound_id: &str,
) -> Result<()> {
    let sound = tracker
        .find_sound(artist, sound_id)
        .with_context(|| format!("Failed to load sounds for '{}'", artist))?;

    match sound {
        Some(sound) => {
            println!("{}", render_series(&sound));
            Ok(())
        }
        None => bail!("No sound with id '{}' for artist '{}'", sound_id, artist),
    }
}

/// Assemble a report for already-derived sounds
pub fn build_report(artists: &ArtistTable, artist: &str, sounds: Vec<Sound>) -> SoundReport {
    SoundReport {
        version: REPORT_SCHEMA_VERSION.to_string(),
        artist: artist.to_string(),
        display_name: artists.display_name(artist).to_string(),
        generated_at: Utc::now().to_rfc3339(),
        summary: summarize(&sounds),
        sounds,
    }
}

/// Reject arguments that cannot produce output
pub fn validate_args(args: &SoundsArgs) -> Result<()> {
    if args.artist.trim().is_empty() {
        bail!("Artist id cannot be empty");
    }
    if args.limit == Some(0) {
        bail!("--limit must be at least 1");
    }
    Ok(())
}
