//! Sound Tracker CLI
//!
//! Fetches an artist's daily log, derives growth and spike metrics,
//! and prints or saves them.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use sound_tracker::aggregator::SortOrder;
use sound_tracker::commands::{
    display_version, execute_overview, execute_sound, execute_sounds, execute_summary,
    list_artists, validate_args, validate_report_file, SoundsArgs,
};
use sound_tracker::sheets::GvizClient;
use sound_tracker::tracker::SoundTracker;
use sound_tracker::utils::ArtistTable;

/// Sound Tracker - TikTok sound analytics from Google Sheets
#[derive(Parser, Debug)]
#[command(name = "sound-tracker")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Artist table JSON file (replaces the built-in table)
    #[arg(short, long, global = true, env = "SOUND_TRACKER_CONFIG")]
    config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// List configured artists
    Artists,

    /// Fetch and list an artist's sounds
    Sounds {
        /// Artist id
        #[arg(short, long)]
        artist: String,

        /// Only show sounds whose name contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Sort order
        #[arg(long, value_enum, default_value_t = SortOrder::PostsDesc)]
        sort: SortOrder,

        /// Maximum number of sounds to print
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output path for JSON report (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip the summary above the table
        #[arg(long)]
        no_summary: bool,
    },

    /// Fetch an artist's sounds and print the summary only
    Summary {
        /// Artist id
        #[arg(short, long)]
        artist: String,
    },

    /// Print a summary line for every configured artist
    Overview,

    /// Print the full daily series of one sound
    Sound {
        /// Artist id
        #[arg(short, long)]
        artist: String,

        /// Sound id (slug of the sound name)
        #[arg(short, long)]
        id: String,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let artists = match &cli.config {
        Some(path) => ArtistTable::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ArtistTable::default(),
    };

    match cli.command {
        Commands::Artists => {
            list_artists(&artists);
        }

        Commands::Sounds {
            artist,
            search,
            sort,
            limit,
            output,
            no_summary,
        } => {
            let args = SoundsArgs {
                artist,
                search,
                sort,
                limit,
                output_json: output,
                print_summary: !no_summary,
            };

            // Validate args first
            validate_args(&args)?;

            let tracker = SoundTracker::new(artists, GvizClient::new()?);
            execute_sounds(&tracker, &args)?;
        }

        Commands::Summary { artist } => {
            let tracker = SoundTracker::new(artists, GvizClient::new()?);
            execute_summary(&tracker, &artist)?;
        }

        Commands::Overview => {
            let tracker = SoundTracker::new(artists, GvizClient::new()?);
            execute_overview(&tracker)?;
        }

        Commands::Sound { artist, id } => {
            let tracker = SoundTracker::new(artists, GvizClient::new()?);
            execute_sound(&tracker, &artist, &id)?;
        }

        Commands::Validate { file } => {
            validate_report_file(&file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
