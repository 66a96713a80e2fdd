//! Configuration and constants for the tracker.
//!
//! The artist table maps an artist identifier to the spreadsheet and tab
//! that hold its daily log. It is plain data handed to the tracker at
//! construction, so tests can swap in their own table.

use super::error::ConfigError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

/// Default timeout for sheet requests
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Base URL for spreadsheet documents
pub const GVIZ_BASE_URL: &str = "https://docs.google.com/spreadsheets/d/";

/// Current report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Largest post count kept from a cell; larger values are clamped so
/// growth always fits in an `i64`
pub const MAX_POST_COUNT: u64 = i64::MAX as u64;

/// Day-over-day growth ratio at or above which a sound is spiking
pub const SPIKE_GROWTH_RATIO: f64 = 0.2;

/// Number of trailing days shown in list sparklines
pub const RECENT_WINDOW: usize = 10;

/// Label used for header columns with no name
pub const SYNTHETIC_NAME_PREFIX: &str = "Sound";

/// Tab identifiers (gids) within an artist's spreadsheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetTabs {
    /// Tab with one row per date and one column per sound
    pub daily_log: String,

    /// Overview tab (present in the sheets, not parsed yet)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,

    /// Ranking tab (present in the sheets, not parsed yet)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ranking: Option<String>,
}

/// Where one artist's data lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistConfig {
    /// Name shown to users; falls back to the artist id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Spreadsheet document id
    pub sheet_id: String,

    /// Tabs inside the spreadsheet
    pub tabs: SheetTabs,
}

/// Immutable lookup from artist id to its sheet location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistTable {
    artists: BTreeMap<String, ArtistConfig>,
}

impl ArtistTable {
    /// Build a table from `(artist_id, config)` pairs
    pub fn new(artists: impl IntoIterator<Item = (String, ArtistConfig)>) -> Self {
        Self {
            artists: artists.into_iter().collect(),
        }
    }

    /// Load a table from a JSON file
    ///
    /// **Public** - used by the CLI `--config` flag
    ///
    /// # Errors
    /// * `ConfigError::ReadFailed` - file cannot be read
    /// * `ConfigError::InvalidFormat` - not a valid table
    /// * `ConfigError::Empty` - table has no artists
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("Loading artist table from: {}", path.display());

        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parse a table from JSON text
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let table: ArtistTable = serde_json::from_str(text)?;
        if table.artists.is_empty() {
            return Err(ConfigError::Empty);
        }
        debug!("Loaded {} artists", table.artists.len());
        Ok(table)
    }

    /// Look up one artist
    pub fn get(&self, artist_id: &str) -> Option<&ArtistConfig> {
        self.artists.get(artist_id)
    }

    /// Iterate artists in id order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArtistConfig)> {
        self.artists.iter().map(|(id, cfg)| (id.as_str(), cfg))
    }

    pub fn len(&self) -> usize {
        self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    /// Display name for an artist, or the id itself when none is set
    pub fn display_name<'a>(&'a self, artist_id: &'a str) -> &'a str {
        self.get(artist_id)
            .and_then(|cfg| cfg.display_name.as_deref())
            .unwrap_or(artist_id)
    }
}

impl Default for ArtistTable {
    /// The two artists tracked in the reference deployment
    fn default() -> Self {
        Self::new([
            (
                "zukenee".to_string(),
                ArtistConfig {
                    display_name: Some("Zukenee".to_string()),
                    sheet_id: "1jhaGQjnxoBUOQvmvzRiAF2D5zr0KNKFOolol50l7Vsk".to_string(),
                    tabs: SheetTabs {
                        daily_log: "0".to_string(),
                        overview: Some("112283840".to_string()),
                        ranking: Some("3".to_string()),
                    },
                },
            ),
            (
                "bnyx".to_string(),
                ArtistConfig {
                    display_name: Some("BNYX".to_string()),
                    sheet_id: "1Y2LVYzNOhg2DRbH5CdCYpU1wi4cIkG2IJ1GCZOJ9G18".to_string(),
                    tabs: SheetTabs {
                        daily_log: "1122838640".to_string(),
                        overview: Some("316174675".to_string()),
                        ranking: Some("126563881".to_string()),
                    },
                },
            ),
        ])
    }
}
