//! Pipeline entry points: fetch an artist's daily log and derive sounds.
//!
//! Fetch -> parse -> derive -> summarize. Each call fetches fresh rows;
//! nothing is cached or retried, and a failure for an artist fails the
//! whole call.

use crate::aggregator::{derive_sounds, summarize};
use crate::parser::parse_daily_log;
use crate::parser::schema::{ArtistSummary, Sound};
use crate::sheets::{Row, RowSource};
use crate::utils::config::ArtistTable;
use crate::utils::error::TrackerError;
use log::{debug, info};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag a caller flips when it no longer wants a result
///
/// Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Fetches and derives sound data for configured artists
pub struct SoundTracker<S> {
    artists: ArtistTable,
    source: S,
}

impl<S: RowSource> SoundTracker<S> {
    pub fn new(artists: ArtistTable, source: S) -> Self {
        Self { artists, source }
    }

    pub fn artists(&self) -> &ArtistTable {
        &self.artists
    }

    /// Fetch the daily log for `artist_id` and derive its sounds
    ///
    /// **Public** - main entry point for the pipeline
    ///
    /// # Errors
    /// * `TrackerError::UnknownArtist` - id not in the table; nothing is fetched
    /// * `TrackerError::SourceUnavailable` - the row source failed
    pub fn fetch_sounds(&self, artist_id: &str) -> Result<Vec<Sound>, TrackerError> {
        let rows = self.fetch_daily_log(artist_id)?;
        Ok(derive_from_rows(artist_id, &rows))
    }

    /// Raw daily-log rows for `artist_id`
    fn fetch_daily_log(&self, artist_id: &str) -> Result<Vec<Row>, TrackerError> {
        let config = self
            .artists
            .get(artist_id)
            .ok_or_else(|| TrackerError::UnknownArtist(artist_id.to_string()))?;

        info!("Fetching daily log for {}", artist_id);
        let rows = self
            .source
            .fetch_rows(&config.sheet_id, &config.tabs.daily_log)?;
        debug!("Fetched {} rows for {}", rows.len(), artist_id);

        Ok(rows)
    }

    /// Fetch sounds for `artist_id` and reduce them to a summary
    pub fn fetch_summary(&self, artist_id: &str) -> Result<ArtistSummary, TrackerError> {
        let sounds = self.fetch_sounds(artist_id)?;
        Ok(summarize(&sounds))
    }

    /// Summaries for every configured artist, in table order
    ///
    /// A failing artist gets its own `Err` entry; the others still load.
    pub fn fetch_overview(&self) -> Vec<(String, Result<ArtistSummary, TrackerError>)> {
        self.artists
            .iter()
            .map(|(artist_id, _)| (artist_id.to_string(), self.fetch_summary(artist_id)))
            .collect()
    }

    /// One sound of `artist_id` by its slug id; `Ok(None)` when no sound matches
    pub fn find_sound(&self, artist_id: &str, sound_id: &str) -> Result<Option<Sound>, TrackerError> {
        let sounds = self.fetch_sounds(artist_id)?;
        Ok(sounds.into_iter().find(|s| s.id == sound_id))
    }

    /// Like [`fetch_sounds`](Self::fetch_sounds), but yields `Ok(None)` when
    /// `token` was cancelled by the time the fetch finished
    ///
    /// The token is checked before parsing, so a cancelled fetch never
    /// reaches the parser. Errors are also dropped once cancelled; the
    /// caller has stopped listening.
    pub fn fetch_sounds_unless_cancelled(
        &self,
        artist_id: &str,
        token: &CancelToken,
    ) -> Result<Option<Vec<Sound>>, TrackerError> {
        let fetched = self.fetch_daily_log(artist_id);

        if token.is_cancelled() {
            debug!("Fetch for {} cancelled, discarding rows", artist_id);
            return Ok(None);
        }

        let rows = fetched?;
        Ok(Some(derive_from_rows(artist_id, &rows)))
    }
}

/// Parse and derive step of the pipeline
fn derive_from_rows(artist_id: &str, rows: &[Row]) -> Vec<Sound> {
    let log = parse_daily_log(rows);
    derive_sounds(artist_id, log)
}
