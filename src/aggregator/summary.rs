//! Reduce a list of sounds into artist-level statistics.

use crate::parser::schema::{ArtistSummary, Sound};

/// Summarize an artist's sounds
///
/// `last_updated` is taken from the first sound in `sounds`, not the
/// latest date across all of them. `week_spikes` repeats
/// `spiking_today` until week-long detection exists.
pub fn summarize(sounds: &[Sound]) -> ArtistSummary {
    let spiking_today = sounds.iter().filter(|s| s.is_spike).count();

    ArtistSummary {
        total_sounds: sounds.len(),
        combined_daily_growth: sounds
            .iter()
            .fold(0i64, |acc, s| acc.saturating_add(s.daily_growth)),
        spiking_today,
        week_spikes: spiking_today,
        last_updated: sounds
            .first()
            .map(|s| s.last_updated.clone())
            .unwrap_or_default(),
    }
}
