//! Derive per-sound metrics from a parsed series.
//!
//! Only the last two points matter: the latest total, the change since
//! the day before, and whether that change counts as a spike.

use crate::parser::schema::{Sound, TimeSeries};
use crate::parser::DailyLog;
use crate::utils::config::SPIKE_GROWTH_RATIO;
use log::debug;

/// URL-safe id for a sound name
///
/// Lowercases, collapses every run of characters outside `[a-z0-9]`
/// into one `-`, and strips separators from both ends.
///
/// # Example
/// ```
/// use sound_tracker::aggregator::slugify;
///
/// assert_eq!(slugify("Lose Control (feat. X)"), "lose-control-feat-x");
/// ```
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for c in name.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator {
                slug.push('-');
                pending_separator = false;
            }
            slug.push(c);
        } else if !slug.is_empty() {
            pending_separator = true;
        }
    }

    slug
}

/// Whether growth over `previous_total` counts as a spike
///
/// Growth of at least 20% of the previous total is a spike; from a zero
/// base any positive growth is.
pub fn is_spike(previous_total: u64, daily_growth: i64) -> bool {
    if previous_total > 0 {
        daily_growth as f64 / previous_total as f64 >= SPIKE_GROWTH_RATIO
    } else {
        daily_growth > 0
    }
}

/// `current - previous`, saturated to the `i64` range
fn growth_between(previous: u64, current: u64) -> i64 {
    let delta = i128::from(current) - i128::from(previous);
    delta.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

/// Build a [`Sound`] from its series
///
/// **Public** - main entry point for metric derivation
///
/// # Arguments
/// * `artist` - Artist id the series was fetched for
/// * `name` - Sound name from the header row
/// * `series` - Non-empty, row-ordered post counts
pub fn derive_sound(artist: &str, name: &str, series: TimeSeries) -> Sound {
    let latest = series.latest();
    let previous = series.previous();

    let total_posts = latest.post_count;
    let daily_growth = growth_between(previous.post_count, total_posts);

    Sound {
        id: slugify(name),
        name: name.to_string(),
        artist: artist.to_string(),
        total_posts,
        daily_growth,
        is_spike: is_spike(previous.post_count, daily_growth),
        last_updated: latest.date.clone(),
        series,
    }
}

/// Derive one sound per named series in the log, in header order
pub fn derive_sounds(artist: &str, log: DailyLog) -> Vec<Sound> {
    let sounds: Vec<Sound> = log
        .into_series()
        .into_iter()
        .map(|(name, series)| derive_sound(artist, &name, series))
        .collect();

    debug!(
        "Derived {} sounds for {} ({} spiking)",
        sounds.len(),
        artist,
        sounds.iter().filter(|s| s.is_spike).count()
    );

    sounds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::TimePoint;

    fn series(counts: &[u64]) -> TimeSeries {
        let points = counts
            .iter()
            .enumerate()
            .map(|(i, c)| TimePoint::new(format!("2025-02-{:02}", i + 1), *c))
            .collect();
        TimeSeries::new(points).unwrap()
    }

    #[test]
    fn test_slugify() {
        let slug = slugify("Lose Control (feat. X)");
        assert_eq!(slug, "lose-control-feat-x");
        assert_eq!(slugify("Lose Control (feat. X)"), slug);
        assert_eq!(slugify("  --Hello,   World!!  "), "hello-world");
        assert_eq!(slugify("Café 2025"), "caf-2025");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_growth_two_points() {
        let sound = derive_sound("bnyx", "Track", series(&[100, 150]));
        assert_eq!(sound.total_posts, 150);
        assert_eq!(sound.daily_growth, 50);
        assert_eq!(sound.last_updated, "2025-02-02");
        assert!(sound.is_spike);
    }

    #[test]
    fn test_growth_single_point() {
        let sound = derive_sound("bnyx", "Track", series(&[100]));
        assert_eq!(sound.total_posts, 100);
        assert_eq!(sound.daily_growth, 0);
        assert!(!sound.is_spike);
    }

    #[test]
    fn test_negative_growth() {
        let sound = derive_sound("bnyx", "Track", series(&[10, 500, 480]));
        assert_eq!(sound.daily_growth, -20);
        assert!(!sound.is_spike);
    }

    #[test]
    fn test_growth_saturates_on_huge_counts() {
        assert_eq!(growth_between(0, u64::MAX), i64::MAX);
        assert_eq!(growth_between(u64::MAX, 0), i64::MIN);

        let sound = derive_sound("bnyx", "Track", series(&[u64::MAX, 5]));
        assert_eq!(sound.daily_growth, i64::MIN);
        assert!(!sound.is_spike);
    }

    #[test]
    fn test_spike_boundary() {
        assert!(is_spike(100, 20));
        assert!(!is_spike(100, 19));
        assert!(is_spike(0, 5));
        assert!(!is_spike(0, 0));
    }
}
