//! Typed data model for sounds, their series, and report files.
//!
//! Field names serialize in camelCase so reports match what the
//! dashboard front end reads.

use serde::{Deserialize, Serialize};

/// Cumulative post count for one sound on one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimePoint {
    /// Canonical `YYYY-MM-DD` date
    pub date: String,

    pub post_count: u64,
}

impl TimePoint {
    pub fn new(date: impl Into<String>, post_count: u64) -> Self {
        Self {
            date: date.into(),
            post_count,
        }
    }
}

/// Non-empty, row-ordered sequence of [`TimePoint`]s
///
/// Only constructible from at least one point, so the latest value
/// always exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TimePoint>", into = "Vec<TimePoint>")]
pub struct TimeSeries(Vec<TimePoint>);

impl TimeSeries {
    /// Wrap points; `None` when there are none
    pub fn new(points: Vec<TimePoint>) -> Option<Self> {
        if points.is_empty() {
            None
        } else {
            Some(Self(points))
        }
    }

    /// Last point in the series
    pub fn latest(&self) -> &TimePoint {
        &self.0[self.0.len() - 1]
    }

    /// Second-to-last point, or the only point for a single-day series
    pub fn previous(&self) -> &TimePoint {
        if self.0.len() > 1 {
            &self.0[self.0.len() - 2]
        } else {
            &self.0[0]
        }
    }

    pub fn points(&self) -> &[TimePoint] {
        &self.0
    }

    /// Up to `n` trailing points
    pub fn recent(&self, n: usize) -> &[TimePoint] {
        let start = self.0.len().saturating_sub(n);
        &self.0[start..]
    }
}

impl TryFrom<Vec<TimePoint>> for TimeSeries {
    type Error = &'static str;

    fn try_from(points: Vec<TimePoint>) -> Result<Self, Self::Error> {
        TimeSeries::new(points).ok_or("series must contain at least one point")
    }
}

impl From<TimeSeries> for Vec<TimePoint> {
    fn from(series: TimeSeries) -> Self {
        series.0
    }
}

/// Direction of the latest day-over-day change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn symbol(self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
            Trend::Flat => "•",
        }
    }
}

/// One tracked sound with its derived metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sound {
    /// URL-safe slug of `name`
    pub id: String,

    pub name: String,

    /// Artist id the sound was fetched for
    pub artist: String,

    /// Post count on the latest day
    pub total_posts: u64,

    /// Latest minus previous post count (may be negative)
    pub daily_growth: i64,

    pub is_spike: bool,

    /// Date of the latest point
    pub last_updated: String,

    pub series: TimeSeries,
}

impl Sound {
    pub fn trend(&self) -> Trend {
        match self.daily_growth.signum() {
            1 => Trend::Up,
            -1 => Trend::Down,
            _ => Trend::Flat,
        }
    }
}

/// Population statistics over one artist's sounds
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistSummary {
    pub total_sounds: usize,

    /// Sum of every sound's daily growth
    pub combined_daily_growth: i64,

    pub spiking_today: usize,

    /// Same value as `spiking_today`; week-long detection is not implemented
    pub week_spikes: usize,

    /// `last_updated` of the first sound, empty when there are none
    pub last_updated: String,
}

/// Report file written by `sounds --output`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoundReport {
    /// Schema version for compatibility checking
    pub version: String,

    pub artist: String,

    pub display_name: String,

    /// RFC 3339 timestamp of when the report was generated
    pub generated_at: String,

    pub summary: ArtistSummary,

    pub sounds: Vec<Sound>,
}
