//! Plain-text rendering for the terminal.

use crate::parser::schema::{ArtistSummary, Sound, TimePoint};
use crate::utils::config::RECENT_WINDOW;

const SPARK_BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Sparkline of post counts, scaled between the window's min and max
pub fn sparkline(points: &[TimePoint]) -> String {
    let min = points.iter().map(|p| p.post_count).min().unwrap_or(0);
    let max = points.iter().map(|p| p.post_count).max().unwrap_or(0);
    let span = max - min;

    points
        .iter()
        .map(|p| {
            if span == 0 {
                SPARK_BARS[0]
            } else {
                let level = u128::from(p.post_count - min) * (SPARK_BARS.len() as u128 - 1)
                    / u128::from(span);
                SPARK_BARS[level as usize]
            }
        })
        .collect()
}

/// Render summary cards as aligned lines
pub fn render_summary(display_name: &str, summary: &ArtistSummary) -> String {
    let last_updated = if summary.last_updated.is_empty() {
        "-"
    } else {
        summary.last_updated.as_str()
    };

    [
        format!("  {} Analytics", display_name),
        format!("  {:<20} {:>10}", "Total Sounds", summary.total_sounds),
        format!("  {:<20} {:>+10}", "Combined Daily Δ", summary.combined_daily_growth),
        format!("  {:<20} {:>10}", "Spiking Today", summary.spiking_today),
        format!("  {:<20} {:>10}", "Week Spikes", summary.week_spikes),
        format!("  {:<20} {:>10}", "Last Updated", last_updated),
    ]
    .join("\n")
}

/// Render one summary line per artist; a failed artist shows its error instead
pub fn render_overview<E: std::fmt::Display>(entries: &[(&str, Result<&ArtistSummary, E>)]) -> String {
    if entries.is_empty() {
        return "  No artists configured.".to_string();
    }

    let mut lines = Vec::with_capacity(entries.len() + 2);
    lines.push(format!(
        "  {:<16} {:>8} {:>12} {:>9} {:>12}",
        "Artist", "Sounds", "Daily Δ", "Spiking", "Updated"
    ));
    lines.push(format!("  {}", "─".repeat(61)));

    for (name, outcome) in entries {
        match outcome {
            Ok(summary) => lines.push(format!(
                "  {:<16} {:>8} {:>+12} {:>9} {:>12}",
                truncate(name, 16),
                summary.total_sounds,
                summary.combined_daily_growth,
                summary.spiking_today,
                if summary.last_updated.is_empty() {
                    "-"
                } else {
                    summary.last_updated.as_str()
                }
            )),
            Err(err) => lines.push(format!(
                "  {:<16} Failed to load data: {}",
                truncate(name, 16),
                err
            )),
        }
    }

    lines.join("\n")
}

/// Render the full series of one sound, oldest first
pub fn render_series(sound: &Sound) -> String {
    let mut lines = vec![
        format!("  {} ({})", sound.name, sound.id),
        format!(
            "  Posts {} | Daily Δ {:+} | {}",
            sound.total_posts,
            sound.daily_growth,
            if sound.is_spike { "SPIKE" } else { "steady" }
        ),
        format!("  {}", sparkline(sound.series.points())),
        String::new(),
        format!("  {:<12} {:>14} {:>12}", "Date", "Posts", "Δ"),
    ];

    let mut previous: Option<u64> = None;
    for point in sound.series.points() {
        let delta = previous.map_or_else(
            || "-".to_string(),
            |prev| format!("{:+}", i128::from(point.post_count) - i128::from(prev)),
        );
        lines.push(format!("  {:<12} {:>14} {:>12}", point.date, point.post_count, delta));
        previous = Some(point.post_count);
    }

    lines.join("\n")
}

/// Render a sound list as a table
pub fn render_sound_table(sounds: &[&Sound]) -> String {
    if sounds.is_empty() {
        return "  No sounds found.".to_string();
    }

    let mut lines = Vec::with_capacity(sounds.len() + 2);
    lines.push(format!(
        "  {:<40} {:>12} {:>10}  {:<10}",
        "Sound", "Posts", "Daily Δ", "Last 10d"
    ));
    lines.push(format!("  {}", "─".repeat(78)));

    for sound in sounds {
        let mut name = truncate(&sound.name, 32);
        if sound.is_spike {
            name.push_str(" [SPIKE]");
        }
        lines.push(format!(
            "  {:<40} {:>12} {} {:>+8}  {}",
            name,
            sound.total_posts,
            sound.trend().symbol(),
            sound.daily_growth,
            sparkline(sound.series.recent(RECENT_WINDOW))
        ));
    }

    lines.join("\n")
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars - 3).collect();
        format!("{}...", head)
    }
}
