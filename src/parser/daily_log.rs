//! Parser for the daily-log tab.
//!
//! Layout of the tab:
//! - row 0: column 0 unused, columns 1..N hold sound names
//! - rows 1..: column 0 holds the date, columns 1..N the cumulative post
//!   count for the sound named in the same header column
//!
//! Rows are taken in sheet order; the parser never sorts by date.
//! Dirty cells degrade instead of failing: rows without a date are
//! skipped, missing or non-numeric counts become 0, and unnamed header
//! columns get a synthetic `Sound {i}` label.

use super::date::normalize_date;
use super::schema::{TimePoint, TimeSeries};
use crate::sheets::{CellValue, Row};
use crate::utils::config::SYNTHETIC_NAME_PREFIX;
use log::{debug, warn};
use std::collections::HashMap;

/// Per-sound series, in first-seen header order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyLog {
    entries: Vec<(String, Vec<TimePoint>)>,
    index: HashMap<String, usize>,
}

impl DailyLog {
    /// Slot for `name`, creating an empty series on first sight
    fn slot_for(&mut self, name: String) -> usize {
        if let Some(&slot) = self.index.get(&name) {
            debug!("Header name '{}' repeats; columns share one series", name);
            return slot;
        }
        let slot = self.entries.len();
        self.index.insert(name.clone(), slot);
        self.entries.push((name, Vec::new()));
        slot
    }

    /// Sound names in header order
    pub fn sound_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Points recorded for one sound
    pub fn points(&self, name: &str) -> Option<&[TimePoint]> {
        self.index
            .get(name)
            .map(|&slot| self.entries[slot].1.as_slice())
    }

    /// Number of distinct sounds
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the log, dropping sounds that never got a point
    pub fn into_series(self) -> Vec<(String, TimeSeries)> {
        self.entries
            .into_iter()
            .filter_map(|(name, points)| match TimeSeries::new(points) {
                Some(series) => Some((name, series)),
                None => {
                    debug!("Dropping '{}': no dated rows", name);
                    None
                }
            })
            .collect()
    }
}

/// Parse raw daily-log rows into per-sound series
///
/// **Public** - main entry point for parsing
///
/// # Arguments
/// * `rows` - All rows of the tab, header first
///
/// # Returns
/// Series keyed by sound name. Never fails; an empty input yields an
/// empty log.
pub fn parse_daily_log(rows: &[Row]) -> DailyLog {
    let mut log = DailyLog::default();

    let Some((header, data_rows)) = rows.split_first() else {
        debug!("Daily log is empty");
        return log;
    };

    // Column j (1-based) writes into column_slots[j - 1]
    let column_slots: Vec<usize> = header
        .iter()
        .enumerate()
        .skip(1)
        .map(|(i, cell)| {
            let name = cell.as_label().unwrap_or_else(|| {
                let synthetic = format!("{} {}", SYNTHETIC_NAME_PREFIX, i);
                warn!("Header column {} has no name, using '{}'", i, synthetic);
                synthetic
            });
            log.slot_for(name)
        })
        .collect();

    let mut skipped = 0usize;

    for (row_number, row) in data_rows.iter().enumerate() {
        let Some(raw_date) = row.first().and_then(CellValue::as_date_text) else {
            skipped += 1;
            debug!("Skipping row {}: no date", row_number + 1);
            continue;
        };
        let date = normalize_date(&raw_date);

        if row.len() > header.len() {
            debug!(
                "Row {} has {} cells beyond the header, ignoring them",
                row_number + 1,
                row.len() - header.len()
            );
        }

        for (offset, &slot) in column_slots.iter().enumerate() {
            let post_count = row.get(offset + 1).map_or(0, CellValue::as_post_count);
            log.entries[slot]
                .1
                .push(TimePoint::new(date.clone(), post_count));
        }
    }

    if skipped > 0 {
        warn!("Skipped {} rows without a date", skipped);
    }

    debug!(
        "Parsed {} sounds across {} dated rows",
        log.len(),
        data_rows.len() - skipped
    );

    log
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn num(n: f64) -> CellValue {
        CellValue::Number(n)
    }

    #[test]
    fn test_empty_rows() {
        assert!(parse_daily_log(&[]).is_empty());
    }

    #[test]
    fn test_header_only() {
        let rows = vec![vec![CellValue::Empty, text("A"), text("B")]];
        let log = parse_daily_log(&rows);
        assert_eq!(log.len(), 2);
        assert!(log.points("A").unwrap().is_empty());
        assert!(log.into_series().is_empty());
    }

    #[test]
    fn test_basic_parse() {
        let rows = vec![
            vec![CellValue::Empty, text("A"), text("B")],
            vec![text("2/13/25"), num(100.0), num(5.0)],
            vec![text("2/14/25"), num(150.0), num(6.0)],
        ];
        let log = parse_daily_log(&rows);

        assert_eq!(log.sound_names().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(
            log.points("A").unwrap(),
            &[
                TimePoint::new("2025-02-13", 100),
                TimePoint::new("2025-02-14", 150)
            ]
        );
        assert_eq!(log.points("B").unwrap()[1].post_count, 6);
    }

    #[test]
    fn test_synthetic_header_names() {
        let rows = vec![
            vec![CellValue::Empty, text("A"), CellValue::Empty, text("   ")],
            vec![text("1/1/25"), num(1.0), num(2.0), num(3.0)],
        ];
        let log = parse_daily_log(&rows);
        assert_eq!(
            log.sound_names().collect::<Vec<_>>(),
            vec!["A", "Sound 2", "Sound 3"]
        );
        assert_eq!(log.points("Sound 3").unwrap()[0].post_count, 3);
    }

    #[test]
    fn test_row_without_date_skipped() {
        let rows = vec![
            vec![CellValue::Empty, text("A")],
            vec![CellValue::Empty, num(10.0)],
            vec![text("1/2/25"), num(12.0)],
        ];
        let log = parse_daily_log(&rows);
        assert_eq!(log.points("A").unwrap(), &[TimePoint::new("2025-01-02", 12)]);
    }

    #[test]
    fn test_short_rows_pad_with_zero() {
        let rows = vec![
            vec![CellValue::Empty, text("A"), text("B")],
            vec![text("1/2/25"), num(12.0)],
        ];
        let log = parse_daily_log(&rows);
        assert_eq!(log.points("B").unwrap(), &[TimePoint::new("2025-01-02", 0)]);
    }

    #[test]
    fn test_extra_cells_ignored() {
        let rows = vec![
            vec![CellValue::Empty, text("A")],
            vec![text("1/2/25"), num(12.0), num(99.0)],
        ];
        let log = parse_daily_log(&rows);
        assert_eq!(log.len(), 1);
        assert_eq!(log.points("A").unwrap().len(), 1);
    }

    #[test]
    fn test_duplicate_header_shares_series() {
        let rows = vec![
            vec![CellValue::Empty, text("A"), text("A")],
            vec![text("1/2/25"), num(1.0), num(2.0)],
        ];
        let log = parse_daily_log(&rows);
        assert_eq!(log.len(), 1);
        assert_eq!(log.points("A").unwrap().len(), 2);
    }
}
