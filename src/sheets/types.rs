//! Types for the gviz JSON payload and the loosely-typed cells it carries.
//!
//! The gviz endpoint returns `{"table": {"rows": [{"c": [cell, ...]}]}}`
//! where each cell is `null` or `{"v": scalar, ...}`. Only `v` is read;
//! the formatted text next to it is dropped during deserialization.
//! Cells are lowered into [`CellValue`] right away so nothing past the
//! sheet boundary sees raw JSON.

use crate::utils::config::MAX_POST_COUNT;
use serde::Deserialize;

/// A single spreadsheet cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Absent cell or `null` value
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

/// One row of cells, in column order
pub type Row = Vec<CellValue>;

impl CellValue {
    /// Cell as a column label; `None` when absent or blank
    pub fn as_label(&self) -> Option<String> {
        match self {
            CellValue::Empty => None,
            // Blank text counts as missing so every column ends up with a
            // usable name and whitespace never passes as a date.
            CellValue::Text(s) if s.trim().is_empty() => None,
            CellValue::Text(s) => Some(s.clone()),
            CellValue::Number(n) => Some(format_number(*n)),
            CellValue::Bool(b) => Some(b.to_string()),
        }
    }

    /// Cell as raw date text; `None` for absent, blank, zero or `false` cells
    pub fn as_date_text(&self) -> Option<String> {
        match self {
            CellValue::Number(n) if *n == 0.0 || n.is_nan() => None,
            CellValue::Bool(false) => None,
            other => other.as_label(),
        }
    }

    /// Cell as a cumulative post count
    ///
    /// Anything that does not read as a non-negative number counts as 0,
    /// the same as a missing cell.
    pub fn as_post_count(&self) -> u64 {
        match self {
            CellValue::Empty => 0,
            CellValue::Number(n) => count_from_f64(*n),
            CellValue::Bool(b) => u64::from(*b),
            CellValue::Text(s) => {
                let cleaned: String = s.trim().chars().filter(|c| *c != ',').collect();
                if cleaned.is_empty() {
                    return 0;
                }
                cleaned.parse::<f64>().map(count_from_f64).unwrap_or(0)
            }
        }
    }
}

impl From<serde_json::Value> for CellValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => CellValue::Text(s),
            serde_json::Value::Number(n) => n.as_f64().map_or(CellValue::Empty, CellValue::Number),
            serde_json::Value::Bool(b) => CellValue::Bool(b),
            // Arrays and objects never appear as cell values
            _ => CellValue::Empty,
        }
    }
}

fn count_from_f64(n: f64) -> u64 {
    if n.is_finite() && n > 0.0 {
        // `as` saturates at u64::MAX before the clamp
        (n.trunc() as u64).min(MAX_POST_COUNT)
    } else {
        0
    }
}

/// Render a number the way a spreadsheet shows it: integers without `.0`
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// Top-level gviz response
#[derive(Debug, Deserialize)]
pub struct GvizResponse {
    /// "ok", "warning" or "error"
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub errors: Vec<GvizMessage>,

    #[serde(default)]
    pub table: Option<GvizTable>,
}

/// Error or warning entry in a gviz response
#[derive(Debug, Deserialize)]
pub struct GvizMessage {
    #[serde(default)]
    pub reason: Option<String>,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub detailed_message: Option<String>,
}

impl GvizMessage {
    /// Most specific text available
    pub fn describe(&self) -> String {
        self.detailed_message
            .as_deref()
            .or(self.message.as_deref())
            .or(self.reason.as_deref())
            .unwrap_or("unknown error")
            .to_string()
    }
}

#[derive(Debug, Deserialize)]
pub struct GvizTable {
    #[serde(default)]
    pub rows: Vec<GvizRow>,
}

#[derive(Debug, Deserialize)]
pub struct GvizRow {
    #[serde(default)]
    pub c: Vec<Option<GvizCell>>,
}

#[derive(Debug, Deserialize)]
pub struct GvizCell {
    /// Raw value
    #[serde(default)]
    pub v: serde_json::Value,
}

impl GvizRow {
    /// Lower the row into typed cells
    pub fn into_cells(self) -> Row {
        self.c
            .into_iter()
            .map(|cell| cell.map_or(CellValue::Empty, |c| CellValue::from(c.v)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_post_count_coercion() {
        assert_eq!(CellValue::Number(150.0).as_post_count(), 150);
        assert_eq!(CellValue::Number(12.9).as_post_count(), 12);
        assert_eq!(CellValue::Number(-4.0).as_post_count(), 0);
        assert_eq!(CellValue::Number(f64::NAN).as_post_count(), 0);
        assert_eq!(CellValue::Text("1,234".to_string()).as_post_count(), 1234);
        assert_eq!(CellValue::Text(" 42 ".to_string()).as_post_count(), 42);
        assert_eq!(CellValue::Text("n/a".to_string()).as_post_count(), 0);
        assert_eq!(CellValue::Text(String::new()).as_post_count(), 0);
        assert_eq!(CellValue::Bool(true).as_post_count(), 1);
        assert_eq!(CellValue::Empty.as_post_count(), 0);
    }

    #[test]
    fn test_huge_post_count_clamped() {
        assert_eq!(CellValue::Number(1.2e19).as_post_count(), MAX_POST_COUNT);
        assert_eq!(CellValue::Number(1e300).as_post_count(), MAX_POST_COUNT);
        assert_eq!(
            CellValue::Text("99999999999999999999".to_string()).as_post_count(),
            MAX_POST_COUNT
        );
        assert_eq!(CellValue::Number(6.9e18).as_post_count(), 6_900_000_000_000_000_000);
    }

    #[test]
    fn test_blank_text_is_not_a_label() {
        assert_eq!(CellValue::Text("   ".to_string()).as_label(), None);
        assert_eq!(CellValue::Text("\t".to_string()).as_label(), None);
        assert_eq!(
            CellValue::Text(" Glow ".to_string()).as_label(),
            Some(" Glow ".to_string())
        );
    }

    #[test]
    fn test_date_text_skips_falsy_cells() {
        assert_eq!(CellValue::Empty.as_date_text(), None);
        assert_eq!(CellValue::Text("  ".to_string()).as_date_text(), None);
        assert_eq!(CellValue::Number(0.0).as_date_text(), None);
        assert_eq!(CellValue::Bool(false).as_date_text(), None);
        assert_eq!(
            CellValue::Text("2/13/25".to_string()).as_date_text(),
            Some("2/13/25".to_string())
        );
        assert_eq!(CellValue::Number(45000.0).as_date_text(), Some("45000".to_string()));
    }

    #[test]
    fn test_row_lowering() {
        let row: GvizRow = serde_json::from_value(json!({
            "c": [{"v": "2/13/25", "f": "2/13/25"}, null, {"v": 12}, {"v": null}]
        }))
        .unwrap();

        assert_eq!(
            row.into_cells(),
            vec![
                CellValue::Text("2/13/25".to_string()),
                CellValue::Empty,
                CellValue::Number(12.0),
                CellValue::Empty,
            ]
        );
    }
}
