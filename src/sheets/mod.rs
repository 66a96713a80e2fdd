//! Source fetcher for spreadsheet tabs.
//!
//! This module handles:
//! - Fetching a tab of rows from the gviz endpoint
//! - Unwrapping and decoding the gviz payload
//! - Lowering raw cells into [`CellValue`]

pub mod client;
pub mod types;

use crate::utils::error::FetchError;

// Re-export main types
pub use client::{decode_rows, extract_json_payload, GvizClient};
pub use types::{CellValue, Row};

/// Anything that can hand back the rows of one spreadsheet tab
///
/// The tracker only talks to this trait, so tests plug in fixtures
/// instead of the network.
pub trait RowSource {
    /// Fetch every row of `tab_id` inside `sheet_id`, in sheet order
    fn fetch_rows(&self, sheet_id: &str, tab_id: &str) -> Result<Vec<Row>, FetchError>;
}

impl<T: RowSource + ?Sized> RowSource for &T {
    fn fetch_rows(&self, sheet_id: &str, tab_id: &str) -> Result<Vec<Row>, FetchError> {
        (**self).fetch_rows(sheet_id, tab_id)
    }
}
