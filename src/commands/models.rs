use crate::aggregator::SortOrder;
use std::path::PathBuf;

/// Arguments for the sounds command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct SoundsArgs {
    /// Artist id from the artist table
    pub artist: String,

    /// Case-insensitive name filter
    pub search: Option<String>,

    pub sort: SortOrder,

    /// Maximum rows to print (all when None)
    pub limit: Option<usize>,

    /// Where to write the JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Print the summary above the table
    pub print_summary: bool,
}

impl Default for SoundsArgs {
    fn default() -> Self {
        Self {
            artist: String::new(),
            search: None,
            sort: SortOrder::PostsDesc,
            limit: None,
            output_json: None,
            print_summary: true,
        }
    }
}
