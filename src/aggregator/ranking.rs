//! Search and ordering for sound lists.

use crate::parser::schema::Sound;
use clap::ValueEnum;
use std::cmp::Ordering;

/// Ordering applied to a sound list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    /// Most posts first
    #[default]
    PostsDesc,
    PostsAsc,
    /// Fastest growing first
    GrowthDesc,
    GrowthAsc,
    NameAsc,
    NameDesc,
}

impl SortOrder {
    fn compare(self, a: &Sound, b: &Sound) -> Ordering {
        match self {
            SortOrder::PostsDesc => b.total_posts.cmp(&a.total_posts),
            SortOrder::PostsAsc => a.total_posts.cmp(&b.total_posts),
            SortOrder::GrowthDesc => b.daily_growth.cmp(&a.daily_growth),
            SortOrder::GrowthAsc => a.daily_growth.cmp(&b.daily_growth),
            SortOrder::NameAsc => compare_names(&a.name, &b.name),
            SortOrder::NameDesc => compare_names(&b.name, &a.name),
        }
    }
}

/// Case-insensitive name order, raw text as tie-break
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Sounds whose name contains `query` (case-insensitive), sorted by `order`
///
/// An empty query keeps every sound. Sorting is stable, so ties keep
/// their sheet order.
pub fn filter_and_sort<'a>(sounds: &'a [Sound], query: &str, order: SortOrder) -> Vec<&'a Sound> {
    let needle = query.trim().to_lowercase();

    let mut matches: Vec<&Sound> = sounds
        .iter()
        .filter(|s| needle.is_empty() || s.name.to_lowercase().contains(&needle))
        .collect();

    matches.sort_by(|a, b| order.compare(a, b));
    matches
}
