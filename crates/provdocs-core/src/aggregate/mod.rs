//! Aggregated views over loaded providers
//!
//! Each view joins the resource indexes into the shape its template
//! expects:
//! - operators/hooks per integration, optionally filtered by tags
//! - transfers with both endpoint integrations resolved
//! - simple per-package categories (logging, backends, connections, links)

mod operators;
mod simple;
mod transfers;

pub use operators::{prepare_operators_data, OperatorsHooksItem};
pub use simple::{collect_category, CategoryEntry, CategoryGroup, SimpleCategory};
pub use transfers::{prepare_transfer_data, TransferItem, PLACEHOLDER_INTEGRATIONS};

use std::collections::BTreeSet;

/// Set of tags; an item matches when it shares at least one tag
pub type TagFilter = BTreeSet<String>;

/// Build a tag filter from repeated values. No values means no filter.
pub fn tag_filter<I, S>(tags: I) -> Option<TagFilter>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let filter: TagFilter = tags.into_iter().map(Into::into).collect();
    if filter.is_empty() {
        None
    } else {
        Some(filter)
    }
}

fn matches_tags(filter: &TagFilter, tags: &BTreeSet<String>) -> bool {
    !filter.is_disjoint(tags)
}
