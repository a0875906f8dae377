// ---------------------------------------------------------------------------
// Start resolution — map a free-text query to a catalog item
// ---------------------------------------------------------------------------
//
// Two passes over the catalog in collection order:
//
// 1. Exact match on the normalized title.
// 2. Only if pass 1 finds nothing, the first title that contains the
//    normalized query as a substring.
//
// Containment is first-match, not best-match.
// ---------------------------------------------------------------------------

use crate::text::normalize_title;
use crate::types::{ItemId, ItemRecord};

/// Resolve `query` to the id of a catalog item, or `None` when neither pass
/// matches.
pub fn resolve_start(items: &[ItemRecord], query: &str) -> Option<ItemId> {
	let wanted = normalize_title(query);

	if let Some(item) = items.iter().find(|item| item.title == wanted) {
		return Some(item.id);
	}

	items
		.iter()
		.find(|item| item.title.contains(wanted.as_str()))
		.map(|item| item.id)
}

/// Titles that share at least one whitespace token with `query`, in
/// collection order, capped at `limit`.
///
/// Used to hint at near misses after `resolve_start` returns `None`.
pub fn suggest_titles<'a>(items: &'a [ItemRecord], query: &str, limit: usize) -> Vec<&'a str> {
	let wanted = normalize_title(query);
	let words: Vec<&str> = wanted.split_whitespace().collect();
	if words.is_empty() {
		return vec![];
	}

	items
		.iter()
		.filter(|item| words.iter().any(|w| item.title.contains(w)))
		.map(|item| item.title.as_str())
		.take(limit)
		.collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
