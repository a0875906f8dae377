// ---------------------------------------------------------------------------
// Deduplication — drop repeated titles from a freshly parsed catalog
// ---------------------------------------------------------------------------
//
// Pure function over an explicit record list. No process-wide "seen" state:
// every call starts from an empty set.
// ---------------------------------------------------------------------------

use std::collections::HashSet;

use reel_chain_core::ItemRecord;

/// Result of `dedup_by_title`.
#[derive(Debug, Clone, Default)]
pub struct DedupOutcome {
	/// Surviving records, renumbered so `id == position`.
	pub kept: Vec<ItemRecord>,
	/// Later duplicates in encounter order. They keep the id they came in
	/// with.
	pub dropped: Vec<ItemRecord>,
}

/// Keep the first record for each title, drop the rest.
///
/// Titles are compared as stored, so records must already carry normalized
/// titles. O(N).
pub fn dedup_by_title(records: Vec<ItemRecord>) -> DedupOutcome {
	let mut seen: HashSet<String> = HashSet::with_capacity(records.len());
	let mut outcome = DedupOutcome::default();

	for mut record in records {
		if seen.contains(&record.title) {
			outcome.dropped.push(record);
			continue;
		}
		seen.insert(record.title.clone());
		record.id = outcome.kept.len();
		outcome.kept.push(record);
	}

	outcome
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
