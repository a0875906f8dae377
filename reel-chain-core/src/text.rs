// ---------------------------------------------------------------------------
// Text helpers — title normalization and whitespace token sets
// ---------------------------------------------------------------------------
//
// Shared by the ingest layer (record construction) and the start resolver
// (query normalization) so both sides of a title comparison agree.
// ---------------------------------------------------------------------------

use std::collections::HashSet;

// ---------------------------------------------------------------------------
// Quote repair
// ---------------------------------------------------------------------------

/// Smart-quote spellings and their straight replacements.
///
/// The mojibake rows are UTF-8 quote bytes decoded as Windows-1252. Longer
/// sequences come first: `â€` is a prefix of every other mojibake form.
const QUOTE_REWRITES: &[(&str, &str)] = &[
	("\u{e2}\u{20ac}\u{153}", "\""),
	("\u{e2}\u{20ac}\u{9d}", "\""),
	("\u{e2}\u{20ac}\u{2122}", "'"),
	("\u{e2}\u{20ac}\u{2dc}", "'"),
	("\u{e2}\u{20ac}", "\""),
	("\u{201c}", "\""),
	("\u{201d}", "\""),
	("\u{201e}", "\""),
	("\u{2018}", "'"),
	("\u{2019}", "'"),
	("\u{201a}", "'"),
];

/// Normalize a title for comparison: trim, lower-case, straighten quotes.
pub fn normalize_title(text: &str) -> String {
	let mut title = text.trim().to_lowercase();
	for (from, to) in QUOTE_REWRITES {
		if title.contains(from) {
			title = title.replace(from, to);
		}
	}
	title
}

// ---------------------------------------------------------------------------
// Tokenisation
// ---------------------------------------------------------------------------

/// Split on whitespace into a set. No punctuation stripping, no case folding.
pub fn word_set(text: &str) -> HashSet<&str> {
	text.split_whitespace().collect()
}

/// Number of distinct whitespace tokens shared by `a` and `b`.
pub fn shared_word_count(a: &str, b: &str) -> usize {
	let left = word_set(a);
	let right = word_set(b);
	left.intersection(&right).count()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn normalize_trims_and_lowercases() {
		assert_eq!(normalize_title("  The Pursuit of Happyness "), "the pursuit of happyness");
	}

	#[test]
	fn normalize_straightens_unicode_quotes() {
		assert_eq!(normalize_title("\u{201c}Up\u{201d}"), "\"up\"");
		assert_eq!(normalize_title("Schindler\u{2019}s List"), "schindler's list");
		assert_eq!(normalize_title("\u{2018}quoted\u{2019}"), "'quoted'");
	}

	#[test]
	fn normalize_repairs_mojibake_apostrophe_before_prefix() {
		let garbled = "Schindler\u{e2}\u{20ac}\u{2122}s List";
		assert_eq!(normalize_title(garbled), "schindler's list");
	}

	#[test]
	fn normalize_repairs_mojibake_double_quotes() {
		let garbled = "\u{e2}\u{20ac}\u{153}Up\u{e2}\u{20ac}\u{9d}";
		assert_eq!(normalize_title(garbled), "\"up\"");
	}

	#[test]
	fn normalize_is_idempotent() {
		let once = normalize_title(" It\u{2019}s A WONDERFUL Life ");
		assert_eq!(normalize_title(&once), once);
	}

	#[test]
	fn word_set_collapses_duplicates() {
		let set = word_set("keep going keep  going\tnow");
		assert_eq!(set.len(), 3);
		assert!(set.contains("keep"));
		assert!(set.contains("now"));
	}

	#[test]
	fn word_set_keeps_punctuation() {
		let set = word_set("grow, grow");
		assert!(set.contains("grow,"));
		assert!(set.contains("grow"));
		assert_eq!(set.len(), 2);
	}

	#[test]
	fn shared_word_count_counts_distinct_tokens() {
		assert_eq!(shared_word_count("be kind be brave", "be brave always"), 2);
		assert_eq!(shared_word_count("", "anything"), 0);
	}
}
