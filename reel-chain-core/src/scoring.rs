// ---------------------------------------------------------------------------
// Similarity scoring — directional compatibility between two items
// ---------------------------------------------------------------------------
//
// Pure function, no side effects. The score reads `b.suggested` and the
// keyword containment of `b.life_advice` only, so `score(a, b)` and
// `score(b, a)` generally differ. Callers that need one weight per pair pick
// a canonical direction themselves (see `graph::SimilarityGraph::build`).
// ---------------------------------------------------------------------------

use crate::text::shared_word_count;
use crate::types::ItemRecord;

// ---------------------------------------------------------------------------
// Weights
// ---------------------------------------------------------------------------

const SAME_GENRE_BONUS: f64 = 12.0;
const ADVICE_WORD_BONUS: f64 = 5.0;
const NO_SHARED_ADVICE_PENALTY: f64 = 8.0;
const ADVICE_KEYWORD_BONUS: f64 = 4.0;
const REVIEW_WORD_BONUS: f64 = 2.0;
const SAME_DISCOVERY_BONUS: f64 = 6.0;
const RATING_GAP_DIVISOR: f64 = 2.0;
const SUGGESTED_BONUS: f64 = 2.0;

/// Substrings of the target's life advice that earn `ADVICE_KEYWORD_BONUS`.
pub const ADVICE_KEYWORDS: [&str; 4] = ["resilience", "character", "growth", "strength"];

// ---------------------------------------------------------------------------
// Score
// ---------------------------------------------------------------------------

/// Score how well `b` follows `a` in a chain. May be negative.
pub fn score(a: &ItemRecord, b: &ItemRecord) -> f64 {
	let mut total = 0.0;

	if a.genre == b.genre {
		total += SAME_GENRE_BONUS;
	}

	let advice_overlap = shared_word_count(&a.life_advice, &b.life_advice);
	total += advice_overlap as f64 * ADVICE_WORD_BONUS;
	if advice_overlap == 0 {
		total -= NO_SHARED_ADVICE_PENALTY;
	}

	// Substring containment, so "strengths" and "overgrowth" count too.
	if ADVICE_KEYWORDS.iter().any(|kw| b.life_advice.contains(kw)) {
		total += ADVICE_KEYWORD_BONUS;
	}

	let review_overlap = shared_word_count(&a.review_highlights, &b.review_highlights);
	total += review_overlap as f64 * REVIEW_WORD_BONUS;

	if a.discovery_method == b.discovery_method {
		total += SAME_DISCOVERY_BONUS;
	}

	total -= (a.avg_rating - b.avg_rating).abs() / RATING_GAP_DIVISOR;

	if b.suggested {
		total += SUGGESTED_BONUS;
	}

	total
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
