use serde::{Deserialize, Serialize};

/// Position of an item in its catalog. Assigned once at load time.
pub type ItemId = usize;

// ---------------------------------------------------------------------------
// ItemRecord
// ---------------------------------------------------------------------------

/// One normalized catalog entry.
///
/// Text fields are already lower-cased by whoever built the record. The core
/// only reads records; it never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
	pub id: ItemId,
	/// Trimmed, lower-cased, straight-quoted. Unique within a catalog.
	pub title: String,
	pub genre: String,
	#[serde(rename = "releaseYear")]
	pub release_year: u32,
	#[serde(rename = "avgRating")]
	pub avg_rating: f64,
	#[serde(rename = "numReviews")]
	pub num_reviews: u64,
	#[serde(rename = "reviewHighlights")]
	pub review_highlights: String,
	#[serde(rename = "lifeInsight")]
	pub life_insight: String,
	#[serde(rename = "lifeAdvice")]
	pub life_advice: String,
	/// Compared for exact equality only.
	#[serde(rename = "discoveryMethod")]
	pub discovery_method: String,
	pub suggested: bool,
}

// ---------------------------------------------------------------------------
// Search results
// ---------------------------------------------------------------------------

/// The chain a search policy produced.
///
/// `total_score` is the sum of the stored edge weights between consecutive
/// path entries. It is 0.0 for empty and single-item paths.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChainOutcome {
	pub path: Vec<ItemId>,
	#[serde(rename = "totalScore")]
	pub total_score: f64,
}

impl ChainOutcome {
	pub fn empty() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.path.len()
	}

	pub fn is_empty(&self) -> bool {
		self.path.is_empty()
	}
}
