use serde::{Deserialize, Serialize};

use crate::search::{DEFAULT_MAX_LENGTH, SearchPolicy};

/// Default graph-build cutoff.
pub const DEFAULT_THRESHOLD: f64 = 6.0;

/// Tuning knobs for graph construction and chain search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
	/// Minimum pair score for an edge (inclusive).
	pub threshold: f64,
	/// Step bound; the start item counts as step 1.
	#[serde(rename = "maxLength")]
	pub max_length: usize,
	pub policy: SearchPolicy,
}

impl Default for ChainConfig {
	fn default() -> Self {
		Self {
			threshold: DEFAULT_THRESHOLD,
			max_length: DEFAULT_MAX_LENGTH,
			policy: SearchPolicy::Greedy,
		}
	}
}
