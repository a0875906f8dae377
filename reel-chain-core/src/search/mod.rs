// ---------------------------------------------------------------------------
// Path search — three interchangeable chain-building policies
// ---------------------------------------------------------------------------
//
// Every policy takes a graph, a start id and a step bound (the start counts
// as step 1) and returns a `ChainOutcome`. An id outside the graph yields an
// empty chain; a start without neighbors yields `[start]`.
//
// None of the policies is an exact longest-simple-path solver:
//
// - greedy: one forward walk, no backtracking.
// - exhaustive: breadth-first over every simple path prefix up to the bound.
//   Exponential in branching factor; callers cap the bound.
// - memoized: depth-first with a cache keyed by (node, depth) only, so a
//   cached continuation can ignore what the current branch has visited.
// ---------------------------------------------------------------------------

pub mod exhaustive;
pub mod greedy;
pub mod memoized;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ChainConfig;
use crate::graph::SimilarityGraph;
use crate::types::{ChainOutcome, ItemId, ItemRecord};

pub use exhaustive::exhaustive_chain;
pub use greedy::greedy_chain;
pub use memoized::memoized_chain;

/// Step bound used when the caller does not choose one.
pub const DEFAULT_MAX_LENGTH: usize = 6;

// ---------------------------------------------------------------------------
// SearchPolicy
// ---------------------------------------------------------------------------

/// Which traversal builds the chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchPolicy {
	#[default]
	Greedy,
	Exhaustive,
	Memoized,
}

impl SearchPolicy {
	pub const ALL: [SearchPolicy; 3] = [Self::Greedy, Self::Exhaustive, Self::Memoized];

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Greedy => "greedy",
			Self::Exhaustive => "exhaustive",
			Self::Memoized => "memoized",
		}
	}
}

impl fmt::Display for SearchPolicy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Returned when parsing an unknown policy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPolicy(pub String);

impl fmt::Display for UnknownPolicy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"unknown search policy '{}' (expected greedy, exhaustive or memoized)",
			self.0
		)
	}
}

impl std::error::Error for UnknownPolicy {}

impl FromStr for SearchPolicy {
	type Err = UnknownPolicy;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"greedy" => Ok(Self::Greedy),
			"exhaustive" | "bfs" => Ok(Self::Exhaustive),
			"memoized" | "dfs" => Ok(Self::Memoized),
			other => Err(UnknownPolicy(other.to_string())),
		}
	}
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Run the configured policy from `start`.
///
/// `items` must be the catalog the graph was built from; only the greedy
/// policy reads it (for its discovery-method penalty).
pub fn find_chain(
	graph: &SimilarityGraph,
	items: &[ItemRecord],
	start: ItemId,
	config: &ChainConfig,
) -> ChainOutcome {
	let outcome = match config.policy {
		SearchPolicy::Greedy => greedy_chain(graph, items, start, config.max_length),
		SearchPolicy::Exhaustive => exhaustive_chain(graph, start, config.max_length),
		SearchPolicy::Memoized => memoized_chain(graph, start, config.max_length),
	};
	tracing::debug!(
		policy = %config.policy,
		start,
		max_length = config.max_length,
		length = outcome.len(),
		total_score = outcome.total_score,
		"Chain search finished"
	);
	outcome
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
