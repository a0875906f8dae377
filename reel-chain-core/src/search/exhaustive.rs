// ---------------------------------------------------------------------------
// Exhaustive policy — breadth-first enumeration of simple path prefixes
// ---------------------------------------------------------------------------
//
// A FIFO queue of (node, path, cumulative score) seeded with the start.
// Every dequeued prefix that is strictly longer than the best so far becomes
// the best; equal lengths keep the earlier one. Prefixes shorter than the
// bound are extended by every neighbor not already on the path, heaviest
// edge first.
//
// The number of prefixes grows exponentially with branching factor and
// bound. There is no internal cutoff besides the bound itself.
// ---------------------------------------------------------------------------

use std::collections::VecDeque;

use crate::graph::SimilarityGraph;
use crate::types::{ChainOutcome, ItemId};

/// A partial chain waiting to be extended.
struct Prefix {
	node: ItemId,
	path: Vec<ItemId>,
	score: f64,
}

/// Longest simple path from `start` with at most `max_length` items.
pub fn exhaustive_chain(graph: &SimilarityGraph, start: ItemId, max_length: usize) -> ChainOutcome {
	if !graph.contains(start) {
		return ChainOutcome::empty();
	}

	let mut queue: VecDeque<Prefix> = VecDeque::new();
	queue.push_back(Prefix {
		node: start,
		path: vec![start],
		score: 0.0,
	});

	let mut best = ChainOutcome::empty();
	let mut expanded = 0usize;

	while let Some(Prefix { node, path, score }) = queue.pop_front() {
		expanded += 1;

		if path.len() < max_length {
			for neighbor in graph.neighbors_by_weight(node) {
				if path.contains(&neighbor.id) {
					continue;
				}
				let mut extended = Vec::with_capacity(path.len() + 1);
				extended.extend_from_slice(&path);
				extended.push(neighbor.id);
				queue.push_back(Prefix {
					node: neighbor.id,
					path: extended,
					score: score + neighbor.weight,
				});
			}
		}

		if path.len() > best.path.len() {
			best = ChainOutcome {
				path,
				total_score: score,
			};
		}
	}

	tracing::debug!(start, max_length, expanded, length = best.len(), "Exhaustive search expanded prefixes");
	best
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
