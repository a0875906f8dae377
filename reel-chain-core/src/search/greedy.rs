// ---------------------------------------------------------------------------
// Greedy policy — single forward walk with a late diversity penalty
// ---------------------------------------------------------------------------
//
// From the current item, step to the unvisited neighbor with the highest
// edge weight. From the fourth pick on (`step >= PENALTY_FROM_STEP`), a
// neighbor found through the same discovery method as the current item has
// `DISCOVERY_REPEAT_PENALTY` subtracted before the comparison. Ties go to
// the earlier adjacency entry, which is the lower id. A poor pick is never
// undone.
// ---------------------------------------------------------------------------

use std::collections::HashSet;

use crate::graph::{Neighbor, SimilarityGraph};
use crate::types::{ChainOutcome, ItemId, ItemRecord};

/// Zero-based pick index from which the discovery-method penalty applies.
pub const PENALTY_FROM_STEP: usize = 3;

/// Subtracted from a candidate's weight when it shares the current item's
/// discovery method.
pub const DISCOVERY_REPEAT_PENALTY: f64 = 6.0;

/// Walk greedily from `start` until `max_length` items are chained or no
/// unvisited neighbor remains.
///
/// `total_score` sums the raw edge weights that were walked, not the
/// penalty-adjusted ones.
pub fn greedy_chain(
	graph: &SimilarityGraph,
	items: &[ItemRecord],
	start: ItemId,
	max_length: usize,
) -> ChainOutcome {
	if !graph.contains(start) {
		return ChainOutcome::empty();
	}

	let mut path = vec![start];
	let mut visited: HashSet<ItemId> = HashSet::from([start]);
	let mut current = start;
	let mut total_score = 0.0;
	let mut step = 0usize;

	while path.len() < max_length {
		let penalize = step >= PENALTY_FROM_STEP;
		let current_method = items.get(current).map(|item| item.discovery_method.as_str());

		let mut best: Option<(Neighbor, f64)> = None;
		for neighbor in graph.neighbors(current) {
			if visited.contains(&neighbor.id) {
				continue;
			}

			let mut adjusted = neighbor.weight;
			if penalize {
				let method = items.get(neighbor.id).map(|item| item.discovery_method.as_str());
				if method.is_some() && method == current_method {
					adjusted -= DISCOVERY_REPEAT_PENALTY;
				}
			}

			// Strictly greater, so the first of equal candidates stays.
			if best.is_none_or(|(_, top)| adjusted > top) {
				best = Some((*neighbor, adjusted));
			}
		}

		let Some((next, _)) = best else {
			break;
		};

		path.push(next.id);
		visited.insert(next.id);
		total_score += next.weight;
		current = next.id;
		step += 1;
	}

	ChainOutcome { path, total_score }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
