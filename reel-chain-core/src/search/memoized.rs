// ---------------------------------------------------------------------------
// Memoized policy — depth-first best continuation with a (node, depth) cache
// ---------------------------------------------------------------------------
//
// `longest_from(node, visited, depth)` returns the longest continuation that
// starts at `node`. The start sits at depth 1; a call at `depth >= max_depth`
// returns `[node]`. Neighbors are tried heaviest edge first with their own
// copy of the visited set, and the first longest continuation wins.
//
// The cache key is `(node, depth)`. It does NOT include the visited set.
// A continuation computed on one branch is replayed verbatim on any other
// branch that reaches the same node at the same depth, even when it walks
// through items that branch already used, or when that branch could have
// gone further. The returned chain is therefore an approximation that can
// be shorter than the true longest simple path and can repeat an item.
// Widening the key would change results; keep it as is.
// ---------------------------------------------------------------------------

use std::collections::{HashMap, HashSet};

use crate::graph::SimilarityGraph;
use crate::types::{ChainOutcome, ItemId};

/// Continuations already computed, keyed by `(node, depth)`.
type PathCache = HashMap<(ItemId, usize), Vec<ItemId>>;

/// Depth-bounded recursive chain search from `start`.
pub fn memoized_chain(graph: &SimilarityGraph, start: ItemId, max_length: usize) -> ChainOutcome {
	if !graph.contains(start) {
		return ChainOutcome::empty();
	}

	let mut cache = PathCache::new();
	let visited = HashSet::from([start]);
	let path = longest_from(graph, start, &visited, 1, max_length, &mut cache);

	tracing::debug!(start, max_length, cached = cache.len(), length = path.len(), "Memoized search finished");
	ChainOutcome {
		total_score: graph.path_weight(&path),
		path,
	}
}

fn longest_from(
	graph: &SimilarityGraph,
	node: ItemId,
	visited: &HashSet<ItemId>,
	depth: usize,
	max_depth: usize,
	cache: &mut PathCache,
) -> Vec<ItemId> {
	if let Some(cached) = cache.get(&(node, depth)) {
		return cached.clone();
	}
	if depth >= max_depth {
		return vec![node];
	}

	let mut best = vec![node];
	for neighbor in graph.neighbors_by_weight(node) {
		if visited.contains(&neighbor.id) {
			continue;
		}
		let mut branch = visited.clone();
		branch.insert(neighbor.id);

		let tail = longest_from(graph, neighbor.id, &branch, depth + 1, max_depth, cache);
		if tail.len() + 1 > best.len() {
			best = Vec::with_capacity(tail.len() + 1);
			best.push(node);
			best.extend(tail);
		}
	}

	cache.insert((node, depth), best.clone());
	best
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
