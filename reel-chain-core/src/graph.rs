// ---------------------------------------------------------------------------
// Similarity graph — undirected weighted edges between catalog items
// ---------------------------------------------------------------------------
//
// Built once from a fixed catalog and a score threshold, immutable after.
//
// Every unordered pair is scored exactly once in the canonical direction
// `score(items[i], items[j])` with `i < j`. The scorer is asymmetric; the
// stored weight is never averaged or recomputed in the other direction, and
// both adjacency lists receive the identical value.
//
// Pairs are generated with `i` ascending and `j` ascending inside it, so each
// adjacency list ends up sorted by neighbor id. The greedy search relies on
// that order for its tie-break.
// ---------------------------------------------------------------------------

use std::collections::HashSet;

use serde::Serialize;

use crate::scoring::score;
use crate::types::{ItemId, ItemRecord};

// ---------------------------------------------------------------------------
// Neighbor
// ---------------------------------------------------------------------------

/// One adjacency entry: the other endpoint and the shared edge weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Neighbor {
	pub id: ItemId,
	pub weight: f64,
}

// ---------------------------------------------------------------------------
// SimilarityGraph
// ---------------------------------------------------------------------------

/// Undirected adjacency over item ids `0..node_count()`.
///
/// Holds no reference to the catalog it was built from.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SimilarityGraph {
	adjacency: Vec<Vec<Neighbor>>,
	threshold: f64,
}

impl SimilarityGraph {
	// -- Construction -----------------------------------------------------

	/// Score every unordered pair and keep those with `score >= threshold`.
	///
	/// Nodes are catalog positions. O(n^2) scorer calls.
	pub fn build(items: &[ItemRecord], threshold: f64) -> Self {
		let n = items.len();
		let pairs = (0..n).flat_map(move |i| {
			((i + 1)..n).map(move |j| (i, j, score(&items[i], &items[j])))
		});
		Self::from_scored_pairs(n, pairs, threshold)
	}

	/// Build from pre-scored pairs `(a, b, weight)`.
	///
	/// A pair becomes an undirected edge when `weight >= threshold`; it is
	/// appended to `a`'s list, then `b`'s, in the order given. Self-loops,
	/// ids outside `0..node_count` and repeats of an already inserted pair
	/// are skipped.
	pub fn from_scored_pairs<I>(node_count: usize, pairs: I, threshold: f64) -> Self
	where
		I: IntoIterator<Item = (ItemId, ItemId, f64)>,
	{
		let mut adjacency: Vec<Vec<Neighbor>> = vec![Vec::new(); node_count];
		let mut inserted: HashSet<(ItemId, ItemId)> = HashSet::new();

		for (a, b, weight) in pairs {
			if a == b || a >= node_count || b >= node_count {
				continue;
			}
			if !meets_threshold(weight, threshold) {
				continue;
			}
			if !inserted.insert((a.min(b), a.max(b))) {
				continue;
			}
			adjacency[a].push(Neighbor { id: b, weight });
			adjacency[b].push(Neighbor { id: a, weight });
		}

		tracing::info!(nodes = node_count, edges = inserted.len(), threshold, "Similarity graph built");
		for (node, neighbors) in adjacency.iter().enumerate() {
			tracing::debug!(node, degree = neighbors.len(), "Graph node degree");
		}

		Self {
			adjacency,
			threshold,
		}
	}

	// -- Accessors --------------------------------------------------------

	pub fn threshold(&self) -> f64 {
		self.threshold
	}

	pub fn node_count(&self) -> usize {
		self.adjacency.len()
	}

	/// Number of undirected edges.
	pub fn edge_count(&self) -> usize {
		self.adjacency.iter().map(|n| n.len()).sum::<usize>() / 2
	}

	pub fn contains(&self, id: ItemId) -> bool {
		id < self.adjacency.len()
	}

	/// Neighbors of `id` in insertion (ascending id) order. Empty for
	/// unknown ids.
	pub fn neighbors(&self, id: ItemId) -> &[Neighbor] {
		self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Neighbors of `id` sorted by weight descending. The sort is stable, so
	/// equal weights keep ascending id order.
	pub fn neighbors_by_weight(&self, id: ItemId) -> Vec<Neighbor> {
		let mut sorted = self.neighbors(id).to_vec();
		sorted.sort_by(|a, b| b.weight.partial_cmp(&a.weight).unwrap_or(std::cmp::Ordering::Equal));
		sorted
	}

	/// Weight of the edge between `a` and `b`, if there is one.
	pub fn edge_weight(&self, a: ItemId, b: ItemId) -> Option<f64> {
		self.neighbors(a).iter().find(|n| n.id == b).map(|n| n.weight)
	}

	/// Degree of every node, indexed by id.
	pub fn degrees(&self) -> Vec<usize> {
		self.adjacency.iter().map(Vec::len).collect()
	}

	/// Sum of edge weights between consecutive entries of `path`.
	///
	/// Consecutive entries without an edge contribute nothing.
	pub fn path_weight(&self, path: &[ItemId]) -> f64 {
		path.windows(2)
			.filter_map(|pair| self.edge_weight(pair[0], pair[1]))
			.sum()
	}
}

/// Inclusive gate. NaN on either side never passes.
fn meets_threshold(weight: f64, threshold: f64) -> bool {
	weight >= threshold
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
