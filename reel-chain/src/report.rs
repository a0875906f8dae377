// ---------------------------------------------------------------------------
// Chain report — map a chain of ids back to catalog entries for display
// ---------------------------------------------------------------------------

use std::fmt::Write as _;

use serde::Serialize;

use reel_chain_core::{ChainOutcome, ItemRecord, SearchPolicy, SimilarityGraph};

use crate::error::CatalogError;

/// One entry of a rendered chain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChainStep {
	pub position: usize,
	pub id: usize,
	pub title: String,
	pub genre: String,
	#[serde(rename = "avgRating")]
	pub avg_rating: f64,
	/// Edge weight from the previous step; `None` for the start.
	#[serde(rename = "weightFromPrevious")]
	pub weight_from_previous: Option<f64>,
}

/// A chain ready for printing or serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChainReport {
	pub policy: SearchPolicy,
	pub start: Option<String>,
	pub steps: Vec<ChainStep>,
	#[serde(rename = "totalScore")]
	pub total_score: f64,
}

impl ChainReport {
	/// Resolve every id in `outcome` against `items`.
	///
	/// Ids with no catalog entry are skipped with a warning.
	pub fn new(
		policy: SearchPolicy,
		outcome: &ChainOutcome,
		items: &[ItemRecord],
		graph: &SimilarityGraph,
	) -> Self {
		let mut steps = Vec::with_capacity(outcome.len());
		let mut previous: Option<usize> = None;

		for &id in &outcome.path {
			let Some(item) = items.get(id) else {
				tracing::warn!(id, "Chain references an unknown item, skipping");
				continue;
			};
			steps.push(ChainStep {
				position: steps.len() + 1,
				id,
				title: display_title(&item.title),
				genre: item.genre.clone(),
				avg_rating: item.avg_rating,
				weight_from_previous: previous.and_then(|p| graph.edge_weight(p, id)),
			});
			previous = Some(id);
		}

		Self {
			policy,
			start: steps.first().map(|s| s.title.clone()),
			steps,
			total_score: outcome.total_score,
		}
	}

	pub fn heading(&self) -> &'static str {
		match self.policy {
			SearchPolicy::Greedy => "Greedy Recommendation Chain",
			SearchPolicy::Exhaustive => "BFS-Based Recommendation Chain",
			SearchPolicy::Memoized => "Memoized DFS Recommendation Chain",
		}
	}

	/// Human-readable rendering, one `->` line per step.
	pub fn render_text(&self) -> String {
		if self.steps.is_empty() {
			return "No recommendation chain found.\n".to_string();
		}

		let mut out = String::new();
		let _ = writeln!(out, "{}:", self.heading());
		for step in &self.steps {
			let _ = writeln!(
				out,
				"-> {} ({}, Rating: {:.1})",
				step.title, step.genre, step.avg_rating
			);
		}
		let _ = writeln!(out, "Total score: {:.2}", self.total_score);
		out
	}

	pub fn render_json(&self) -> Result<String, CatalogError> {
		Ok(serde_json::to_string_pretty(self)?)
	}
}

/// Title-case a normalized title: the first letter of every alphabetic run
/// is upper-cased, the rest lower-cased.
pub fn display_title(title: &str) -> String {
	let mut out = String::with_capacity(title.len());
	let mut in_word = false;
	for c in title.chars() {
		if c.is_alphabetic() {
			if in_word {
				out.extend(c.to_lowercase());
			} else {
				out.extend(c.to_uppercase());
			}
			in_word = true;
		} else {
			out.push(c);
			in_word = false;
		}
	}
	out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
	use super::*;

	fn item(id: usize, title: &str, rating: f64) -> ItemRecord {
		ItemRecord {
			id,
			title: title.to_string(),
			genre: "drama".to_string(),
			release_year: 2000,
			avg_rating: rating,
			num_reviews: 1,
			review_highlights: String::new(),
			life_insight: String::new(),
			life_advice: String::new(),
			discovery_method: String::new(),
			suggested: false,
		}
	}

	#[test]
	fn display_title_capitalizes_each_alphabetic_run() {
		assert_eq!(display_title("the pursuit of happyness"), "The Pursuit Of Happyness");
		assert_eq!(display_title("schindler's list"), "Schindler'S List");
		assert_eq!(display_title("wall-e 2"), "Wall-E 2");
		assert_eq!(display_title(""), "");
	}

	#[test]
	fn report_maps_ids_and_edge_weights() {
		let items = vec![item(0, "up", 8.3), item(1, "coco", 8.4)];
		let graph = SimilarityGraph::from_scored_pairs(2, [(0, 1, 11.5)], 6.0);
		let outcome = ChainOutcome {
			path: vec![1, 0],
			total_score: 11.5,
		};
		let report = ChainReport::new(SearchPolicy::Greedy, &outcome, &items, &graph);
		assert_eq!(report.start.as_deref(), Some("Coco"));
		assert_eq!(report.steps.len(), 2);
		assert_eq!(report.steps[0].weight_from_previous, None);
		assert_eq!(report.steps[1].weight_from_previous, Some(11.5));
		assert_eq!(report.steps[1].position, 2);
	}

	#[test]
	fn render_text_lists_steps() {
		let items = vec![item(0, "up", 8.3), item(1, "coco", 8.4)];
		let graph = SimilarityGraph::from_scored_pairs(2, [(0, 1, 11.5)], 6.0);
		let outcome = ChainOutcome {
			path: vec![0, 1],
			total_score: 11.5,
		};
		let text = ChainReport::new(SearchPolicy::Exhaustive, &outcome, &items, &graph).render_text();
		assert_eq!(
			text,
			"BFS-Based Recommendation Chain:\n\
			-> Up (drama, Rating: 8.3)\n\
			-> Coco (drama, Rating: 8.4)\n\
			Total score: 11.50\n"
		);
	}

	#[test]
	fn empty_chain_renders_a_notice() {
		let report = ChainReport::new(
			SearchPolicy::Memoized,
			&ChainOutcome::empty(),
			&[],
			&SimilarityGraph::default(),
		);
		assert_eq!(report.render_text(), "No recommendation chain found.\n");
		assert!(report.start.is_none());
	}

	#[test]
	fn unknown_ids_are_skipped() {
		let items = vec![item(0, "up", 8.3)];
		let outcome = ChainOutcome {
			path: vec![0, 9],
			total_score: 0.0,
		};
		let report = ChainReport::new(
			SearchPolicy::Greedy,
			&outcome,
			&items,
			&SimilarityGraph::default(),
		);
		assert_eq!(report.steps.len(), 1);
	}

	#[test]
	fn render_json_uses_camel_case() {
		let items = vec![item(0, "up", 8.3)];
		let outcome = ChainOutcome {
			path: vec![0],
			total_score: 0.0,
		};
		let report = ChainReport::new(
			SearchPolicy::Greedy,
			&outcome,
			&items,
			&SimilarityGraph::default(),
		);
		let json: serde_json::Value = serde_json::from_str(&report.render_json().unwrap()).unwrap();
		assert_eq!(json["policy"], "greedy");
		assert_eq!(json["steps"][0]["title"], "Up");
		assert_eq!(json["steps"][0]["avgRating"], 8.3);
		assert!(json["steps"][0]["weightFromPrevious"].is_null());
		assert_eq!(json["totalScore"], 0.0);
	}
}
