use std::collections::HashSet;

use proptest::prelude::*;
use reel_chain_core::search::{exhaustive_chain, greedy_chain, memoized_chain};
use reel_chain_core::{ItemRecord, SimilarityGraph, resolve_start, score};

const GENRES: &[&str] = &["drama", "comedy", "documentary"];
const METHODS: &[&str] = &["friend", "netflix", "social media"];
const WORDS: &[&str] = &[
	"never", "give", "up", "growth", "family", "strength", "be", "kind", "honest",
	"moving", "raw", "character",
];

fn phrase() -> impl Strategy<Value = String> {
	prop::collection::vec(prop::sample::select(WORDS), 0..5).prop_map(|words| words.join(" "))
}

prop_compose! {
	fn item()(
		genre in prop::sample::select(GENRES),
		method in prop::sample::select(METHODS),
		advice in phrase(),
		highlights in phrase(),
		rating in 0u8..=100,
		suggested in any::<bool>(),
	) -> ItemRecord {
		ItemRecord {
			id: 0,
			title: String::new(),
			genre: genre.to_string(),
			release_year: 2000,
			avg_rating: rating as f64 / 10.0,
			num_reviews: 0,
			review_highlights: highlights,
			life_insight: String::new(),
			life_advice: advice,
			discovery_method: method.to_string(),
			suggested,
		}
	}
}

fn catalog(max: usize) -> impl Strategy<Value = Vec<ItemRecord>> {
	prop::collection::vec(item(), 1..max).prop_map(|mut items| {
		for (id, item) in items.iter_mut().enumerate() {
			item.id = id;
			item.title = format!("title {}", id);
		}
		items
	})
}

fn assert_simple(path: &[usize]) -> Result<(), TestCaseError> {
	let unique: HashSet<_> = path.iter().collect();
	prop_assert_eq!(unique.len(), path.len(), "path repeats an item: {:?}", path);
	Ok(())
}

fn assert_walks_edges(graph: &SimilarityGraph, path: &[usize]) -> Result<(), TestCaseError> {
	for pair in path.windows(2) {
		prop_assert!(
			graph.edge_weight(pair[0], pair[1]).is_some(),
			"no edge between {} and {}",
			pair[0],
			pair[1]
		);
	}
	Ok(())
}

proptest! {
	#[test]
	fn score_ignores_the_rest_of_the_catalog(items in catalog(6)) {
		let first = score(&items[0], &items[items.len() - 1]);
		let isolated = vec![items[0].clone(), items[items.len() - 1].clone()];
		prop_assert_eq!(score(&isolated[0], &isolated[1]), first);
		prop_assert_eq!(score(&items[0], &items[items.len() - 1]), first);
	}

	#[test]
	fn edges_match_canonical_scores(items in catalog(8), threshold in -10.0f64..30.0) {
		let graph = SimilarityGraph::build(&items, threshold);
		for i in 0..items.len() {
			for j in (i + 1)..items.len() {
				let expected = score(&items[i], &items[j]);
				let stored = graph.edge_weight(i, j);
				if expected >= threshold {
					prop_assert_eq!(stored, Some(expected));
					prop_assert_eq!(graph.edge_weight(j, i), Some(expected));
				} else {
					prop_assert_eq!(stored, None);
				}
			}
		}
	}

	#[test]
	fn greedy_is_bounded_simple_and_connected(
		items in catalog(9),
		threshold in -5.0f64..20.0,
		max_length in 0usize..8,
	) {
		let graph = SimilarityGraph::build(&items, threshold);
		let outcome = greedy_chain(&graph, &items, 0, max_length);
		prop_assert!(outcome.len() <= max_length.max(1));
		prop_assert_eq!(outcome.path[0], 0);
		assert_simple(&outcome.path)?;
		assert_walks_edges(&graph, &outcome.path)?;
	}

	#[test]
	fn exhaustive_never_loses_to_greedy(
		items in catalog(7),
		threshold in -5.0f64..20.0,
		max_length in 1usize..6,
	) {
		let graph = SimilarityGraph::build(&items, threshold);
		let greedy = greedy_chain(&graph, &items, 0, max_length);
		let exhaustive = exhaustive_chain(&graph, 0, max_length);
		prop_assert!(exhaustive.len() >= greedy.len());
		prop_assert!(exhaustive.len() <= max_length);
		assert_simple(&exhaustive.path)?;
		assert_walks_edges(&graph, &exhaustive.path)?;
		prop_assert!((exhaustive.total_score - graph.path_weight(&exhaustive.path)).abs() < 1e-9);
	}

	#[test]
	fn memoized_is_bounded_and_walks_edges(
		items in catalog(8),
		threshold in -5.0f64..20.0,
		max_length in 1usize..7,
	) {
		let graph = SimilarityGraph::build(&items, threshold);
		let outcome = memoized_chain(&graph, 0, max_length);
		prop_assert!(!outcome.is_empty());
		prop_assert!(outcome.len() <= max_length);
		prop_assert_eq!(outcome.path[0], 0);
		assert_walks_edges(&graph, &outcome.path)?;
	}

	#[test]
	fn out_of_range_start_is_empty_for_every_policy(items in catalog(5), offset in 0usize..3) {
		let graph = SimilarityGraph::build(&items, 0.0);
		let start = items.len() + offset;
		prop_assert!(greedy_chain(&graph, &items, start, 6).is_empty());
		prop_assert!(exhaustive_chain(&graph, start, 6).is_empty());
		prop_assert!(memoized_chain(&graph, start, 6).is_empty());
	}

	#[test]
	fn every_title_resolves_to_itself(items in catalog(6)) {
		for item in &items {
			prop_assert_eq!(resolve_start(&items, &item.title.to_uppercase()), Some(item.id));
		}
	}
}
