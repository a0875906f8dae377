//! Catalog ingest, start lookup and chain reporting around `reel-chain-core`.

pub mod config;
pub mod deduplication;
pub mod error;
pub mod ingest;
pub mod report;

use reel_chain_core::{
	ChainConfig, ItemRecord, SimilarityGraph, find_chain, resolve_start, suggest_titles,
};

use crate::error::CatalogError;
use crate::report::ChainReport;

/// Suggestions offered when a start query matches nothing.
pub const SUGGESTION_LIMIT: usize = 3;

/// Resolve `query`, build the graph and run the configured search.
pub fn recommend(
	items: &[ItemRecord],
	query: &str,
	config: &ChainConfig,
) -> Result<ChainReport, CatalogError> {
	let Some(start) = resolve_start(items, query) else {
		return Err(CatalogError::StartNotFound {
			query: query.trim().to_string(),
			suggestions: suggest_titles(items, query, SUGGESTION_LIMIT)
				.into_iter()
				.map(str::to_string)
				.collect(),
		});
	};
	tracing::info!(query = %query.trim(), start, "Start resolved");

	let graph = SimilarityGraph::build(items, config.threshold);
	let outcome = find_chain(&graph, items, start, config);

	Ok(ChainReport::new(config.policy, &outcome, items, &graph))
}
