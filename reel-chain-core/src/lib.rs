//! Recommendation chains over a catalog of items.
//!
//! Items are scored pairwise into an undirected [`SimilarityGraph`], a free-text
//! query is resolved to a start item, and one of three [`SearchPolicy`]
//! traversals turns the graph into an ordered chain of item ids.
//!
//! Everything here is synchronous and pure. Reading catalogs and printing
//! chains is left to the caller.

pub mod config;
pub mod graph;
pub mod resolve;
pub mod scoring;
pub mod search;
pub mod text;
pub mod types;

pub use config::ChainConfig;
pub use graph::{Neighbor, SimilarityGraph};
pub use resolve::{resolve_start, suggest_titles};
pub use scoring::score;
pub use search::{SearchPolicy, find_chain};
pub use text::normalize_title;
pub use types::{ChainOutcome, ItemId, ItemRecord};
