use std::path::PathBuf;

use clap::Parser;

use reel_chain_core::{ChainConfig, SearchPolicy};

use crate::error::CatalogError;

/// Catalog file read when `--dataset` is not given.
pub const DEFAULT_DATASET: &str = "Netflix Life Impact Dataset (NLID).csv";

#[derive(Parser, Debug)]
#[command(name = "reel-chain", about = "Build a chain of related titles from a catalog file")]
pub struct CliArgs {
	/// Catalog CSV file
	#[arg(long, default_value = DEFAULT_DATASET, env = "REEL_CHAIN_DATASET")]
	pub dataset: PathBuf,

	/// Title to start from. Prompted on stdin when omitted.
	#[arg(long)]
	pub start: Option<String>,

	/// Search policy: greedy, exhaustive (bfs) or memoized (dfs)
	#[arg(long, default_value = "greedy")]
	pub policy: SearchPolicy,

	/// Minimum pair score for two titles to be linked
	#[arg(long, default_value = "6.0", env = "REEL_CHAIN_THRESHOLD")]
	pub threshold: f64,

	/// Maximum chain length, start included
	#[arg(long, default_value = "6")]
	pub max_length: usize,

	/// Largest max-length accepted for the exhaustive policy
	#[arg(long, default_value = "10")]
	pub exhaustive_length_cap: usize,

	/// Print the chain as JSON
	#[arg(long)]
	pub json: bool,

	/// Log level (trace, debug, info, warn, error)
	#[arg(long, default_value = "info", env = "REEL_CHAIN_LOG_LEVEL")]
	pub log_level: String,
}

impl CliArgs {
	/// Validate the search knobs and convert them to a [`ChainConfig`].
	pub fn to_chain_config(&self) -> Result<ChainConfig, CatalogError> {
		if !self.threshold.is_finite() {
			return Err(CatalogError::InvalidConfig(format!(
				"threshold must be a finite number, got {}",
				self.threshold
			)));
		}

		// Exhaustive search grows exponentially with length.
		if self.policy == SearchPolicy::Exhaustive && self.max_length > self.exhaustive_length_cap {
			return Err(CatalogError::InvalidConfig(format!(
				"max-length {} exceeds the exhaustive search cap of {}",
				self.max_length, self.exhaustive_length_cap
			)));
		}

		Ok(ChainConfig {
			threshold: self.threshold,
			max_length: self.max_length,
			policy: self.policy,
		})
	}
}
