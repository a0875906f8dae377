use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use reel_chain::config::CliArgs;
use reel_chain::error::CatalogError;
use reel_chain::ingest::load_catalog;
use reel_chain::recommend;

fn main() -> Result<()> {
	let args = CliArgs::parse();

	// Logs go to stderr; stdout carries the chain.
	tracing_subscriber::fmt()
		.with_writer(std::io::stderr)
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level)),
		)
		.init();

	let config = args.to_chain_config()?;
	tracing::debug!(?config, "Chain configuration");

	let items = load_catalog(&args.dataset)
		.with_context(|| format!("failed to load catalog {}", args.dataset.display()))?;

	let query = match &args.start {
		Some(start) => start.clone(),
		None => prompt_start()?,
	};

	let report = match recommend(&items, &query, &config) {
		Ok(report) => report,
		Err(err) => {
			if args.json {
				println!("{}", serde_json::to_string_pretty(&err.to_json_error())?);
			} else if let CatalogError::StartNotFound { suggestions, .. } = &err {
				if !suggestions.is_empty() {
					eprintln!("Did you mean: {}", suggestions.join(", "));
				}
			}
			return Err(err.into());
		}
	};

	if args.json {
		println!("{}", report.render_json()?);
	} else {
		print!("{}", report.render_text());
	}

	Ok(())
}

/// Ask for a start title on stdin. Reads a single line.
fn prompt_start() -> Result<String> {
	eprint!("Enter a title to start the chain: ");
	io::stderr().flush()?;

	let mut line = String::new();
	io::stdin()
		.lock()
		.read_line(&mut line)
		.context("failed to read start title from stdin")?;
	Ok(line.trim().to_string())
}
