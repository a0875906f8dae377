// ---------------------------------------------------------------------------
// Ingest — turn a catalog file into deduplicated item records
// ---------------------------------------------------------------------------
//
// Line-oriented and forgiving: rows with the wrong field count are skipped,
// unparseable numbers default to zero, undecodable bytes become U+FFFD.
// Nothing short of an unreadable file or an empty result is an error.
//
// Column order:
//   title, genre, release year, average rating, review count,
//   review highlights, life insight, discovery method, life advice, suggested
// ---------------------------------------------------------------------------

use std::fs;
use std::path::Path;

use reel_chain_core::{ItemId, ItemRecord, normalize_title};

use crate::deduplication::dedup_by_title;
use crate::error::CatalogError;

/// Fields per catalog row.
pub const FIELD_COUNT: usize = 10;

// ---------------------------------------------------------------------------
// Line parsing
// ---------------------------------------------------------------------------

/// Split one line on commas outside double quotes.
///
/// A `"` toggles quoting and is dropped. There is no escape sequence, so a
/// doubled `""` simply toggles twice. Every field is trimmed.
pub fn parse_csv_line(line: &str) -> Vec<String> {
	let mut fields = Vec::new();
	let mut field = String::new();
	let mut in_quotes = false;

	for c in line.chars() {
		match c {
			'"' => in_quotes = !in_quotes,
			',' if !in_quotes => {
				fields.push(field.trim().to_string());
				field.clear();
			}
			_ => field.push(c),
		}
	}
	fields.push(field.trim().to_string());

	fields
}

// ---------------------------------------------------------------------------
// Field coercion
// ---------------------------------------------------------------------------

/// A non-empty run of ASCII digits. Signs, spaces and decimals are rejected.
fn parse_count<T: std::str::FromStr>(text: &str) -> Option<T> {
	if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
		return None;
	}
	text.parse().ok()
}

/// Any finite float literal.
fn parse_rating(text: &str) -> Option<f64> {
	text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Build a record from one parsed row. `None` unless there are exactly
/// `FIELD_COUNT` fields.
///
/// Numeric fields that do not parse fall back to zero with a warning.
pub fn record_from_fields(id: ItemId, fields: &[String]) -> Option<ItemRecord> {
	let [
		title,
		genre,
		release_year,
		avg_rating,
		num_reviews,
		review_highlights,
		life_insight,
		discovery_method,
		life_advice,
		suggested,
	] = fields
	else {
		return None;
	};

	let release_year = parse_count(release_year).unwrap_or_else(|| {
		tracing::warn!(title = %title, value = %release_year, "Invalid release year, defaulting to 0");
		0
	});
	let avg_rating = parse_rating(avg_rating).unwrap_or_else(|| {
		tracing::warn!(title = %title, value = %avg_rating, "Invalid average rating, defaulting to 0.0");
		0.0
	});
	let num_reviews = parse_count(num_reviews).unwrap_or_else(|| {
		tracing::warn!(title = %title, value = %num_reviews, "Invalid review count, defaulting to 0");
		0
	});

	Some(ItemRecord {
		id,
		title: normalize_title(title),
		genre: genre.trim().to_lowercase(),
		release_year,
		avg_rating,
		num_reviews,
		review_highlights: review_highlights.to_lowercase(),
		life_insight: life_insight.to_lowercase(),
		life_advice: life_advice.to_lowercase(),
		discovery_method: discovery_method.trim().to_lowercase(),
		suggested: suggested.trim().to_lowercase() == "y",
	})
}

// ---------------------------------------------------------------------------
// Catalog loading
// ---------------------------------------------------------------------------

/// Parse catalog text. The first line is a header and is ignored.
///
/// Returned records have `id == position`, first occurrence of each title
/// kept.
pub fn parse_catalog(text: &str) -> Vec<ItemRecord> {
	let mut rows: Vec<ItemRecord> = Vec::new();

	// Provisional ids are 1-based source line numbers, for the logs.
	for (index, raw) in text.lines().enumerate().skip(1) {
		let line_no = index + 1;
		let line = raw.trim();
		if line.is_empty() {
			continue;
		}

		let fields = parse_csv_line(line);
		match record_from_fields(line_no, &fields) {
			Some(record) => rows.push(record),
			None => {
				tracing::warn!(
					line = line_no,
					fields = fields.len(),
					expected = FIELD_COUNT,
					"Skipping row with incorrect field count"
				);
			}
		}
	}

	let outcome = dedup_by_title(rows);
	for duplicate in &outcome.dropped {
		tracing::warn!(line = duplicate.id, title = %duplicate.title, "Skipping duplicate title");
	}

	outcome.kept
}

/// Read and parse a catalog file.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
pub fn load_catalog(path: &Path) -> Result<Vec<ItemRecord>, CatalogError> {
	let bytes = fs::read(path)?;
	let text = String::from_utf8_lossy(&bytes);
	let items = parse_catalog(&text);

	if items.is_empty() {
		return Err(CatalogError::EmptyCatalog(path.display().to_string()));
	}

	tracing::info!(path = %path.display(), items = items.len(), "Catalog loaded");
	Ok(items)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
