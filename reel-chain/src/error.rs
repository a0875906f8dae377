use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
	#[error("Catalog is empty: no usable rows in {0}")]
	EmptyCatalog(String),
	#[error("Start item not found: {query}")]
	StartNotFound {
		query: String,
		suggestions: Vec<String>,
	},
	#[error("Invalid configuration: {0}")]
	InvalidConfig(String),
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),
}

impl CatalogError {
	pub fn code(&self) -> &str {
		match self {
			Self::EmptyCatalog(_) => "CATALOG_EMPTY",
			Self::StartNotFound { .. } => "CATALOG_START_NOT_FOUND",
			Self::InvalidConfig(_) => "CATALOG_INVALID_CONFIG",
			Self::Io(_) => "CATALOG_IO",
			Self::Json(_) => "CATALOG_JSON",
		}
	}

	pub fn to_json_error(&self) -> serde_json::Value {
		let mut body = serde_json::json!({
			"code": self.code(),
			"message": self.to_string(),
		});
		if let Self::StartNotFound { suggestions, .. } = self {
			body["suggestions"] = serde_json::json!(suggestions);
		}
		body
	}
}
