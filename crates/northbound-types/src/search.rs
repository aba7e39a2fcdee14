//! Knowledge-base search result types.
//!
//! Results come back from the vector-search collaborator loosely typed: any of
//! `document`, `text` or `metadata.content` may carry the passage. The
//! precedence between them lives in [`SearchResult::preferred_text`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Metadata key holding the passage when neither `document` nor `text` is set.
pub const METADATA_CONTENT_KEY: &str = "content";

/// One passage returned by a similarity search, most relevant first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Collaborator-assigned id; string or number depending on the collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Similarity in `0.0..=1.0`, higher is closer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

impl SearchResult {
    /// The passage text: `document`, then `text`, then `metadata.content`.
    ///
    /// Empty strings are skipped, so the first non-empty field wins.
    pub fn preferred_text(&self) -> Option<&str> {
        let from_metadata = self
            .metadata
            .as_ref()
            .and_then(|m| m.get(METADATA_CONTENT_KEY))
            .and_then(Value::as_str);

        [self.document.as_deref(), self.text.as_deref(), from_metadata]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
    }
}

/// Response envelope of the similarity search endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,
}
