// Scopus API response types.
// Defines the search-results envelope shared by the Scopus search endpoints.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Top-level search response.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "search-results", default)]
    pub search_results: SearchResults,
}

/// The `search-results` object: hit count plus one page of entries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResults {
    /// Total number of hits for the query, across all pages.
    #[serde(
        rename = "opensearch:totalResults",
        default,
        deserialize_with = "count_from_string_or_number"
    )]
    pub total_results: u64,
    /// Entries are kept as raw JSON so they can be cached verbatim.
    #[serde(default)]
    pub entry: Vec<Value>,
}

impl SearchResults {
    /// Entries with the empty-result placeholder removed.
    ///
    /// An empty result set comes back as a single entry carrying only an
    /// `error` member ("Result set was empty").
    pub fn into_entries(self) -> Vec<Value> {
        self.entry
            .into_iter()
            .filter(|entry| !is_empty_placeholder(entry))
            .collect()
    }
}

fn is_empty_placeholder(entry: &Value) -> bool {
    entry.get("error").is_some() && entry.get("eid").is_none()
}

/// Scopus reports counts as strings ("42"); accept plain numbers and null too.
fn count_from_string_or_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(0),
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| serde::de::Error::custom(format!("invalid result count {}", n))),
        Value::String(s) if s.trim().is_empty() => Ok(0),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid result count {:?}", s))),
        other => Err(serde::de::Error::custom(format!(
            "invalid result count {}",
            other
        ))),
    }
}
