// Error types for affiliation search.
// Covers query limits, malformed entries, Scopus API failures and cache I/O.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error(
        "Found {found} matches. Set max_entries to a higher number or change your query ({query})"
    )]
    Query {
        query: String,
        found: u64,
        max_entries: u64,
    },

    #[error("Entry is missing required field '{0}'")]
    MissingField(&'static str),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Scopus API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Authentication failed: missing or invalid API key")]
    Unauthorized,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("API quota exceeded")]
    QuotaExceeded,

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Could not determine a cache directory (no home directory?)")]
    NoCacheDir,

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SearchError>;
