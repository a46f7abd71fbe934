// Scopus API module.
// Provides the client and response types for the Scopus search endpoints.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::ScopusClient;
pub use types::{SearchResponse, SearchResults};
