// Cache module for local filesystem caching.
// Stores raw search results keyed by a hash of the query text.

pub mod paths;
pub mod store;

pub use paths::{affiliation_search_dir, cache_dir, query_cache_path, query_hash};
pub use store::{delete, exists, read_entries, write_entries};
