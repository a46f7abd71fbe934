// Cache path utilities.
// Resolves the cache root and derives content-addressed file paths from query text.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use md5::{Digest, Md5};

/// Get the base cache directory (~/.cache/affsearch on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "affsearch").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Directory for affiliation search results under a cache root.
pub fn affiliation_search_dir(root: &Path) -> PathBuf {
    root.join("affiliation_search")
}

/// Lowercase hex MD5 digest of the query text.
pub fn query_hash(query: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(query.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Path of the cache file holding results for `query` inside `dir`.
pub fn query_cache_path(dir: &Path, query: &str) -> PathBuf {
    dir.join(query_hash(query))
}
