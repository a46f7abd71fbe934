// Runtime configuration.
// Resolved once at startup from the environment and passed to the client and searches.

use std::path::PathBuf;
use std::time::Duration;

use crate::cache;
use crate::error::{Result, SearchError};

/// Scopus affiliation search endpoint.
pub const AFFILIATION_SEARCH_URL: &str = "https://api.elsevier.com/content/search/affiliation";

/// Environment variable holding an existing Scopus API key.
pub const API_KEY_ENV: &str = "SCOPUS_API_KEY";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Settings shared by every search in the process.
#[derive(Clone)]
pub struct Config {
    /// Key sent as `X-ELS-APIKey`, if any.
    pub api_key: Option<String>,
    /// Endpoint for affiliation searches.
    pub affiliation_search_url: String,
    /// Root of the on-disk cache. Each search type uses a subdirectory.
    pub cache_root: PathBuf,
    pub request_timeout: Duration,
}

impl Config {
    /// Build a configuration with the default endpoint and the given cache root.
    pub fn new(api_key: Option<String>, cache_root: PathBuf) -> Self {
        Self {
            api_key,
            affiliation_search_url: AFFILIATION_SEARCH_URL.to_string(),
            cache_root,
            request_timeout: REQUEST_TIMEOUT,
        }
    }

    /// Read `SCOPUS_API_KEY` from the environment. The cache root is
    /// `cache_root` when given, else the platform cache directory.
    pub fn from_env(cache_root: Option<PathBuf>) -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
        let cache_root = match cache_root {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => cache::cache_dir().ok_or(SearchError::NoCacheDir)?,
        };
        Ok(Self::new(api_key, cache_root))
    }

    /// Configuration pointing at a mock server, for tests.
    pub fn for_testing(base_url: &str, cache_root: PathBuf) -> Self {
        Self {
            api_key: Some("test-key".to_string()),
            affiliation_search_url: format!("{}/content/search/affiliation", base_url),
            cache_root,
            request_timeout: Duration::from_secs(5),
        }
    }

    /// Directory holding cached affiliation search results.
    pub fn affiliation_search_dir(&self) -> PathBuf {
        cache::affiliation_search_dir(&self.cache_root)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("has_api_key", &self.has_api_key())
            .field("affiliation_search_url", &self.affiliation_search_url)
            .field("cache_root", &self.cache_root)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_endpoint() {
        let config = Config::new(None, PathBuf::from("/tmp/affsearch"));
        assert_eq!(config.affiliation_search_url, AFFILIATION_SEARCH_URL);
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_affiliation_search_dir_is_under_root() {
        let config = Config::new(None, PathBuf::from("/tmp/affsearch"));
        assert_eq!(
            config.affiliation_search_dir(),
            PathBuf::from("/tmp/affsearch/affiliation_search")
        );
    }

    #[test]
    fn test_from_env_prefers_given_cache_root() {
        let config = Config::from_env(Some(PathBuf::from("/srv/affsearch"))).unwrap();
        assert_eq!(config.cache_root, PathBuf::from("/srv/affsearch"));
        assert_eq!(
            config.affiliation_search_dir(),
            PathBuf::from("/srv/affsearch/affiliation_search")
        );
    }

    #[test]
    fn test_debug_hides_api_key() {
        let config = Config::new(Some("super-secret".to_string()), PathBuf::from("/tmp"));
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("has_api_key: true"));
    }

    #[test]
    fn test_for_testing_points_at_base_url() {
        let config = Config::for_testing("http://127.0.0.1:9999", PathBuf::from("/tmp"));
        assert_eq!(
            config.affiliation_search_url,
            "http://127.0.0.1:9999/content/search/affiliation"
        );
    }
}
