// Generic Scopus search.
// Serves results from the query cache or downloads them page by page.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info};

use crate::cache;
use crate::error::{Result, SearchError};
use crate::scopus::ScopusClient;

/// Default number of entries requested per page.
pub const DEFAULT_COUNT: u64 = 200;

/// Default ceiling on the total hit count. The Scopus search engine does not
/// serve more than 5000 entries for a query.
pub const DEFAULT_MAX_ENTRIES: u64 = 5000;

/// Paging and caching options for a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    /// Entries per request. Smaller pages mean more requests.
    pub count: u64,
    /// Index of the first entry to retrieve.
    pub start: u64,
    /// Fail when the query matches more than this many entries.
    pub max_entries: u64,
    /// Ignore an existing cache file and download again.
    pub refresh: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            start: 0,
            max_entries: DEFAULT_MAX_ENTRIES,
            refresh: false,
        }
    }
}

/// Raw results of one query against a search endpoint.
#[derive(Debug, Clone)]
pub struct Search {
    query: String,
    cache_path: PathBuf,
    entries: Vec<Value>,
    from_cache: bool,
}

impl Search {
    /// Load cached results for `query`, or download and cache them.
    pub async fn run(
        client: &ScopusClient,
        url: &str,
        query: &str,
        cache_path: PathBuf,
        params: SearchParams,
    ) -> Result<Self> {
        if params.count == 0 {
            return Err(SearchError::InvalidParameter(
                "count must be greater than zero".to_string(),
            ));
        }

        if !params.refresh {
            if let Some(entries) = cache::read_entries(&cache_path)? {
                debug!(query, path = %cache_path.display(), entries = entries.len(), "Cache hit");
                return Ok(Self {
                    query: query.to_string(),
                    cache_path,
                    entries,
                    from_cache: true,
                });
            }
        }

        let entries = download(client, url, query, &params).await?;
        cache::write_entries(&cache_path, &entries)?;
        info!(query, path = %cache_path.display(), entries = entries.len(), "Cached search results");

        Ok(Self {
            query: query.to_string(),
            cache_path,
            entries,
            from_cache: false,
        })
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn cache_path(&self) -> &Path {
        &self.cache_path
    }

    /// Raw JSON entries in API response order.
    pub fn entries(&self) -> &[Value] {
        &self.entries
    }

    /// Whether the entries were read from disk rather than downloaded.
    pub fn from_cache(&self) -> bool {
        self.from_cache
    }
}

/// Check the hit count against `max_entries`, then fetch every page.
async fn download(
    client: &ScopusClient,
    url: &str,
    query: &str,
    params: &SearchParams,
) -> Result<Vec<Value>> {
    let total = client.get_total_results(url, query).await?;
    debug!(query, total, "Total results");

    if total > params.max_entries {
        return Err(SearchError::Query {
            query: query.to_string(),
            found: total,
            max_entries: params.max_entries,
        });
    }

    let mut entries = Vec::new();
    let mut start = params.start;
    let mut remaining = total.saturating_sub(params.start);

    while remaining > 0 {
        let page = client.get_page(url, query, start, params.count).await?;
        debug!(query, start, received = page.len(), "Fetched page");

        if page.is_empty() {
            break;
        }
        entries.extend(page);

        // No entry lies past u64::MAX
        start = match start.checked_add(params.count) {
            Some(next) => next,
            None => break,
        };
        remaining = remaining.saturating_sub(params.count);
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = SearchParams::default();
        assert_eq!(params.count, 200);
        assert_eq!(params.start, 0);
        assert_eq!(params.max_entries, 5000);
        assert!(!params.refresh);
    }

    #[tokio::test]
    async fn test_zero_count_is_rejected() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config = crate::config::Config::for_testing("http://127.0.0.1:1", temp_dir.path().into());
        let client = ScopusClient::new(&config).unwrap();
        let params = SearchParams {
            count: 0,
            ..SearchParams::default()
        };

        let result = Search::run(
            &client,
            &config.affiliation_search_url,
            "affil(x)",
            temp_dir.path().join("key"),
            params,
        )
        .await;

        assert!(matches!(result, Err(SearchError::InvalidParameter(_))));
    }

    #[tokio::test]
    async fn test_cache_hit_skips_network() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        // Nothing listens on this port; a request would fail.
        let config = crate::config::Config::for_testing("http://127.0.0.1:1", temp_dir.path().into());
        let client = ScopusClient::new(&config).unwrap();
        let path = temp_dir.path().join("cached");
        let entries = vec![serde_json::json!({"eid": "1"})];
        cache::write_entries(&path, &entries).unwrap();

        let search = Search::run(
            &client,
            &config.affiliation_search_url,
            "affil(x)",
            path,
            SearchParams::default(),
        )
        .await
        .unwrap();

        assert!(search.from_cache());
        assert_eq!(search.entries(), entries.as_slice());
        assert_eq!(search.query(), "affil(x)");
    }

    #[tokio::test]
    async fn test_huge_page_size_does_not_overflow_offset() {
        use wiremock::matchers::{method, query_param};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("count", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "search-results": {"opensearch:totalResults": "5"}
            })))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(query_param("start", "1"))
            .and(query_param("count", u64::MAX.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "search-results": {
                    "opensearch:totalResults": "5",
                    "entry": [{"eid": "60000002"}]
                }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let temp_dir = tempfile::TempDir::new().unwrap();
        let config = crate::config::Config::for_testing(&mock_server.uri(), temp_dir.path().into());
        let client = ScopusClient::new(&config).unwrap();
        let params = SearchParams {
            count: u64::MAX,
            start: 1,
            ..SearchParams::default()
        };

        let search = Search::run(
            &client,
            &config.affiliation_search_url,
            "affil(x)",
            temp_dir.path().join("key"),
            params,
        )
        .await
        .unwrap();

        assert_eq!(search.entries().len(), 1);
    }
}
