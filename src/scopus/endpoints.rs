// Scopus search endpoint functions.
// Typed calls for the hit count and single result pages of a search endpoint.

use serde_json::Value;

use crate::error::Result;

use super::client::ScopusClient;
use super::types::SearchResponse;

impl ScopusClient {
    /// Get the total number of hits for `query` without fetching entries.
    pub async fn get_total_results(&self, url: &str, query: &str) -> Result<u64> {
        let params = [("query", query), ("count", "0"), ("start", "0")];
        let response = self.get_with_params(url, &params).await?;
        let wrapper: SearchResponse = response.json().await?;
        Ok(wrapper.search_results.total_results)
    }

    /// Get one page of up to `count` entries starting at `start`.
    pub async fn get_page(
        &self,
        url: &str,
        query: &str,
        start: u64,
        count: u64,
    ) -> Result<Vec<Value>> {
        let count = count.to_string();
        let start = start.to_string();
        let params = [
            ("query", query),
            ("count", count.as_str()),
            ("start", start.as_str()),
        ];
        let response = self.get_with_params(url, &params).await?;
        let wrapper: SearchResponse = response.json().await?;
        Ok(wrapper.search_results.into_entries())
    }
}
