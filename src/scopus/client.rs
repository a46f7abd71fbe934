// Scopus API HTTP client.
// Sets default headers and converts error statuses into SearchError values.

use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::config::Config;
use crate::error::{Result, SearchError};

const API_KEY_HEADER: &str = "x-els-apikey";

/// Scopus API client. Cheap to clone; the connection pool is shared.
#[derive(Clone)]
pub struct ScopusClient {
    client: Client,
    has_api_key: bool,
}

impl ScopusClient {
    /// Create a new client from the process configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("affsearch/", env!("CARGO_PKG_VERSION"))),
        );
        if let Some(key) = &config.api_key {
            let mut value = HeaderValue::from_str(key)
                .map_err(|e| SearchError::InvalidParameter(format!("API key: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(API_KEY_HEADER, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .build()
            .map_err(SearchError::Api)?;

        Ok(Self {
            client,
            has_api_key: config.api_key.is_some(),
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.has_api_key
    }

    /// Make a GET request with query parameters.
    pub async fn get_with_params<T: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        params: &T,
    ) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(SearchError::Api)?;

        check_response(response).await
    }
}

impl std::fmt::Debug for ScopusClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopusClient")
            .field("has_api_key", &self.has_api_key)
            .finish()
    }
}

/// Check response status and convert errors.
async fn check_response(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    match status {
        StatusCode::BAD_REQUEST => Err(SearchError::BadRequest(
            response.text().await.unwrap_or_default(),
        )),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(SearchError::Unauthorized),
        StatusCode::NOT_FOUND => Err(SearchError::NotFound(response.url().to_string())),
        StatusCode::TOO_MANY_REQUESTS => Err(SearchError::QuotaExceeded),
        status => Err(SearchError::Http {
            status: status.as_u16(),
            body: response.text().await.unwrap_or_default(),
        }),
    }
}
