//! Heroku platform API HTTP client

use std::time::Duration;

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::api;
use crate::error::{AuditError, Result};

/// Authenticated client for the Heroku platform API and its data-API hosts
///
/// Shared read-only across concurrent fetches; no interior locking is needed
/// because every call is an independent GET.
pub struct HerokuClient {
    client: Client,
    api_key: String,
    /// Custom base URL override (for testing with mock servers)
    base_url_override: Option<String>,
}

impl HerokuClient {
    /// Create a new client with pooled connection settings
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            // Connection pool settings - reuse connections across the fan-out
            .pool_max_idle_per_host(20)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            // Timeouts
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_key,
            base_url_override: None,
        }
    }

    /// Create a client with custom base URL (for testing with mock servers)
    #[cfg(test)]
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let client = Client::builder().build().unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_key,
            base_url_override: Some(base_url),
        }
    }

    /// Build the base URL for platform API requests
    pub(crate) fn base_url(&self) -> String {
        match &self.base_url_override {
            Some(url) => url.clone(),
            None => format!("https://{}", api::HOST),
        }
    }

    /// Build a URL for a secondary detail host (Postgres/Redis data APIs)
    ///
    /// Routed at the mock server when the override is set, so probe endpoints
    /// are testable alongside the platform API.
    pub(crate) fn data_url(&self, host: &str, path: &str) -> String {
        match &self.base_url_override {
            Some(url) => format!("{}{}", url, path),
            None => format!("https://{}{}", host, path),
        }
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("Accept", api::ACCEPT)
            .header("Authorization", format!("Bearer {}", self.api_key))
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// Parse an API response, returning an error for non-success status codes
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(AuditError::Api {
                status: response.status().as_u16(),
                message: format!("Failed to fetch {}", error_context),
            });
        }
        Ok(response.json().await?)
    }

    /// Fetch a list endpoint, following `Next-Range` partial responses
    ///
    /// Heroku list endpoints answer 206 with a `Next-Range` header when the
    /// result set exceeds the requested range; the loop re-issues the request
    /// with that range until the API answers 200.
    pub(crate) async fn get_list<T>(&self, path: &str, error_context: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url(), path);
        let mut range = format!("id ..; max={}", api::RANGE_PAGE_SIZE);
        let mut items: Vec<T> = Vec::new();

        loop {
            debug!("Fetching {} (range: {})", url, range);
            let response = self.get(&url).header("Range", &range).send().await?;

            let status = response.status();
            if !status.is_success() {
                return Err(AuditError::Api {
                    status: status.as_u16(),
                    message: format!("Failed to fetch {}", error_context),
                });
            }

            let next_range = response
                .headers()
                .get("Next-Range")
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);

            let page: Vec<T> = response.json().await?;
            debug!("{}: received {} items", error_context, page.len());
            items.extend(page);

            match (status.as_u16(), next_range) {
                (206, Some(next)) => range = next,
                _ => break,
            }
        }

        Ok(items)
    }

    /// Issue an authenticated GET against a named detail host, returning JSON
    pub(crate) async fn get_json(
        &self,
        host: &str,
        path: &str,
        error_context: &str,
    ) -> Result<serde_json::Value> {
        let url = self.data_url(host, path);
        debug!("Probing {}", url);

        let response = self.get(&url).send().await?;
        self.parse_api_response(response, error_context).await
    }
}

#[cfg(test)]
impl HerokuClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::with_base_url("test-key".to_string(), base_url.to_string())
    }
}
