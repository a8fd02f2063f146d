//! Serper client implementation.

use super::config::SerperConfig;
use anser_core::{AnserError, Result, SearchHit, SearchProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Web-search client for the Serper API.
///
/// Makes a single attempt per query; a non-success response or transport
/// failure surfaces as [`AnserError::Search`] carrying the provider status
/// where available.
///
/// # Example
///
/// ```rust,ignore
/// use anser_search::{SerperClient, SerperConfig};
///
/// let client = SerperClient::new(SerperConfig::new(
///     std::env::var("SERPER_API_KEY").unwrap()
/// ))?;
/// ```
pub struct SerperClient {
    client: Client,
    config: SerperConfig,
}

#[derive(Serialize)]
struct SearchRequest<'a> {
    q: &'a str,
    num: u32,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    organic: Vec<OrganicResult>,
}

#[derive(Deserialize)]
struct OrganicResult {
    #[serde(default)]
    title: String,
    #[serde(default)]
    snippet: String,
    #[serde(default)]
    link: String,
}

impl SerperClient {
    /// Create a new Serper client.
    pub fn new(config: SerperConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AnserError::Search(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Build the API URL for the search endpoint.
    fn api_url(&self) -> String {
        format!("{}/search", self.config.effective_base_url().trim_end_matches('/'))
    }
}

#[async_trait]
impl SearchProvider for SerperClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>> {
        let request = SearchRequest { q: query, num: self.config.page_size };

        let response = self
            .client
            .post(self.api_url())
            .header("X-API-KEY", &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| AnserError::Search(format!("Serper API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AnserError::Search(format!(
                "Serper API error ({}): {}",
                status, error_text
            )));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| AnserError::Search(format!("Failed to parse Serper response: {}", e)))?;

        let hits: Vec<SearchHit> = body
            .organic
            .into_iter()
            .map(|r| SearchHit { title: r.title, snippet: r.snippet, url: r.link })
            .collect();

        tracing::debug!(query = %query, hits = hits.len(), "Serper search completed");

        Ok(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url() {
        let client =
            SerperClient::new(SerperConfig::new("key").with_base_url("http://host:1234/")).unwrap();
        assert_eq!(client.api_url(), "http://host:1234/search");
    }

    #[test]
    fn test_response_parsing_tolerates_missing_fields() {
        let body: SearchResponse =
            serde_json::from_str(r#"{"organic":[{"title":"A","link":"https://a"}]}"#).unwrap();
        assert_eq!(body.organic.len(), 1);
        assert_eq!(body.organic[0].snippet, "");
    }

    #[test]
    fn test_response_parsing_without_organic() {
        let body: SearchResponse = serde_json::from_str(r#"{"searchParameters":{}}"#).unwrap();
        assert!(body.organic.is_empty());
    }
}
