//! Configuration for the Serper search provider.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Serper API base URL.
pub const SERPER_API_BASE: &str = "https://google.serper.dev";

/// Configuration for the Serper web-search API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerperConfig {
    /// Serper API key, sent as the `X-API-KEY` header.
    pub api_key: String,
    /// Optional custom base URL (tests point this at a local mock).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Number of results to request per query.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Request timeout. The provider contract does not guarantee bounded
    /// latency, so the client imposes one.
    #[serde(default = "default_timeout", with = "duration_secs")]
    pub timeout: Duration,
}

fn default_page_size() -> u32 {
    10
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_secs(u64::deserialize(d)?))
    }
}

impl Default for SerperConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: None,
            page_size: default_page_size(),
            timeout: default_timeout(),
        }
    }
}

impl SerperConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self { api_key: api_key.into(), ..Default::default() }
    }

    /// Set a custom base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the number of results requested per query.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the effective base URL.
    pub fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(SERPER_API_BASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SerperConfig::new("key");
        assert_eq!(config.api_key, "key");
        assert_eq!(config.effective_base_url(), SERPER_API_BASE);
        assert_eq!(config.page_size, 10);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_builders() {
        let config = SerperConfig::new("key")
            .with_base_url("http://localhost:9999")
            .with_page_size(5)
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.effective_base_url(), "http://localhost:9999");
        assert_eq!(config.page_size, 5);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
