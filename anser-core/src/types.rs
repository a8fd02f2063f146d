use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One inbound request/response cycle of the conversational service.
///
/// `session_id` is an opaque, caller-supplied continuity token. When absent,
/// the orchestrator assigns a fresh identifier so anonymous callers never
/// share conversational memory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnRequest {
    pub session_id: Option<String>,
    pub query: String,
}

impl TurnRequest {
    pub fn new(session_id: impl Into<String>, query: impl Into<String>) -> Self {
        Self { session_id: Some(session_id.into()), query: query.into() }
    }

    /// A request with no continuity token.
    pub fn anonymous(query: impl Into<String>) -> Self {
        Self { session_id: None, query: query.into() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnResponse {
    pub answer: String,
    pub generated_at: DateTime<Utc>,
}

/// A single ranked result from the web-search provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub snippet: String,
    pub url: String,
}

impl SearchHit {
    pub fn new(
        title: impl Into<String>,
        snippet: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self { title: title.into(), snippet: snippet.into(), url: url.into() }
    }
}

/// Sampling parameters for a single generation call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Sampling temperature in `[0, 1]`.
    pub temperature: f32,
    /// Output-length cap in tokens. Always positive.
    pub max_output_tokens: u32,
}

impl GenerateConfig {
    pub fn new(temperature: f32, max_output_tokens: u32) -> Self {
        Self { temperature, max_output_tokens }
    }
}
