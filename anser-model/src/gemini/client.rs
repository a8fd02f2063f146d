//! Gemini client implementation.

use super::config::GeminiConfig;
use crate::classify::classify_provider_error;
use anser_core::{AnserError, GenerateConfig, GenerationModel, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Generation client for the Gemini generateContent API.
///
/// One request per call, no retry; failures carry a
/// [`anser_core::GenerationErrorKind`] derived from the provider status
/// code, with a substring pass over the error body as a last resort.
///
/// # Example
///
/// ```rust,ignore
/// use anser_model::{GeminiClient, GeminiConfig};
///
/// let client = GeminiClient::new(GeminiConfig::flash(
///     std::env::var("GEMINI_API_KEY").unwrap()
/// ))?;
/// ```
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: RequestGenerationConfig,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestGenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

impl GeminiClient {
    /// Create a new Gemini client.
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AnserError::generation(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Build the API URL for generateContent. The API key travels in the
    /// `x-goog-api-key` header, never in the URL, so it cannot leak through
    /// error text or request logs.
    fn api_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.effective_base_url().trim_end_matches('/'),
            self.config.model,
        )
    }
}

#[async_trait]
impl GenerationModel for GeminiClient {
    fn name(&self) -> &str {
        &self.config.model
    }

    async fn generate(&self, prompt: &str, config: &GenerateConfig) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![RequestContent { parts: vec![RequestPart { text: prompt }] }],
            generation_config: RequestGenerationConfig {
                temperature: config.temperature,
                max_output_tokens: config.max_output_tokens,
            },
        };

        let response = self
            .client
            .post(self.api_url())
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AnserError::generation(format!("Gemini API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            let kind = classify_provider_error(status.as_u16(), &error_text);
            return Err(AnserError::Generation {
                kind,
                message: format!("Gemini API error ({}): {}", status, error_text),
            });
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AnserError::generation(format!("Failed to parse Gemini response: {}", e)))?;

        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .map(|p| p.text)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AnserError::generation("Gemini response contained no text candidate"))?;

        tracing::debug!(
            model = %self.config.model,
            temperature = config.temperature,
            max_output_tokens = config.max_output_tokens,
            chars = text.len(),
            "Gemini generation completed"
        );

        Ok(text)
    }
}
