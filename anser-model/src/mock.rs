use anser_core::{AnserError, GenerateConfig, GenerationModel, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// Scripted model for tests: replays canned outcomes in order and records
/// the sampling config of every call.
pub struct MockModel {
    name: String,
    responses: Mutex<Vec<Result<String>>>,
    calls: Mutex<Vec<GenerateConfig>>,
}

impl MockModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), responses: Mutex::new(vec![]), calls: Mutex::new(vec![]) }
    }

    pub fn with_response(self, text: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push(Ok(text.into()));
        self
    }

    pub fn with_error(self, error: AnserError) -> Self {
        self.responses.lock().unwrap().push(Err(error));
        self
    }

    /// Sampling configs of the calls made so far, in call order.
    pub fn calls(&self) -> Vec<GenerateConfig> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationModel for MockModel {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate(&self, _prompt: &str, config: &GenerateConfig) -> Result<String> {
        self.calls.lock().unwrap().push(*config);
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(AnserError::generation("MockModel has no scripted response left"));
        }
        responses.remove(0)
    }
}
