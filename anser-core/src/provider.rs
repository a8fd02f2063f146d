use crate::{GenerateConfig, Result, SearchHit};
use async_trait::async_trait;

/// A web-search backend.
///
/// Implementations make a single attempt per call; they never retry. The
/// orchestrator decides whether a failure is fatal to the turn.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Query the provider and return its ranked organic results, at most as
    /// many as the provider produced, in the provider's order.
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>>;
}

/// A text-generation backend.
#[async_trait]
pub trait GenerationModel: Send + Sync {
    /// Model identifier, for logging.
    fn name(&self) -> &str;

    /// Generate text for `prompt` under the given sampling parameters.
    ///
    /// Single attempt, no retry. Failures carry a [`GenerationErrorKind`]
    /// classified at the client boundary.
    ///
    /// [`GenerationErrorKind`]: crate::GenerationErrorKind
    async fn generate(&self, prompt: &str, config: &GenerateConfig) -> Result<String>;
}
