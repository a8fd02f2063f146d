use crate::classify::{classify, TurnKind};
use crate::evidence::format_evidence;
use crate::prompt::{expansion_prompt, fresh_prompt};
use anser_core::{
    AnserError, GenerateConfig, GenerationModel, Result, SearchProvider, TurnRequest, TurnResponse,
};
use anser_session::{SessionStore, TurnState};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

/// Sampling for fresh turns: low temperature to suppress fabrication, cap
/// sized for multi-paragraph factual synthesis.
pub const FRESH_GENERATION: GenerateConfig =
    GenerateConfig { temperature: 0.4, max_output_tokens: 1024 };

/// Sampling for detail-expansion turns: hotter and twice the cap, since the
/// explicit purpose is richer elaboration.
pub const EXPANSION_GENERATION: GenerateConfig =
    GenerateConfig { temperature: 0.7, max_output_tokens: 2048 };

pub struct TurnRunnerConfig {
    pub search: Arc<dyn SearchProvider>,
    pub model: Arc<dyn GenerationModel>,
    pub sessions: Arc<dyn SessionStore>,
}

/// The turn orchestrator.
///
/// Drives one request/response cycle: validate, classify against session
/// memory, retrieve evidence (fresh turns only), generate, then update
/// memory. Session state is mutated only after a successful generation,
/// never partially on failure.
pub struct TurnRunner {
    search: Arc<dyn SearchProvider>,
    model: Arc<dyn GenerationModel>,
    sessions: Arc<dyn SessionStore>,
}

impl TurnRunner {
    pub fn new(config: TurnRunnerConfig) -> Self {
        Self { search: config.search, model: config.model, sessions: config.sessions }
    }

    /// Handle one turn.
    ///
    /// The session slot's lock is held across the whole
    /// read-classify-call-write sequence, so back-to-back turns on one
    /// session serialize instead of racing on shared state.
    pub async fn run(&self, request: TurnRequest) -> Result<TurnResponse> {
        // Validation trims, but the query itself flows through untouched:
        // it is sent to search and stored in memory exactly as received.
        let query = request.query;
        if query.trim().is_empty() {
            return Err(AnserError::Validation("Message is required".to_string()));
        }

        // Anonymous callers get a fresh identifier: they never share memory.
        let session_id = match request.session_id.filter(|id| !id.is_empty()) {
            Some(id) => id,
            None => Uuid::new_v4().to_string(),
        };

        let slot = self.sessions.checkout(&session_id).await;
        let mut state = slot.state().lock().await;

        let kind = classify(&state.last_query, &query);
        tracing::info!(session_id = %session_id, kind = ?kind, "Handling turn");

        match kind {
            TurnKind::Fresh => self.run_fresh(&query, &mut state).await,
            TurnKind::Expansion => self.run_expansion(&mut state).await,
        }
    }

    /// Fresh turn: evidence-dependent by design. A search failure aborts the
    /// whole turn rather than degrading to an un-grounded answer presented
    /// as evidence-backed.
    async fn run_fresh(&self, query: &str, state: &mut TurnState) -> Result<TurnResponse> {
        let hits = self.search.search(query).await?;
        let evidence = format_evidence(&hits);

        let now = Utc::now();
        let prompt = fresh_prompt(query, now, &evidence);
        let answer = self.model.generate(&prompt, &FRESH_GENERATION).await?;

        state.last_query = query.to_string();
        state.last_answer = answer.clone();
        state.last_evidence = Some(evidence);

        Ok(TurnResponse { answer, generated_at: now })
    }

    /// Expansion turn: no new search. Reasons over the already-retrieved
    /// evidence so the follow-up stays cheap and evidence-consistent with
    /// the original answer. Only `last_answer` is overwritten; the expansion
    /// is still "about" the stored query and evidence.
    async fn run_expansion(&self, state: &mut TurnState) -> Result<TurnResponse> {
        let prompt = expansion_prompt(state);
        let answer = self.model.generate(&prompt, &EXPANSION_GENERATION).await?;

        state.last_answer = answer.clone();

        Ok(TurnResponse { answer, generated_at: Utc::now() })
    }
}
