/// Conversational memory for one session.
///
/// Created empty on first checkout and mutated only by the turn
/// orchestrator, only after a successful generation: a fresh turn
/// overwrites all three fields, a detail-expansion turn overwrites
/// `last_answer` alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnState {
    /// The query of the most recent fresh turn.
    pub last_query: String,
    /// The most recent generated answer.
    pub last_answer: String,
    /// The formatted evidence block of the most recent fresh turn.
    pub last_evidence: Option<String>,
}

impl TurnState {
    /// Whether this session has completed at least one turn.
    pub fn has_prior_turn(&self) -> bool {
        !self.last_query.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_has_no_prior_turn() {
        let state = TurnState::default();
        assert!(!state.has_prior_turn());
        assert!(state.last_evidence.is_none());
    }

    #[test]
    fn test_prior_turn_detection() {
        let state = TurnState {
            last_query: "what is rust".to_string(),
            last_answer: "a language".to_string(),
            last_evidence: None,
        };
        assert!(state.has_prior_turn());
    }
}
