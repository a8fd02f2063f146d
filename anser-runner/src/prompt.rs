use anser_session::TurnState;
use chrono::{DateTime, Utc};

/// Evidence placeholder for an expansion turn whose fresh turn stored none.
pub const NO_PRIOR_EVIDENCE: &str = "No additional search results";

/// Prompt for a fresh turn: the literal query, the current timestamp, the
/// formatted evidence block, and the grounding instruction.
pub fn fresh_prompt(query: &str, now: DateTime<Utc>, evidence: &str) -> String {
    format!(
        "You are a factual research assistant.\n\
         Current date and time: {}\n\n\
         Question: {}\n\n\
         Web search results:\n{}\n\n\
         Combine the search results with your background knowledge to answer \
         the question. Surface concrete dates and facts. When sources \
         disagree, flag the conflict explicitly and state which source is \
         more reliable and why.",
        now.to_rfc3339(),
        query,
        evidence
    )
}

/// Prompt for a detail-expansion turn, built entirely from stored state.
pub fn expansion_prompt(state: &TurnState) -> String {
    let evidence = state.last_evidence.as_deref().unwrap_or(NO_PRIOR_EVIDENCE);
    format!(
        "The user previously asked: {}\n\n\
         Your previous response was:\n{}\n\n\
         Web search results from that turn:\n{}\n\n\
         The user now wants more detail. Produce a strictly more detailed \
         elaboration of your previous response: additional facts, context, \
         and insight beyond the original answer.",
        state.last_query, state.last_answer, evidence
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_prompt_embeds_query_timestamp_and_evidence() {
        let now = Utc::now();
        let prompt = fresh_prompt("What is photosynthesis?", now, "- A\nB\nURL: https://c");

        assert!(prompt.contains("What is photosynthesis?"));
        assert!(prompt.contains(&now.to_rfc3339()));
        assert!(prompt.contains("- A\nB\nURL: https://c"));
        assert!(prompt.contains("source"));
    }

    #[test]
    fn expansion_prompt_embeds_stored_state() {
        let state = TurnState {
            last_query: "What is photosynthesis?".to_string(),
            last_answer: "Plants convert light to energy.".to_string(),
            last_evidence: Some("- A\nB\nURL: https://c".to_string()),
        };
        let prompt = expansion_prompt(&state);

        assert!(prompt.contains("What is photosynthesis?"));
        assert!(prompt.contains("Plants convert light to energy."));
        assert!(prompt.contains("- A\nB\nURL: https://c"));
        assert!(prompt.contains("more detail"));
    }

    #[test]
    fn expansion_prompt_substitutes_placeholder_for_missing_evidence() {
        let state = TurnState {
            last_query: "q".to_string(),
            last_answer: "a".to_string(),
            last_evidence: None,
        };
        assert!(expansion_prompt(&state).contains(NO_PRIOR_EVIDENCE));
    }
}
