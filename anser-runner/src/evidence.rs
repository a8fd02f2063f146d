use anser_core::SearchHit;

/// At most this many search hits are embedded into a prompt.
pub const MAX_EVIDENCE_HITS: usize = 3;

/// Placeholder evidence block when the provider returned nothing.
pub const NO_RESULTS_PLACEHOLDER: &str = "No results found";

/// Format search hits into the evidence block embedded in a fresh-turn
/// prompt: top hits in provider order, one entry per hit, entries
/// separated by a blank line.
pub fn format_evidence(hits: &[SearchHit]) -> String {
    if hits.is_empty() {
        return NO_RESULTS_PLACEHOLDER.to_string();
    }

    hits.iter()
        .take(MAX_EVIDENCE_HITS)
        .map(|hit| format!("- {}\n{}\nURL: {}", hit.title, hit.snippet, hit.url))
        .collect::<Vec<_>>()
        .join("\n\n")
}
