/// How a turn should be driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnKind {
    /// No relevant prior context; retrieve fresh evidence.
    Fresh,
    /// Elaborate on the immediately preceding answer; reuse its evidence.
    Expansion,
}

/// Phrase that marks a follow-up as a detail-expansion request.
const EXPANSION_MARKER: &str = "more details";

/// Decide whether a turn is a fresh query or a detail expansion.
///
/// A turn is an expansion iff the session has a prior query AND the
/// normalized query text contains the marker phrase. Purely textual and
/// intentionally conservative: a session with no prior turn is always
/// fresh regardless of phrasing. Swapping in a smarter classifier only
/// means replacing this function.
pub fn classify(last_query: &str, query: &str) -> TurnKind {
    if !last_query.is_empty() && query.trim().to_lowercase().contains(EXPANSION_MARKER) {
        TurnKind::Expansion
    } else {
        TurnKind::Fresh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_history_is_always_fresh() {
        assert_eq!(classify("", "give me more details"), TurnKind::Fresh);
        assert_eq!(classify("", "MORE DETAILS please"), TurnKind::Fresh);
        assert_eq!(classify("", "what is photosynthesis?"), TurnKind::Fresh);
    }

    #[test]
    fn marker_with_history_is_expansion() {
        assert_eq!(classify("what is rust", "give me more details"), TurnKind::Expansion);
        assert_eq!(classify("what is rust", "  More Details on that  "), TurnKind::Expansion);
    }

    #[test]
    fn same_query_without_marker_is_fresh() {
        assert_eq!(classify("what is rust", "give me more"), TurnKind::Fresh);
        assert_eq!(classify("what is rust", "details please"), TurnKind::Fresh);
    }
}
