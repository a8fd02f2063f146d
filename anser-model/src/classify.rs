use anser_core::GenerationErrorKind;

/// Classify a provider failure from its HTTP status code.
///
/// Returns `None` when the status alone does not identify a cause.
#[must_use]
pub fn classify_status_code(status_code: u16) -> Option<GenerationErrorKind> {
    match status_code {
        404 => Some(GenerationErrorKind::ModelUnavailable),
        401 | 403 => Some(GenerationErrorKind::Auth),
        429 => Some(GenerationErrorKind::RateLimited),
        _ => None,
    }
}

/// Classify a provider failure from its error body text.
///
/// Last-resort fallback for providers that bury the cause in free text;
/// the substrings match Gemini's error messages for unknown models,
/// rejected credentials, and exhausted quota.
#[must_use]
pub fn classify_error_message(message: &str) -> GenerationErrorKind {
    let normalized = message.to_ascii_lowercase();
    if normalized.contains("is not found") || normalized.contains("not_found") {
        GenerationErrorKind::ModelUnavailable
    } else if normalized.contains("api key") || normalized.contains("unauthenticated") {
        GenerationErrorKind::Auth
    } else if normalized.contains("quota") || normalized.contains("resource_exhausted") {
        GenerationErrorKind::RateLimited
    } else {
        GenerationErrorKind::Unknown
    }
}

/// Classify a provider failure, status code first, message text as fallback.
#[must_use]
pub fn classify_provider_error(status_code: u16, message: &str) -> GenerationErrorKind {
    classify_status_code(status_code).unwrap_or_else(|| classify_error_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_code_identifies_known_causes() {
        assert_eq!(classify_status_code(404), Some(GenerationErrorKind::ModelUnavailable));
        assert_eq!(classify_status_code(401), Some(GenerationErrorKind::Auth));
        assert_eq!(classify_status_code(403), Some(GenerationErrorKind::Auth));
        assert_eq!(classify_status_code(429), Some(GenerationErrorKind::RateLimited));
        assert_eq!(classify_status_code(500), None);
    }

    #[test]
    fn message_fallback_matches_provider_phrasing() {
        assert_eq!(
            classify_error_message("models/nope is not found for API version v1beta"),
            GenerationErrorKind::ModelUnavailable
        );
        assert_eq!(
            classify_error_message("API key not valid. Please pass a valid API key."),
            GenerationErrorKind::Auth
        );
        assert_eq!(
            classify_error_message("Quota exceeded for requests per minute"),
            GenerationErrorKind::RateLimited
        );
        assert_eq!(classify_error_message("internal failure"), GenerationErrorKind::Unknown);
    }

    #[test]
    fn status_code_wins_over_message() {
        // A 429 with an unhelpful body is still a rate limit.
        assert_eq!(
            classify_provider_error(429, "something went wrong"),
            GenerationErrorKind::RateLimited
        );
        // A 400 falls through to the message text.
        assert_eq!(
            classify_provider_error(400, "API key not valid"),
            GenerationErrorKind::Auth
        );
    }
}
