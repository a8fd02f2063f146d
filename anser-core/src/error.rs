use serde::{Deserialize, Serialize};

/// Cause of a generation-backend failure, derived from provider status
/// codes (with a substring fallback) inside the model client. The HTTP
/// boundary maps each variant to a status code without re-parsing
/// provider error text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationErrorKind {
    /// The backend does not recognize the requested model identifier.
    ModelUnavailable,
    /// The credential was rejected.
    Auth,
    /// Quota or throughput exceeded.
    RateLimited,
    /// Anything the provider did not attribute to a known cause.
    Unknown,
}

#[derive(Debug, thiserror::Error)]
pub enum AnserError {
    /// Malformed or empty input. Never reaches a backend.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Search backend failure (non-success response or transport error).
    #[error("Search error: {0}")]
    Search(String),

    /// Generation backend failure, tagged with its cause.
    #[error("Generation error ({kind:?}): {message}")]
    Generation {
        kind: GenerationErrorKind,
        message: String,
    },

    #[error("Session error: {0}")]
    Session(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl AnserError {
    /// Shorthand for a generation failure with an unclassified cause.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation { kind: GenerationErrorKind::Unknown, message: message.into() }
    }

    /// The generation-failure cause, if this error came from the model client.
    pub fn generation_kind(&self) -> Option<GenerationErrorKind> {
        match self {
            Self::Generation { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AnserError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AnserError::Validation("query is empty".to_string());
        assert_eq!(err.to_string(), "Validation error: query is empty");
    }

    #[test]
    fn test_generation_kind_accessor() {
        let err = AnserError::Generation {
            kind: GenerationErrorKind::RateLimited,
            message: "quota exceeded".to_string(),
        };
        assert_eq!(err.generation_kind(), Some(GenerationErrorKind::RateLimited));
        assert_eq!(AnserError::Search("boom".into()).generation_kind(), None);
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: AnserError = io_err.into();
        assert!(matches!(err, AnserError::Io(_)));
    }
}
