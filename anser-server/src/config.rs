use anser_runner::TurnRunner;
use std::{sync::Arc, time::Duration};

/// Security configuration for the Anser server.
#[derive(Clone, Debug)]
pub struct SecurityConfig {
    /// Allowed origins for CORS (empty = allow all, which is NOT recommended for production)
    pub allowed_origins: Vec<String>,
    /// Maximum request body size in bytes (default: 64KB — chat payloads are small)
    pub max_body_size: usize,
    /// Request timeout duration (default: 60 seconds — a turn makes two upstream calls)
    pub request_timeout: Duration,
    /// Whether to include upstream error details in responses (default: false for production)
    pub expose_error_details: bool,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            max_body_size: 64 * 1024,
            request_timeout: Duration::from_secs(60),
            expose_error_details: false,
        }
    }
}

impl SecurityConfig {
    /// Create a development configuration (permissive CORS, detailed errors)
    pub fn development() -> Self {
        Self { expose_error_details: true, ..Self::default() }
    }

    /// Create a production configuration with specific allowed origins
    pub fn production(allowed_origins: Vec<String>) -> Self {
        Self { allowed_origins, ..Self::default() }
    }
}

/// Configuration for the Anser server.
#[derive(Clone)]
pub struct ServerConfig {
    pub runner: Arc<TurnRunner>,
    pub security: SecurityConfig,
}

impl ServerConfig {
    pub fn new(runner: Arc<TurnRunner>) -> Self {
        Self { runner, security: SecurityConfig::default() }
    }

    pub fn with_security(mut self, security: SecurityConfig) -> Self {
        self.security = security;
        self
    }

    /// Configure allowed CORS origins
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.security.allowed_origins = origins;
        self
    }

    /// Configure maximum request body size
    pub fn with_max_body_size(mut self, size: usize) -> Self {
        self.security.max_body_size = size;
        self
    }

    /// Configure request timeout
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.security.request_timeout = timeout;
        self
    }

    /// Enable detailed error messages (for development only)
    pub fn with_error_details(mut self, expose: bool) -> Self {
        self.security.expose_error_details = expose;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_security_config_constructors() {
        let default = SecurityConfig::default();
        assert!(default.allowed_origins.is_empty());
        assert_eq!(default.max_body_size, 64 * 1024);
        assert_eq!(default.request_timeout, Duration::from_secs(60));
        assert!(!default.expose_error_details);

        let dev = SecurityConfig::development();
        assert!(dev.expose_error_details);

        let prod = SecurityConfig::production(vec!["https://example.com".to_string()]);
        assert_eq!(prod.allowed_origins, vec!["https://example.com"]);
        assert!(!prod.expose_error_details);
    }
}
