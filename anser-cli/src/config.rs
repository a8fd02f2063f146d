use anyhow::Result;
use std::time::Duration;

/// Environment-derived configuration for the service.
pub struct Config {
    pub gemini_api_key: String,
    pub serper_api_key: String,
    pub model: String,
    pub max_sessions: usize,
    pub session_ttl: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let gemini_api_key = std::env::var("GOOGLE_API_KEY")
            .or_else(|_| std::env::var("GEMINI_API_KEY"))
            .map_err(|_| {
                anyhow::anyhow!("GOOGLE_API_KEY or GEMINI_API_KEY environment variable not set")
            })?;

        let serper_api_key = std::env::var("SERPER_API_KEY")
            .map_err(|_| anyhow::anyhow!("SERPER_API_KEY environment variable not set"))?;

        let model =
            std::env::var("ANSER_MODEL").unwrap_or_else(|_| anser_model::DEFAULT_MODEL.to_string());

        let max_sessions = match std::env::var("ANSER_MAX_SESSIONS") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| anyhow::anyhow!("ANSER_MAX_SESSIONS must be a positive integer"))?,
            Err(_) => 1024,
        };

        // 0 disables idle expiry.
        let session_ttl = match std::env::var("ANSER_SESSION_TTL_SECS") {
            Ok(raw) => {
                let secs: u64 = raw
                    .parse()
                    .map_err(|_| anyhow::anyhow!("ANSER_SESSION_TTL_SECS must be an integer"))?;
                (secs > 0).then(|| Duration::from_secs(secs))
            }
            Err(_) => Some(Duration::from_secs(3600)),
        };

        Ok(Self { gemini_api_key, serper_api_key, model, max_sessions, session_ttl })
    }
}
