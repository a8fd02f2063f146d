use crate::config::Config;
use anser_model::{GeminiClient, GeminiConfig};
use anser_runner::{TurnRunner, TurnRunnerConfig};
use anser_search::{SerperClient, SerperConfig};
use anser_server::{create_app, SecurityConfig, ServerConfig};
use anser_session::{InMemorySessionStore, SessionStoreConfig};
use anyhow::Result;
use std::sync::Arc;

pub async fn run_serve(config: Config, host: &str, port: u16, dev: bool) -> Result<()> {
    if let Err(e) = crate::telemetry::init_telemetry("anser-server") {
        eprintln!("Failed to initialize telemetry: {}", e);
    }

    let search = Arc::new(SerperClient::new(SerperConfig::new(config.serper_api_key))?);
    let model =
        Arc::new(GeminiClient::new(GeminiConfig::new(config.gemini_api_key, config.model))?);
    let sessions = Arc::new(InMemorySessionStore::new(
        SessionStoreConfig::default()
            .with_max_sessions(config.max_sessions)
            .with_ttl(config.session_ttl),
    ));

    let runner = Arc::new(TurnRunner::new(TurnRunnerConfig { search, model, sessions }));

    let security = if dev { SecurityConfig::development() } else { SecurityConfig::default() };
    let app = create_app(ServerConfig::new(runner).with_security(security));

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(addr = %addr, dev, "Anser server starting");
    println!("Anser server listening on http://{}", addr);
    println!("Press Ctrl+C to stop");

    axum::serve(listener, app).await?;

    Ok(())
}
