use anser_core::{AnserError, GenerationErrorKind, TurnRequest};
use anser_runner::TurnRunner;
use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

#[derive(Clone)]
pub struct ChatController {
    runner: Arc<TurnRunner>,
    expose_error_details: bool,
}

impl ChatController {
    pub fn new(runner: Arc<TurnRunner>, expose_error_details: bool) -> Self {
        Self { runner, expose_error_details }
    }
}

#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "sessionId", default)]
    pub session_id: Option<String>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub message: String,
    pub timestamp: String,
}

pub async fn chat(
    State(controller): State<ChatController>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<Value>)> {
    let query = req.message.unwrap_or_default();

    let turn = TurnRequest { session_id: req.session_id, query };
    let response = controller
        .runner
        .run(turn)
        .await
        .map_err(|e| error_response(&e, controller.expose_error_details))?;

    Ok(Json(ChatResponse {
        message: response.answer,
        timestamp: response.generated_at.to_rfc3339(),
    }))
}

/// Map an orchestration failure to the documented status code and body.
///
/// `details` carries the upstream error text and is populated only when the
/// deployment exposes error details; production responses stay opaque.
fn error_response(error: &AnserError, expose_details: bool) -> (StatusCode, Json<Value>) {
    let details = expose_details.then(|| error.to_string());

    let (status, message) = match error {
        AnserError::Validation(_) => (StatusCode::BAD_REQUEST, "Message is required"),
        AnserError::Generation { kind, .. } => match kind {
            GenerationErrorKind::ModelUnavailable => {
                (StatusCode::NOT_FOUND, "Model unavailable")
            }
            GenerationErrorKind::Auth => {
                (StatusCode::UNAUTHORIZED, "Invalid API key configuration")
            }
            GenerationErrorKind::RateLimited => {
                (StatusCode::TOO_MANY_REQUESTS, "Too many requests. Please try again later.")
            }
            GenerationErrorKind::Unknown => (StatusCode::INTERNAL_SERVER_ERROR, "Internal error"),
        },
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "Internal error"),
    };

    if status.is_server_error() {
        tracing::error!(error = %error, "Turn failed");
    } else {
        tracing::warn!(error = %error, status = %status, "Turn rejected");
    }

    let mut body = json!({ "error": message });
    if let Some(details) = details {
        body["details"] = Value::String(details);
    }

    (status, Json(body))
}
