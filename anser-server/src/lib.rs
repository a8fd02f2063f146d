//! # anser-server
//!
//! HTTP boundary for Anser.
//!
//! [`create_app`] builds the axum router: `POST /api/chat` runs one turn
//! through the orchestrator and maps failures to the documented status
//! codes (400 validation, 404 model unavailable, 401 bad credential,
//! 429 rate limited, 500 otherwise). Upstream error text leaks into
//! responses only when [`SecurityConfig::expose_error_details`] is set.

pub mod config;
pub mod rest;

pub use config::{SecurityConfig, ServerConfig};
pub use rest::{create_app, ChatController};
