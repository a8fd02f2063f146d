//! Gemini provider: generateContent over REST.

mod client;
mod config;

pub use client::GeminiClient;
pub use config::{GeminiConfig, DEFAULT_MODEL, GEMINI_API_BASE};
