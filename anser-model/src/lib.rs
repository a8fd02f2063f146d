//! # anser-model
//!
//! Generation backend for Anser: a [`GeminiClient`] implementing
//! [`anser_core::GenerationModel`] over the generateContent REST API, plus
//! the provider error classification and a [`MockModel`] for tests.
//!
//! Upstream failures are tagged with an
//! [`anser_core::GenerationErrorKind`] here, at the client boundary, so
//! callers never parse provider error text themselves.

pub mod classify;
mod gemini;
mod mock;

pub use gemini::{GeminiClient, GeminiConfig, DEFAULT_MODEL, GEMINI_API_BASE};
pub use mock::MockModel;
