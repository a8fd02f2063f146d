//! # anser-search
//!
//! Web-search client for Anser, backed by the Serper API.
//!
//! [`SerperClient`] implements [`anser_core::SearchProvider`]: one POST per
//! query, ranked organic results mapped to [`anser_core::SearchHit`], no
//! retries. The orchestrator owns the decision of what a search failure
//! means for the turn.

mod client;
mod config;

pub use client::SerperClient;
pub use config::{SerperConfig, SERPER_API_BASE};
