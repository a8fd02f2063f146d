//! # anser-core
//!
//! Core types, error taxonomy, and provider traits for Anser, a
//! conversational query-answering service.
//!
//! ## Overview
//!
//! - [`TurnRequest`] / [`TurnResponse`] - One request/response cycle
//! - [`SearchProvider`] / [`GenerationModel`] - The two backend seams
//! - [`AnserError`] / [`Result`] - Unified error handling
//!
//! Backends are black boxes behind the two traits: the search provider
//! returns ranked [`SearchHit`]s, the generation model turns a prompt plus
//! [`GenerateConfig`] sampling parameters into text. Everything else in the
//! workspace (orchestration, session memory, the HTTP boundary) builds on
//! these seams.

mod error;
mod provider;
mod types;

pub use error::{AnserError, GenerationErrorKind, Result};
pub use provider::{GenerationModel, SearchProvider};
pub use types::{GenerateConfig, SearchHit, TurnRequest, TurnResponse};
