//! # anser-runner
//!
//! Turn orchestration for Anser.
//!
//! [`TurnRunner::run`] drives one request/response cycle:
//!
//! 1. Reject empty queries before touching any backend.
//! 2. Check out the session slot and hold its lock for the whole turn.
//! 3. [`classify`] the turn: fresh query or detail expansion.
//! 4. Fresh path: search, format top-3 evidence, generate at the
//!    [`FRESH_GENERATION`] sampling, overwrite all session fields.
//!    Expansion path: no search; prompt from stored state, generate at
//!    [`EXPANSION_GENERATION`], overwrite the stored answer only.
//!
//! Failures leave session state untouched.

mod classify;
mod evidence;
mod prompt;
mod runner;

pub use classify::{classify, TurnKind};
pub use evidence::{format_evidence, MAX_EVIDENCE_HITS, NO_RESULTS_PLACEHOLDER};
pub use prompt::{expansion_prompt, fresh_prompt, NO_PRIOR_EVIDENCE};
pub use runner::{TurnRunner, TurnRunnerConfig, EXPANSION_GENERATION, FRESH_GENERATION};
