//! # anser-session
//!
//! Per-session conversational memory for Anser.
//!
//! [`SessionStore::checkout`] is get-or-create and never fails; it hands
//! out an [`SessionSlot`] whose `tokio` mutex the orchestrator holds across
//! a whole turn, serializing concurrent turns on the same session. The
//! in-memory store is bounded: [`SessionStoreConfig`] sets a capacity
//! (least-recently-touched eviction) and an idle TTL.

mod inmemory;
mod state;
mod store;

pub use inmemory::InMemorySessionStore;
pub use state::TurnState;
pub use store::{SessionSlot, SessionStore, SessionStoreConfig};
