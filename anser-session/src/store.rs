use crate::TurnState;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Handle to one session's memory.
///
/// The mutex serializes whole turns: the orchestrator holds the lock across
/// its read-classify-call-write sequence, so concurrent turns on the same
/// session are applied in lock-acquisition order instead of racing.
pub struct SessionSlot {
    state: Mutex<TurnState>,
}

impl SessionSlot {
    pub(crate) fn new() -> Self {
        Self { state: Mutex::new(TurnState::default()) }
    }

    pub fn state(&self) -> &Mutex<TurnState> {
        &self.state
    }
}

/// Session memory store: get-or-create, never fails.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Return the slot for `session_id`, creating an empty one if absent.
    async fn checkout(&self, session_id: &str) -> Arc<SessionSlot>;
}

/// Bounds for the in-memory store.
///
/// The store evicts the least-recently-touched session once `max_sessions`
/// is exceeded and prunes sessions idle for longer than `ttl` on access, so
/// memory stays bounded across the process lifetime.
#[derive(Debug, Clone)]
pub struct SessionStoreConfig {
    /// Maximum number of live sessions.
    pub max_sessions: usize,
    /// Idle time after which a session is dropped. `None` disables expiry.
    pub ttl: Option<Duration>,
}

impl Default for SessionStoreConfig {
    fn default() -> Self {
        Self { max_sessions: 1024, ttl: Some(Duration::from_secs(3600)) }
    }
}

impl SessionStoreConfig {
    pub fn with_max_sessions(mut self, max_sessions: usize) -> Self {
        self.max_sessions = max_sessions;
        self
    }

    pub fn with_ttl(mut self, ttl: Option<Duration>) -> Self {
        self.ttl = ttl;
        self
    }
}
