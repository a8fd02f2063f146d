use crate::{SessionSlot, SessionStore, SessionStoreConfig};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Instant;

struct Entry {
    slot: Arc<SessionSlot>,
    touched: Instant,
}

/// Process-local session store with a capacity bound and idle expiry.
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, Entry>>,
    config: SessionStoreConfig,
}

impl InMemorySessionStore {
    pub fn new(config: SessionStoreConfig) -> Self {
        Self { sessions: RwLock::new(HashMap::new()), config }
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn prune_expired(sessions: &mut HashMap<String, Entry>, config: &SessionStoreConfig) {
        if let Some(ttl) = config.ttl {
            let now = Instant::now();
            let before = sessions.len();
            sessions.retain(|_, entry| now.duration_since(entry.touched) < ttl);
            let dropped = before - sessions.len();
            if dropped > 0 {
                tracing::debug!(dropped, "Expired idle sessions");
            }
        }
    }

    fn evict_oldest(sessions: &mut HashMap<String, Entry>, keep: &str) {
        let oldest = sessions
            .iter()
            .filter(|(id, _)| id.as_str() != keep)
            .min_by_key(|(_, entry)| entry.touched)
            .map(|(id, _)| id.clone());
        if let Some(id) = oldest {
            sessions.remove(&id);
            tracing::debug!(session_id = %id, "Evicted least-recently-used session");
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new(SessionStoreConfig::default())
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn checkout(&self, session_id: &str) -> Arc<SessionSlot> {
        let mut sessions = self.sessions.write().unwrap();

        Self::prune_expired(&mut sessions, &self.config);

        let entry = sessions
            .entry(session_id.to_string())
            .or_insert_with(|| Entry { slot: Arc::new(SessionSlot::new()), touched: Instant::now() });
        entry.touched = Instant::now();
        let slot = entry.slot.clone();

        if sessions.len() > self.config.max_sessions {
            Self::evict_oldest(&mut sessions, session_id);
        }

        slot
    }
}
