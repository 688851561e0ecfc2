use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Thread id slot of one chat session. `None` until the first answer.
pub type ThreadSlot = Arc<Mutex<Option<String>>>;

/// Chat session id -> remote thread id.
///
/// Each slot has its own lock, so two messages racing on the same session are
/// applied one after the other instead of overwriting each other's thread id.
#[derive(Clone, Default)]
pub struct SessionStore {
    slots: Arc<DashMap<String, ThreadSlot>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new session with no thread id.
    pub fn open(&self) -> String {
        let session_id = Uuid::new_v4().to_string();
        self.slots.insert(session_id.clone(), ThreadSlot::default());
        session_id
    }

    /// Forget the thread id of a session so its next message starts a new
    /// conversation.
    pub fn reset(&self, session_id: &str) {
        self.slots
            .insert(session_id.to_string(), ThreadSlot::default());
    }

    pub fn close(&self, session_id: &str) {
        self.slots.remove(session_id);
    }

    /// Slot for a session, created empty when the session is unknown.
    pub fn slot(&self, session_id: &str) -> ThreadSlot {
        self.slots
            .entry(session_id.to_string())
            .or_default()
            .value()
            .clone()
    }

    pub async fn thread_id(&self, session_id: &str) -> Option<String> {
        let slot = self.slots.get(session_id).map(|e| e.value().clone())?;
        let thread_id = slot.lock().await;
        thread_id.clone()
    }

    /// Number of open sessions.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
