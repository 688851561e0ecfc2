use tracing::debug;

use crate::chat::client::ApiClient;
use crate::chat::session_store::SessionStore;
use crate::error::ChatError;

pub const GREETING: &str = "Hello there, I am your assistant. I can answer questions based on the information provided in the knowledge base";

/// One user's chat session against the assistant API.
pub struct ChatSession {
    store: SessionStore,
    client: ApiClient,
    session_id: String,
}

impl ChatSession {
    /// Open a session with no thread id.
    pub fn start(store: SessionStore, client: ApiClient) -> Self {
        let session_id = store.open();
        debug!("Chat session {} started", session_id);
        Self {
            store,
            client,
            session_id,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub async fn thread_id(&self) -> Option<String> {
        self.store.thread_id(&self.session_id).await
    }

    /// Drop the current thread id; the next message opens a new conversation.
    pub fn restart(&self) {
        self.store.reset(&self.session_id);
    }

    /// Forward a message and return the answer text.
    ///
    /// The slot stays locked for the whole round trip. A returned thread id
    /// replaces the stored one; an absent or empty one leaves it untouched.
    pub async fn on_message(&self, text: &str) -> Result<String, ChatError> {
        let slot = self.store.slot(&self.session_id);
        let mut thread_id = slot.lock().await;

        let reply = self
            .client
            .generate_response(text, thread_id.as_deref())
            .await?;

        if let Some(id) = reply.thread_id.filter(|id| !id.is_empty()) {
            *thread_id = Some(id);
        }

        Ok(reply.answer.unwrap_or_default())
    }
}

impl Drop for ChatSession {
    fn drop(&mut self) {
        self.store.close(&self.session_id);
    }
}
