//! Terminal chat client for the assistant API.

pub mod client;
pub mod session;
pub mod session_store;

pub use client::{ApiClient, ChatReply};
pub use session::{ChatSession, GREETING};
pub use session_store::{SessionStore, ThreadSlot};
