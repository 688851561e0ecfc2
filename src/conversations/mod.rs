pub mod proxy;
pub mod types;

pub use proxy::ConversationProxy;
pub use types::{Answer, ChatTurn};
