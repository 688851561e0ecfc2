pub mod agent;
pub mod chat;
pub mod config;
pub mod conversations;
pub mod credential;
pub mod error;
pub mod foundry_service;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::Settings;
pub use error::{ChatError, ServiceError};
pub use state::AppState;
