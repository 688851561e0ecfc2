use thiserror::Error;

/// Errors raised while talking to the remote agent service.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Remote service error (status {status}): {body}")]
    Remote { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Credential error: {0}")]
    Credential(String),
}

impl ServiceError {
    /// Map a non-success HTTP status and body onto the error taxonomy.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 | 403 => ServiceError::Authentication(body.to_string()),
            _ => ServiceError::Remote {
                status,
                body: body.to_string(),
            },
        }
    }

    /// HTTP status reported by the remote service, if the failure came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ServiceError::Remote { status, .. } => Some(*status),
            ServiceError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Errors raised by the chat client when calling the HTTP endpoint.
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Could not reach the assistant API: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Assistant API returned {status}: {body}")]
    Server { status: u16, body: String },
}
