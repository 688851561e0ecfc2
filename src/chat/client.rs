use reqwest::Client;
use serde::Deserialize;

use crate::config::Settings;
use crate::error::ChatError;
use crate::handlers::GenerateRequest;

/// Client for the assistant's `generate_response` endpoint.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    api_url: String,
}

/// Reply as seen by the client; fields the server omits stay empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub thread_id: Option<String>,
}

impl ApiClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.chat_api_url())
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub async fn generate_response(
        &self,
        question: &str,
        thread_id: Option<&str>,
    ) -> Result<ChatReply, ChatError> {
        let request = GenerateRequest {
            question: question.to_string(),
            thread_id: thread_id.map(str::to_string),
        };

        let response = self.client.post(&self.api_url).json(&request).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::Server {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}
