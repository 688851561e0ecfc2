use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use crate::agent::interface::{
    AgentDefinition, AgentHandle, AgentService, Conversation, ConversationItem, ResponseRequest,
};
use crate::config::Settings;
use crate::credential::{self, TokenProvider};
use crate::error::ServiceError;

/// HTTP client for the Foundry project's agent, conversation and response APIs.
#[derive(Clone)]
pub struct FoundryServiceClient {
    client: Client,
    project_endpoint: String,
    api_version: String,
    credential: Arc<dyn TokenProvider>,
}

impl FoundryServiceClient {
    pub fn new(
        project_endpoint: String,
        api_version: String,
        credential: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            client: Client::new(),
            project_endpoint,
            api_version,
            credential,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.project_endpoint(),
            settings.api_version.clone(),
            credential::from_settings(settings),
        )
    }

    pub fn project_endpoint(&self) -> &str {
        &self.project_endpoint
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ServiceError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.project_endpoint, path);
        let token = self.credential.token().await?;

        debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .query(&[("api-version", self.api_version.as_str())])
            .bearer_auth(token)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(ServiceError::from_status(status.as_u16(), &text));
        }

        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl AgentService for FoundryServiceClient {
    async fn create_agent_version(
        &self,
        agent_name: &str,
        definition: &AgentDefinition,
    ) -> Result<AgentHandle, ServiceError> {
        let body = json!({ "definition": definition });
        self.post(&format!("agents/{}/versions", agent_name), &body)
            .await
    }

    async fn create_conversation(
        &self,
        items: Vec<ConversationItem>,
    ) -> Result<Conversation, ServiceError> {
        let body = json!({ "items": items });
        self.post("openai/conversations", &body).await
    }

    async fn create_response(&self, request: &ResponseRequest) -> Result<Value, ServiceError> {
        self.post("openai/responses", request).await
    }
}
