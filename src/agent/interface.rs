//! Agent service interface - the actual agent runs in the remote Foundry project.
//! This module provides the wire types and the client trait the rest of the
//! crate talks to.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ServiceError;

/// Prompt agent definition submitted when creating an agent version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentDefinition {
    pub kind: String,
    pub model: String,
    pub instructions: String,
    pub tools: Vec<AgentTool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AgentTool {
    AzureAiSearch {
        azure_ai_search: AzureAiSearchToolResource,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AzureAiSearchToolResource {
    pub indexes: Vec<SearchIndexResource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchIndexResource {
    pub project_connection_id: String,
    pub index_name: String,
    pub query_type: SearchQueryType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchQueryType {
    Simple,
    Semantic,
    Vector,
    VectorSimpleHybrid,
    VectorSemanticHybrid,
}

/// Handle of a created agent version, held for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentHandle {
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "version_string")]
    pub version: String,
}

/// Versions come back as strings; older previews sent bare numbers.
fn version_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(version) => Ok(version),
        other => Ok(other.to_string()),
    }
}

/// Routes a response through a named agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentReference {
    pub name: String,
    #[serde(rename = "type")]
    pub reference_type: String,
}

impl AgentReference {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reference_type: "agent_reference".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationItem {
    #[serde(rename = "type")]
    pub item_type: String,
    pub role: String,
    pub content: String,
}

impl ConversationItem {
    pub fn user_message(content: impl Into<String>) -> Self {
        Self {
            item_type: "message".to_string(),
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseRequest {
    pub conversation: String,
    pub input: String,
    pub agent: AgentReference,
}

/// Calls made against the remote agent service.
#[async_trait]
pub trait AgentService: Send + Sync {
    /// Create a new version of the named agent. Never deduplicates.
    async fn create_agent_version(
        &self,
        agent_name: &str,
        definition: &AgentDefinition,
    ) -> Result<AgentHandle, ServiceError>;

    /// Create a conversation seeded with the given items.
    async fn create_conversation(
        &self,
        items: Vec<ConversationItem>,
    ) -> Result<Conversation, ServiceError>;

    /// Run one response turn and return the raw response object.
    async fn create_response(&self, request: &ResponseRequest) -> Result<Value, ServiceError>;
}
