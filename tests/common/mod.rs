//! Shared test helpers and an in-memory agent service.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use product_assistant::agent::{
    AgentDefinition, AgentHandle, AgentService, Conversation, ConversationItem, ResponseRequest,
};
use product_assistant::{ServiceError, Settings};

/// A call observed by [`MockAgentService`].
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceCall {
    CreateAgentVersion {
        name: String,
        definition: AgentDefinition,
    },
    CreateConversation {
        items: Vec<ConversationItem>,
    },
    CreateResponse(ResponseRequest),
}

/// Agent service double that records calls and returns canned responses.
pub struct MockAgentService {
    calls: Mutex<Vec<ServiceCall>>,
    responses: Mutex<VecDeque<Value>>,
    versions: AtomicU32,
    conversations: AtomicU32,
    failure: Mutex<Option<u16>>,
}

impl MockAgentService {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            responses: Mutex::new(VecDeque::new()),
            versions: AtomicU32::new(0),
            conversations: AtomicU32::new(0),
            failure: Mutex::new(None),
        }
    }

    /// Queue a response whose single message carries `text`.
    pub fn queue_answer(&self, text: &str) {
        self.queue_response(message_response(text));
    }

    pub fn queue_response(&self, response: Value) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// Make every following conversation/response call fail with `status`.
    pub fn fail_with(&self, status: u16) {
        *self.failure.lock().unwrap() = Some(status);
    }

    pub fn calls(&self) -> Vec<ServiceCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn conversations_created(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, ServiceCall::CreateConversation { .. }))
            .count()
    }

    pub fn response_requests(&self) -> Vec<ResponseRequest> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                ServiceCall::CreateResponse(request) => Some(request),
                _ => None,
            })
            .collect()
    }

    fn check_failure(&self) -> Result<(), ServiceError> {
        match *self.failure.lock().unwrap() {
            Some(status) => Err(ServiceError::from_status(status, "mock failure")),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AgentService for MockAgentService {
    async fn create_agent_version(
        &self,
        agent_name: &str,
        definition: &AgentDefinition,
    ) -> Result<AgentHandle, ServiceError> {
        self.calls.lock().unwrap().push(ServiceCall::CreateAgentVersion {
            name: agent_name.to_string(),
            definition: definition.clone(),
        });
        let version = self.versions.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(AgentHandle {
            id: format!("{}:{}", agent_name, version),
            name: agent_name.to_string(),
            version: version.to_string(),
        })
    }

    async fn create_conversation(
        &self,
        items: Vec<ConversationItem>,
    ) -> Result<Conversation, ServiceError> {
        self.check_failure()?;
        self.calls
            .lock()
            .unwrap()
            .push(ServiceCall::CreateConversation { items });
        let n = self.conversations.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(Conversation {
            id: format!("conv_{}", n),
        })
    }

    async fn create_response(&self, request: &ResponseRequest) -> Result<Value, ServiceError> {
        self.check_failure()?;
        self.calls
            .lock()
            .unwrap()
            .push(ServiceCall::CreateResponse(request.clone()));
        let response = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| message_response("Mock answer"));
        Ok(response)
    }
}

pub fn message_response(text: &str) -> Value {
    json!({
        "id": "resp_mock",
        "object": "response",
        "status": "completed",
        "output": [{
            "type": "message",
            "role": "assistant",
            "content": [{"type": "output_text", "text": text, "annotations": []}]
        }]
    })
}

pub fn test_settings() -> Settings {
    Settings {
        location: "eastus".to_string(),
        subscription_id: "S".to_string(),
        resource_group: "R".to_string(),
        project_name: "bar".to_string(),
        search_index: "products-index".to_string(),
        openai_endpoint: "https://foo.cognitiveservices.azure.com/".to_string(),
        access_token: Some("test-token".to_string()),
        ..Settings::default()
    }
}
