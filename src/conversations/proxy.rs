use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::agent::interface::{
    AgentHandle, AgentReference, AgentService, ConversationItem, ResponseRequest,
};
use crate::conversations::types::{Answer, ChatTurn};
use crate::error::ServiceError;

/// Maps a client-held thread id onto a remote conversation.
pub struct ConversationProxy {
    service: Arc<dyn AgentService>,
    agent: AgentHandle,
}

impl ConversationProxy {
    pub fn new(service: Arc<dyn AgentService>, agent: AgentHandle) -> Self {
        Self { service, agent }
    }

    pub fn agent(&self) -> &AgentHandle {
        &self.agent
    }

    /// Send a question to the agent.
    ///
    /// With a thread id the question is appended to that conversation and the
    /// id is returned unchanged. Without one (or with an empty one) a new
    /// conversation is created seeded with the question, and an empty-input
    /// turn is run against it to trigger generation.
    pub async fn generate(
        &self,
        question: &str,
        thread_id: Option<&str>,
    ) -> Result<ChatTurn, ServiceError> {
        let agent = AgentReference::new(&self.agent.name);

        let (response, thread_id) = match thread_id.filter(|id| !id.is_empty()) {
            Some(thread_id) => {
                debug!("Continuing conversation {}", thread_id);
                let request = ResponseRequest {
                    conversation: thread_id.to_string(),
                    input: question.to_string(),
                    agent,
                };
                let response = self.service.create_response(&request).await?;
                (response, thread_id.to_string())
            }
            None => {
                let conversation = self
                    .service
                    .create_conversation(vec![ConversationItem::user_message(question)])
                    .await?;
                info!("Created conversation {}", conversation.id);

                let request = ResponseRequest {
                    conversation: conversation.id.clone(),
                    input: String::new(),
                    agent,
                };
                let response = self.service.create_response(&request).await?;
                (response, conversation.id)
            }
        };

        let answer = Answer::from_response(response);
        match &answer {
            Answer::Text(text) => debug!("Assistant response: {}", text),
            Answer::Raw(_) => warn!("Response for {} carried no output text", thread_id),
        }

        Ok(ChatTurn {
            question: question.to_string(),
            answer,
            thread_id,
        })
    }
}
