use std::sync::Arc;

use crate::agent::interface::AgentService;
use crate::agent::provisioner::AgentProvisioner;
use crate::config::Settings;
use crate::conversations::ConversationProxy;
use crate::foundry_service::FoundryServiceClient;

/// Shared handles for the HTTP handlers. Built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub proxy: Arc<ConversationProxy>,
}

impl AppState {
    /// Connect to the Foundry project and provision the agent.
    pub async fn new(settings: Settings) -> anyhow::Result<Self> {
        let service = Arc::new(FoundryServiceClient::from_settings(&settings));
        Self::with_service(settings, service).await
    }

    /// Provision the agent against an already constructed service client.
    pub async fn with_service(
        settings: Settings,
        service: Arc<dyn AgentService>,
    ) -> anyhow::Result<Self> {
        let agent = AgentProvisioner::provision(&*service, &settings).await?;

        Ok(Self {
            settings: Arc::new(settings),
            proxy: Arc::new(ConversationProxy::new(service, agent)),
        })
    }
}
