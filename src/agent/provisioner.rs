use tracing::info;

use crate::agent::definition::{build_definition, AGENT_NAME};
use crate::agent::interface::{AgentHandle, AgentService};
use crate::config::Settings;
use crate::error::ServiceError;

/// Registers the assistant agent with the remote service.
pub struct AgentProvisioner;

impl AgentProvisioner {
    /// Create a new version of the assistant agent.
    ///
    /// There is no lookup of existing versions: every call, and therefore every
    /// process start, produces a fresh version on the remote side.
    ///
    /// # Arguments
    /// * `service` - Remote agent service client
    /// * `settings` - Resolved settings supplying the model and search binding
    pub async fn provision(
        service: &dyn AgentService,
        settings: &Settings,
    ) -> Result<AgentHandle, ServiceError> {
        info!("Provisioning agent: {}", AGENT_NAME);

        let definition = build_definition(settings);
        let agent = service.create_agent_version(AGENT_NAME, &definition).await?;

        info!(
            "Agent created (id: {}, name: {}, version: {})",
            agent.id, agent.name, agent.version
        );
        Ok(agent)
    }
}
