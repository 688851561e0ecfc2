use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::process::Command;
use tracing::debug;

use crate::config::Settings;
use crate::error::ServiceError;

/// Token audience for the Foundry agent service.
pub const FOUNDRY_RESOURCE: &str = "https://ai.azure.com";

/// Source of bearer tokens for the remote agent service.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn token(&self) -> Result<String, ServiceError>;
}

/// A token supplied up front, e.g. through `AZURE_AI_ACCESS_TOKEN`.
pub struct StaticToken {
    token: String,
}

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }
}

#[async_trait]
impl TokenProvider for StaticToken {
    async fn token(&self) -> Result<String, ServiceError> {
        Ok(self.token.clone())
    }
}

/// Asks the signed-in Azure CLI for a token on every call.
pub struct AzureCliToken {
    resource: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CliAccessToken {
    access_token: String,
}

impl AzureCliToken {
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
        }
    }
}

#[async_trait]
impl TokenProvider for AzureCliToken {
    async fn token(&self) -> Result<String, ServiceError> {
        debug!("Requesting access token from Azure CLI for {}", self.resource);
        let output = Command::new("az")
            .args([
                "account",
                "get-access-token",
                "--resource",
                self.resource.as_str(),
                "--output",
                "json",
            ])
            .output()
            .await
            .map_err(|e| ServiceError::Credential(format!("failed to run az: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ServiceError::Credential(stderr.trim().to_string()));
        }

        let parsed: CliAccessToken = serde_json::from_slice(&output.stdout)?;
        Ok(parsed.access_token)
    }
}

/// Static token when one is configured, otherwise the Azure CLI.
pub fn from_settings(settings: &Settings) -> Arc<dyn TokenProvider> {
    match settings.access_token() {
        Some(token) => Arc::new(StaticToken::new(token)),
        None => Arc::new(AzureCliToken::new(FOUNDRY_RESOURCE)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_token_is_returned_verbatim() {
        let provider = StaticToken::new("abc");
        assert_eq!(provider.token().await.unwrap(), "abc");
    }

    #[tokio::test]
    async fn configured_token_wins_over_cli() {
        let settings = Settings {
            access_token: Some("from-env".to_string()),
            ..Settings::default()
        };
        let provider = from_settings(&settings);
        assert_eq!(provider.token().await.unwrap(), "from-env");
    }

    #[test]
    fn cli_output_is_parsed() {
        let raw = br#"{"accessToken":"tok","expiresOn":"2026-01-01 00:00:00.000000","tokenType":"Bearer"}"#;
        let parsed: CliAccessToken = serde_json::from_slice(raw).unwrap();
        assert_eq!(parsed.access_token, "tok");
    }
}
