use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use anyhow::Result;

const SEARCH_CONNECTION_NAME: &str = "search-service-connection";
const LOCAL_CHAT_API_URL: &str = "http://localhost:8000/api/generate_response";

/// Settings resolved from the process environment.
///
/// Every field falls back to an empty string (or a fixed default) when the
/// variable is unset. Nothing is validated here: a missing or malformed value
/// only shows up once the remote service rejects the request built from it.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(rename = "azure_location", default)]
    pub location: String,
    #[serde(rename = "azure_subscription_id", default)]
    pub subscription_id: String,
    #[serde(rename = "azure_resource_group", default)]
    pub resource_group: String,
    #[serde(rename = "azure_ai_foundry_project_name", default)]
    pub project_name: String,
    #[serde(rename = "azure_search_index", default)]
    pub search_index: String,
    #[serde(rename = "azure_openai_endpoint", default)]
    pub openai_endpoint: String,
    #[serde(rename = "azure_openai_chat_deployment", default = "default_chat_deployment")]
    pub chat_deployment: String,
    #[serde(rename = "azure_ai_api_version", default = "default_api_version")]
    pub api_version: String,
    #[serde(rename = "azure_ai_access_token", default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub environment: String,
    #[serde(rename = "api_host", default = "default_host")]
    pub host: String,
    #[serde(rename = "api_port", default = "default_port")]
    pub port: u16,
}

fn default_chat_deployment() -> String {
    "gpt-4.1-mini".to_string()
}

fn default_api_version() -> String {
    "2025-11-15-preview".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Settings {
    /// Load `.env` when present, then read the process environment.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("Loaded environment overrides from {:?}", path);
        }
        Self::from_environment(config::Environment::default())
    }

    /// Read settings from an explicit environment source.
    ///
    /// Variable names are matched case-insensitively (`AZURE_LOCATION` fills
    /// `location`).
    pub fn from_environment(source: config::Environment) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    /// Project endpoint of the form `{endpoint}/api/projects/{project}`.
    pub fn project_endpoint(&self) -> String {
        let base_endpoint = self
            .openai_endpoint
            .strip_suffix('/')
            .unwrap_or(&self.openai_endpoint);
        format!("{}/api/projects/{}", base_endpoint, self.project_name)
    }

    /// Account name taken from the first host label of the endpoint,
    /// e.g. `foo` for `https://foo.cognitiveservices.azure.com/`.
    pub fn account_name(&self) -> &str {
        let host = self
            .openai_endpoint
            .strip_prefix("https://")
            .unwrap_or(&self.openai_endpoint);
        host.split('.').next().unwrap_or_default()
    }

    /// Resource path of the search connection registered on the project.
    pub fn search_connection_id(&self) -> String {
        format!(
            "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.CognitiveServices/accounts/{}/projects/{}/connections/{}",
            self.subscription_id,
            self.resource_group,
            self.account_name(),
            self.project_name,
            SEARCH_CONNECTION_NAME,
        )
    }

    /// Connection string used by older hub-based projects.
    pub fn hub_connection_string(&self) -> String {
        format!(
            "{}.api.azureml.ms;{};{};{}",
            self.location, self.subscription_id, self.resource_group, self.project_name
        )
    }

    pub fn openai_endpoint(&self) -> &str {
        &self.openai_endpoint
    }

    pub fn is_azure(&self) -> bool {
        self.environment == "azure"
    }

    /// URL the chat client posts questions to.
    pub fn chat_api_url(&self) -> String {
        if self.is_azure() {
            let base_url = self.api_url.as_deref().unwrap_or_default();
            format!("{}/api/generate_response", base_url.trim_end_matches('/'))
        } else {
            LOCAL_CHAT_API_URL.to_string()
        }
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref().filter(|token| !token.is_empty())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid API_HOST {:?}: {}", self.host, e))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            location: String::new(),
            subscription_id: String::new(),
            resource_group: String::new(),
            project_name: String::new(),
            search_index: String::new(),
            openai_endpoint: String::new(),
            chat_deployment: default_chat_deployment(),
            api_version: default_api_version(),
            access_token: None,
            api_url: None,
            environment: String::new(),
            host: default_host(),
            port: default_port(),
        }
    }
}
