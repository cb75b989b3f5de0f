//! Static agent configuration
//!
//! Loaded once at startup and never mutated afterwards. The `dynamic`
//! section holds the local value of every option the central
//! configuration endpoint may override.

use crate::constants::{DEFAULT_SERVER_URL, DEFAULT_SERVICE_NAME};
use crate::options::DynamicSettings;
use serde::{Deserialize, Serialize};

/// Static configuration of the agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Service name sent to the configuration endpoint
    pub service_name: String,

    /// Optional service environment sent to the configuration endpoint
    pub service_environment: Option<String>,

    /// Base URL of the management server
    pub server_url: String,

    /// Secret token, sent as a bearer token
    pub secret_token: Option<String>,

    /// API key, takes precedence over the secret token
    pub api_key: Option<String>,

    /// Enables polling of the central configuration endpoint
    ///
    /// Checked once when the fetcher is constructed.
    pub central_config: bool,

    /// Local values of the dynamic options
    pub dynamic: DynamicSettings,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            service_environment: None,
            server_url: DEFAULT_SERVER_URL.to_string(),
            secret_token: None,
            api_key: None,
            central_config: true,
            dynamic: DynamicSettings::default(),
        }
    }
}
