//! Main application configuration

use super::{HttpClientConfig, LoggingConfig};
use agentcfg_domain::value_objects::AgentConfig;
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Agent identity, endpoint and local option values
    #[serde(default)]
    pub agent: AgentConfig,

    /// Process logging
    #[serde(default)]
    pub logging: LoggingConfig,

    /// HTTP client used for the configuration endpoint
    #[serde(default)]
    pub http: HttpClientConfig,
}
