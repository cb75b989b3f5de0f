//! HTTP client configuration types

use crate::constants::HTTP_CONNECT_TIMEOUT_SECS;
use agentcfg_domain::constants::REQUEST_TIMEOUT_SECS;
use serde::{Deserialize, Serialize};

/// HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpClientConfig {
    /// Upper bound for one configuration request, in seconds
    pub timeout_secs: u64,

    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,

    /// `User-Agent` header value
    pub user_agent: String,

    /// Reject servers whose TLS certificate does not verify
    pub verify_server_cert: bool,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: HTTP_CONNECT_TIMEOUT_SECS,
            user_agent: format!("agentcfg/{}", env!("CARGO_PKG_VERSION")),
            verify_server_cert: true,
        }
    }
}
