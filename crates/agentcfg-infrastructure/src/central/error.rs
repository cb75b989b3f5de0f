//! Fetch error classification
//!
//! Every failed poll maps to one variant. Variants carrying a response
//! also carry the wait interval derived from it, so the loop honours the
//! server's `Cache-Control` even on errors.

use agentcfg_domain::value_objects::WaitInfo;
use std::time::Duration;
use thiserror::Error;
use tracing::Level;

/// Failure of one configuration poll
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server does not offer central configuration (403 or 404)
    #[error("central configuration is not supported by the server (HTTP {status})")]
    Unsupported { status: u16, wait: WaitInfo },

    /// The server considered the request malformed (400)
    #[error("configuration request was rejected as malformed (HTTP 400): {body}")]
    BadRequest { body: String, wait: WaitInfo },

    /// The server could not reach its configuration backend (503)
    #[error("configuration endpoint is unavailable (HTTP 503): {body}")]
    Unavailable { body: String, wait: WaitInfo },

    /// Any other non-success status
    #[error("unexpected HTTP status {status} from configuration endpoint: {body}")]
    UnexpectedStatus {
        status: u16,
        body: String,
        wait: WaitInfo,
    },

    /// A success response without a required header
    #[error("configuration response is missing the {header} header")]
    MissingHeader {
        header: &'static str,
        wait: WaitInfo,
    },

    /// A success response whose body is not a flat JSON object of strings
    #[error("configuration response body is not a JSON object of strings: {source}")]
    InvalidBody {
        #[source]
        source: serde_json::Error,
        wait: WaitInfo,
    },

    /// No response was received
    #[error("configuration request failed: {source}")]
    Transport {
        #[source]
        source: agentcfg_domain::Error,
    },

    /// The request did not finish in time
    #[error("configuration request timed out after {after:?}")]
    Timeout { after: Duration },
}

impl FetchError {
    /// Level at which this failure is logged
    ///
    /// A server without central configuration is an expected setup and
    /// only logged at debug.
    pub fn severity(&self) -> Level {
        match self {
            Self::Unsupported { .. } => Level::DEBUG,
            _ => Level::ERROR,
        }
    }

    /// Wait interval derived from the response, if one was received
    pub fn wait_info(&self) -> Option<&WaitInfo> {
        match self {
            Self::Unsupported { wait, .. }
            | Self::BadRequest { wait, .. }
            | Self::Unavailable { wait, .. }
            | Self::UnexpectedStatus { wait, .. }
            | Self::MissingHeader { wait, .. }
            | Self::InvalidBody { wait, .. } => Some(wait),
            Self::Transport { .. } | Self::Timeout { .. } => None,
        }
    }

    /// HTTP status of the response, if one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unsupported { status, .. } | Self::UnexpectedStatus { status, .. } => {
                Some(*status)
            }
            Self::BadRequest { .. } => Some(400),
            Self::Unavailable { .. } => Some(503),
            _ => None,
        }
    }
}
