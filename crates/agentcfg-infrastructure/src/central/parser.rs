//! Response parser
//!
//! Classifies one endpoint response. The wait interval is computed first
//! so that every outcome, including errors, carries one.

use super::cache_control::wait_info_for;
use super::error::FetchError;
use agentcfg_domain::constants::ETAG_HEADER;
use agentcfg_domain::delta::ConfigurationDelta;
use agentcfg_domain::options::OptionRegistry;
use agentcfg_domain::ports::ConfigResponse;
use agentcfg_domain::value_objects::WaitInfo;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Successful outcome of one response
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedResponse {
    /// New delta, `None` when the server answered "not modified"
    pub delta: Option<ConfigurationDelta>,
    /// How long to wait before the next request
    pub wait: WaitInfo,
}

/// Turns endpoint responses into deltas
#[derive(Debug, Clone, Copy)]
pub struct ResponseParser {
    registry: &'static OptionRegistry,
}

impl ResponseParser {
    pub fn new(registry: &'static OptionRegistry) -> Self {
        Self { registry }
    }

    /// Parse one response
    ///
    /// - 304 yields no delta and the current snapshot stays as it is.
    /// - 2xx must carry an `ETag` and a flat JSON object of strings.
    ///   Keys unknown to the registry and values failing their parser are
    ///   logged and dropped; the rest form the delta.
    /// - Every other status is an error carrying the wait interval.
    pub fn parse(&self, response: &ConfigResponse) -> Result<ParsedResponse, FetchError> {
        let wait = wait_info_for(response);

        match response.status {
            304 => return Ok(ParsedResponse { delta: None, wait }),
            status if (200..300).contains(&status) => {}
            status @ (403 | 404) => return Err(FetchError::Unsupported { status, wait }),
            400 => {
                return Err(FetchError::BadRequest {
                    body: response.body.clone(),
                    wait,
                });
            }
            503 => {
                return Err(FetchError::Unavailable {
                    body: response.body.clone(),
                    wait,
                });
            }
            status => {
                return Err(FetchError::UnexpectedStatus {
                    status,
                    body: response.body.clone(),
                    wait,
                });
            }
        }

        let Some(etag) = response.etag.as_deref().filter(|etag| !etag.is_empty()) else {
            return Err(FetchError::MissingHeader {
                header: ETAG_HEADER,
                wait,
            });
        };

        let payload: HashMap<String, String> = match serde_json::from_str(&response.body) {
            Ok(payload) => payload,
            Err(source) => return Err(FetchError::InvalidBody { source, wait }),
        };

        let parsed = self.registry.parse_payload(&payload);
        for rejected in &parsed.rejected {
            warn!(
                key = %rejected.key,
                value = %rejected.value,
                reason = %rejected.reason,
                "Ignoring invalid central configuration value"
            );
        }
        if !parsed.unknown_keys.is_empty() {
            warn!(
                keys = %parsed.unknown_keys.join(", "),
                "Central configuration contains keys that cannot be changed at runtime"
            );
        }
        debug!(
            etag,
            applied = parsed.overrides.len(),
            rejected = parsed.rejected.len(),
            "Parsed central configuration"
        );

        Ok(ParsedResponse {
            delta: Some(ConfigurationDelta::new(parsed.overrides, etag)),
            wait,
        })
    }
}

impl Default for ResponseParser {
    fn default() -> Self {
        Self::new(OptionRegistry::global())
    }
}
