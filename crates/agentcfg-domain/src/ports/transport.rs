//! Configuration Transport Interface
//!
//! The fetcher depends on this port rather than on an HTTP client so the
//! polling loop can be driven by any transport.

use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Raw response of the configuration endpoint
///
/// Only the pieces the response parser looks at are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigResponse {
    /// HTTP status code
    pub status: u16,
    /// `ETag` header, if present
    pub etag: Option<String>,
    /// `Cache-Control` header, if present
    pub cache_control: Option<String>,
    /// Response body, possibly empty
    pub body: String,
}

impl ConfigResponse {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            ..Default::default()
        }
    }

    pub fn with_etag<S: Into<String>>(mut self, etag: S) -> Self {
        self.etag = Some(etag.into());
        self
    }

    pub fn with_cache_control<S: Into<String>>(mut self, cache_control: S) -> Self {
        self.cache_control = Some(cache_control.into());
        self
    }

    pub fn with_body<S: Into<String>>(mut self, body: S) -> Self {
        self.body = body.into();
        self
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Central Configuration Transport Interface
///
/// # Example
///
/// ```no_run
/// use agentcfg_domain::ports::CentralConfigTransport;
///
/// async fn poll(transport: &dyn CentralConfigTransport, etag: Option<&str>) -> agentcfg_domain::Result<()> {
///     let response = transport.fetch(etag).await?;
///     println!("{} -> {}", transport.endpoint(), response.status);
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait CentralConfigTransport: Send + Sync {
    /// Issue one request, conditional on `etag` when one is held
    ///
    /// Returns `Err` only when no response was received at all.
    async fn fetch(&self, etag: Option<&str>) -> Result<ConfigResponse>;

    /// Endpoint description for log messages
    fn endpoint(&self) -> String;
}

/// Shared transport handle
pub type SharedCentralConfigTransport = Arc<dyn CentralConfigTransport>;
