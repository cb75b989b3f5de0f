//! HTTP Configuration Transport
//!
//! Sends `GET {server_url}/config/v1/agents?service.name=..` with the held
//! cache identifier as `If-None-Match` and hands the raw response back to
//! the fetcher. Status codes are not interpreted here.

use crate::config::HttpClientConfig;
use crate::constants::ACCEPT_JSON;
use crate::error_ext::ErrorContext;
use agentcfg_domain::constants::{
    CACHE_CONTROL_HEADER, CENTRAL_CONFIG_PATH, ETAG_HEADER, IF_NONE_MATCH_HEADER,
    SERVICE_ENVIRONMENT_QUERY, SERVICE_NAME_QUERY,
};
use agentcfg_domain::error::{Error, Result};
use agentcfg_domain::ports::{CentralConfigTransport, ConfigResponse};
use agentcfg_domain::value_objects::AgentConfig;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap};
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::debug;

/// reqwest-backed [`CentralConfigTransport`]
#[derive(Clone)]
pub struct HttpConfigTransport {
    client: Client,
    url: Url,
    authorization: Option<String>,
}

impl HttpConfigTransport {
    /// Build the transport for `agent`
    ///
    /// Fails if the server URL is not a valid absolute URL or the client
    /// cannot be constructed.
    pub fn new(agent: &AgentConfig, http: &HttpClientConfig) -> Result<Self> {
        let url = endpoint_url(agent)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(http.timeout_secs))
            .connect_timeout(Duration::from_secs(http.connect_timeout_secs))
            .user_agent(http.user_agent.as_str())
            .danger_accept_invalid_certs(!http.verify_server_cert)
            .build()
            .network_context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            url,
            authorization: authorization_header(agent),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl std::fmt::Debug for HttpConfigTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpConfigTransport")
            .field("url", &self.url.as_str())
            .field("authorized", &self.authorization.is_some())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CentralConfigTransport for HttpConfigTransport {
    async fn fetch(&self, etag: Option<&str>) -> Result<ConfigResponse> {
        let mut request = self.client.get(self.url.clone()).header(ACCEPT, ACCEPT_JSON);
        if let Some(etag) = etag {
            request = request.header(IF_NONE_MATCH_HEADER, etag);
        }
        if let Some(authorization) = &self.authorization {
            request = request.header(AUTHORIZATION, authorization);
        }

        debug!(url = %self.url, etag = etag.unwrap_or_default(), "Requesting central configuration");
        let response = request
            .send()
            .await
            .network_context("Central configuration request failed")?;

        let status = response.status().as_u16();
        let etag = header_value(response.headers(), ETAG_HEADER);
        let cache_control = header_value(response.headers(), CACHE_CONTROL_HEADER);
        let bytes = response
            .bytes()
            .await
            .network_context("Failed to read central configuration response body")?;
        // Failure bodies are free text and may not be valid UTF-8
        let body = String::from_utf8_lossy(&bytes).into_owned();

        Ok(ConfigResponse {
            status,
            etag,
            cache_control,
            body,
        })
    }

    fn endpoint(&self) -> String {
        self.url.to_string()
    }
}

/// Configuration endpoint URL for `agent`
///
/// The endpoint path is appended to any path already present in the
/// server URL.
pub fn endpoint_url(agent: &AgentConfig) -> Result<Url> {
    let mut base = Url::parse(&agent.server_url)
        .config_context(format!("Invalid server URL '{}'", agent.server_url))?;
    if base.cannot_be_a_base() {
        return Err(Error::config(format!(
            "Server URL '{}' cannot be used as a base URL",
            agent.server_url
        )));
    }
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    let mut url = base
        .join(CENTRAL_CONFIG_PATH)
        .config_context("Failed to build central configuration URL")?;
    {
        let mut query = url.query_pairs_mut();
        query.clear();
        query.append_pair(SERVICE_NAME_QUERY, &agent.service_name);
        if let Some(environment) = agent.service_environment.as_deref() {
            query.append_pair(SERVICE_ENVIRONMENT_QUERY, environment);
        }
    }
    Ok(url)
}

/// `Authorization` value, the API key winning over the secret token
fn authorization_header(agent: &AgentConfig) -> Option<String> {
    let non_empty = |value: &Option<String>| value.as_deref().filter(|v| !v.is_empty()).map(str::to_string);
    non_empty(&agent.api_key)
        .map(|key| format!("ApiKey {key}"))
        .or_else(|| non_empty(&agent.secret_token).map(|token| format!("Bearer {token}")))
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}
