//! Central configuration fetcher
//!
//! One long-lived task per process. Each iteration sends a conditional
//! request, parses the response, publishes a new snapshot when the server
//! sent one, then sleeps for the interval the server asked for.
//!
//! ```text
//! Idle -> Requesting -> Parsing -> Waiting -> Requesting -> ...
//!                  any state --cancel--> Stopped
//! ```

use super::error::FetchError;
use super::parser::{ParsedResponse, ResponseParser};
use super::store::ConfigStore;
use crate::constants::FETCHER_TASK_NAME;
use crate::shutdown::ShutdownCoordinator;
use crate::utils::TimedOperation;
use agentcfg_domain::constants::REQUEST_TIMEOUT_SECS;
use agentcfg_domain::ports::SharedCentralConfigTransport;
use agentcfg_domain::value_objects::WaitInfo;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{Level, debug, error, info, trace, warn};

/// Lifecycle state of the fetcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetcherState {
    /// Constructed, not polling; a disabled fetcher never leaves this state
    Idle,
    /// A request is in flight
    Requesting,
    /// A response is being parsed and applied
    Parsing,
    /// Sleeping until the next request
    Waiting,
    /// Cancelled, terminal
    Stopped,
}

/// Polls the configuration endpoint and publishes snapshots
pub struct CentralConfigFetcher {
    store: Arc<ConfigStore>,
    transport: SharedCentralConfigTransport,
    parser: ResponseParser,
    enabled: bool,
    request_timeout: Duration,
    state: watch::Sender<FetcherState>,
}

impl CentralConfigFetcher {
    /// Create a fetcher for `store`
    ///
    /// Whether the fetcher polls is decided here from the store's static
    /// configuration and is not re-checked later.
    pub fn new(store: Arc<ConfigStore>, transport: SharedCentralConfigTransport) -> Self {
        let enabled = store.base().central_config;
        if !enabled {
            info!("Central configuration is disabled, the fetcher will not poll");
        }
        let (state, _) = watch::channel(FetcherState::Idle);
        Self {
            store,
            transport,
            parser: ResponseParser::default(),
            enabled,
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            state,
        }
    }

    /// Override the upper bound for one request
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn store(&self) -> &Arc<ConfigStore> {
        &self.store
    }

    pub fn state(&self) -> FetcherState {
        *self.state.borrow()
    }

    /// Receiver following every state transition
    pub fn subscribe_state(&self) -> watch::Receiver<FetcherState> {
        self.state.subscribe()
    }

    fn set_state(&self, state: FetcherState) {
        trace!(?state, "Fetcher state change");
        self.state.send_replace(state);
    }

    /// Run one request/parse/apply iteration
    ///
    /// Never fails: every error is logged and turned into the wait before
    /// the next attempt.
    pub async fn poll_once(&self) -> WaitInfo {
        let etag = self.store.etag();
        self.set_state(FetcherState::Requesting);
        let timer = TimedOperation::start();

        let fetched =
            tokio::time::timeout(self.request_timeout, self.transport.fetch(etag.as_deref())).await;
        let result = match fetched {
            Ok(Ok(response)) => {
                debug!(
                    status = response.status,
                    elapsed_ms = timer.elapsed_ms(),
                    "Received central configuration response"
                );
                self.set_state(FetcherState::Parsing);
                self.parser.parse(&response)
            }
            Ok(Err(source)) => Err(FetchError::Transport { source }),
            Err(_) => Err(FetchError::Timeout {
                after: self.request_timeout,
            }),
        };

        self.apply(result)
    }

    fn apply(&self, result: Result<ParsedResponse, FetchError>) -> WaitInfo {
        match result {
            Ok(ParsedResponse {
                delta: Some(delta),
                wait,
            }) => {
                let overrides = delta.overrides().len();
                let snapshot = self.store.publish(delta);
                info!(
                    etag = snapshot.etag().unwrap_or_default(),
                    overrides,
                    "Applied central configuration"
                );
                wait
            }
            Ok(ParsedResponse { delta: None, wait }) => {
                debug!("Central configuration not modified");
                wait
            }
            Err(err) => {
                let wait = err
                    .wait_info()
                    .cloned()
                    .unwrap_or_else(|| WaitInfo::default_wait("no response from server"));
                log_fetch_error(&err, &wait);
                wait
            }
        }
    }

    /// Poll until `token` is cancelled
    ///
    /// Cancellation is observed both during a request and during the sleep
    /// between requests. A disabled fetcher returns immediately and stays
    /// `Idle`.
    pub async fn run(self, token: CancellationToken) {
        if !self.enabled {
            debug!("Central configuration disabled, not polling");
            return;
        }
        info!(endpoint = %self.transport.endpoint(), "Starting central configuration polling");

        loop {
            let wait = tokio::select! {
                biased;
                () = token.cancelled() => break,
                wait = self.poll_once() => wait,
            };

            self.set_state(FetcherState::Waiting);
            info!(wait = %wait, "Next central configuration request scheduled");

            tokio::select! {
                biased;
                () = token.cancelled() => break,
                () = tokio::time::sleep(wait.interval) => {}
            }
        }

        self.set_state(FetcherState::Stopped);
        info!("Central configuration polling stopped");
    }

    /// Spawn [`run`](Self::run) on the coordinator
    ///
    /// Returns `None`, spawning nothing, when the fetcher is disabled.
    pub fn start(self, coordinator: &ShutdownCoordinator) -> Option<JoinHandle<()>> {
        if !self.enabled {
            return None;
        }
        Some(coordinator.spawn_cancellable(FETCHER_TASK_NAME, |token| self.run(token)))
    }
}

impl std::fmt::Debug for CentralConfigFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CentralConfigFetcher")
            .field("endpoint", &self.transport.endpoint())
            .field("enabled", &self.enabled)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

fn log_fetch_error(err: &FetchError, wait: &WaitInfo) {
    match err.severity() {
        Level::DEBUG => debug!(error = %err, wait = %wait, "Central configuration fetch failed"),
        Level::WARN => warn!(error = %err, wait = %wait, "Central configuration fetch failed"),
        _ => error!(error = %err, wait = %wait, "Central configuration fetch failed"),
    }
}
