//! Central configuration service
//!
//! Owns the snapshot store, the fetcher and the task that runs it.

use agentcfg_domain::error::Result;
use agentcfg_domain::ports::{SharedCentralConfigTransport, SharedConfigUpdateHook};
use agentcfg_domain::snapshot::LayeredSnapshot;
use agentcfg_domain::value_objects::{AgentConfig, WaitInfo};
use agentcfg_infrastructure::central::{CentralConfigFetcher, ConfigStore, FetcherState};
use agentcfg_infrastructure::config::AppConfig;
use agentcfg_infrastructure::constants::SHUTDOWN_TIMEOUT_SECS;
use agentcfg_infrastructure::http::HttpConfigTransport;
use agentcfg_infrastructure::shutdown::ShutdownCoordinator;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// One process's view of central configuration
pub struct CentralConfigService {
    store: Arc<ConfigStore>,
    fetcher: Option<CentralConfigFetcher>,
    state: watch::Receiver<FetcherState>,
    coordinator: ShutdownCoordinator,
    task: Option<JoinHandle<()>>,
}

impl CentralConfigService {
    /// Build the service with the HTTP transport described by `config`
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let transport = HttpConfigTransport::new(&config.agent, &config.http)?;
        Ok(Self::with_transport(config.agent.clone(), Arc::new(transport)))
    }

    /// Build the service over an arbitrary transport
    pub fn with_transport(agent: AgentConfig, transport: SharedCentralConfigTransport) -> Self {
        let store = Arc::new(ConfigStore::new(agent));
        let fetcher = CentralConfigFetcher::new(Arc::clone(&store), transport);
        let state = fetcher.subscribe_state();
        Self {
            store,
            fetcher: Some(fetcher),
            state,
            coordinator: ShutdownCoordinator::new(),
            task: None,
        }
    }

    pub fn store(&self) -> &Arc<ConfigStore> {
        &self.store
    }

    /// The snapshot to read configuration from right now
    pub fn current(&self) -> Arc<LayeredSnapshot> {
        self.store.current()
    }

    pub fn register_hook(&self, hook: SharedConfigUpdateHook) {
        debug!(hook = hook.name(), "Registering configuration update hook");
        self.store.register_hook(hook);
    }

    pub fn is_enabled(&self) -> bool {
        self.store.base().central_config
    }

    pub fn fetcher_state(&self) -> FetcherState {
        *self.state.borrow()
    }

    /// Receiver following the fetcher's state transitions
    pub fn watch_state(&self) -> watch::Receiver<FetcherState> {
        self.state.clone()
    }

    /// Run a single poll in the foreground
    ///
    /// Returns `None` when central configuration is disabled or the
    /// background task already owns the fetcher.
    pub async fn poll_once(&self) -> Option<WaitInfo> {
        match &self.fetcher {
            Some(fetcher) if fetcher.is_enabled() => Some(fetcher.poll_once().await),
            _ => None,
        }
    }

    /// Start background polling
    ///
    /// Returns `false` if polling is disabled or was already started.
    pub fn start(&mut self) -> bool {
        let Some(fetcher) = self.fetcher.take() else {
            return false;
        };
        self.task = fetcher.start(&self.coordinator);
        self.task.is_some()
    }

    /// Stop background polling and wait for the task to finish
    ///
    /// Returns `false` if the task did not stop in time.
    pub async fn shutdown(mut self) -> bool {
        let clean = self
            .coordinator
            .shutdown(Duration::from_secs(SHUTDOWN_TIMEOUT_SECS))
            .await;
        if clean
            && let Some(task) = self.task.take()
            && let Err(e) = task.await
        {
            warn!(error = %e, "Central configuration task ended abnormally");
        }
        info!(
            etag = %self.store.etag().unwrap_or_default(),
            "Central configuration service stopped"
        );
        clean
    }
}

impl std::fmt::Debug for CentralConfigService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CentralConfigService")
            .field("store", &self.store)
            .field("state", &self.fetcher_state())
            .field("started", &self.task.is_some())
            .finish_non_exhaustive()
    }
}
