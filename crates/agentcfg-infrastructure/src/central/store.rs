//! Snapshot store
//!
//! Holds the current [`LayeredSnapshot`] behind an atomic pointer. Readers
//! take an `Arc` and keep a consistent view for as long as they hold it.
//! The fetcher is the only writer.

use agentcfg_domain::delta::ConfigurationDelta;
use agentcfg_domain::ports::SharedConfigUpdateHook;
use agentcfg_domain::snapshot::LayeredSnapshot;
use agentcfg_domain::value_objects::AgentConfig;
use arc_swap::ArcSwap;
use dashmap::DashMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{debug, error};

/// Current snapshot plus the hooks to notify when it changes
pub struct ConfigStore {
    base: Arc<AgentConfig>,
    current: ArcSwap<LayeredSnapshot>,
    hooks: DashMap<String, SharedConfigUpdateHook>,
}

impl ConfigStore {
    /// Store whose initial snapshot has no remote overrides
    pub fn new(base: AgentConfig) -> Self {
        let base = Arc::new(base);
        let initial = LayeredSnapshot::from_static(Arc::clone(&base));
        Self {
            base,
            current: ArcSwap::from_pointee(initial),
            hooks: DashMap::new(),
        }
    }

    /// Static configuration
    pub fn base(&self) -> &AgentConfig {
        &self.base
    }

    /// The snapshot readers should use right now
    pub fn current(&self) -> Arc<LayeredSnapshot> {
        self.current.load_full()
    }

    /// Cache identifier to send with the next request
    ///
    /// Read from the current snapshot so it always matches the published
    /// values.
    pub fn etag(&self) -> Option<String> {
        self.current.load().etag().map(str::to_string)
    }

    /// Replace the current snapshot with `delta` layered over the static
    /// configuration, then run every registered hook
    ///
    /// A hook that panics is logged and skipped; the snapshot stays
    /// published and the remaining hooks still run.
    pub fn publish(&self, delta: ConfigurationDelta) -> Arc<LayeredSnapshot> {
        let next = Arc::new(LayeredSnapshot::layered(Arc::clone(&self.base), delta));
        let previous = self.current.swap(Arc::clone(&next));

        // Collected first so a hook may (un)register hooks without deadlocking
        let hooks: Vec<SharedConfigUpdateHook> = self
            .hooks
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();
        for hook in hooks {
            debug!(hook = hook.name(), "Running configuration update hook");
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| hook.on_update(&previous, &next)));
            if outcome.is_err() {
                error!(hook = hook.name(), "Configuration update hook panicked; continuing");
            }
        }
        next
    }

    /// Register a hook under its name, replacing one with the same name
    pub fn register_hook(&self, hook: SharedConfigUpdateHook) -> Option<SharedConfigUpdateHook> {
        self.hooks.insert(hook.name().to_string(), hook)
    }

    pub fn unregister_hook(&self, name: &str) -> Option<SharedConfigUpdateHook> {
        self.hooks.remove(name).map(|(_, hook)| hook)
    }

    /// Names of the registered hooks, sorted
    pub fn hook_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.hooks.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }
}

impl std::fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigStore")
            .field("etag", &self.etag())
            .field("hooks", &self.hook_names())
            .finish_non_exhaustive()
    }
}
