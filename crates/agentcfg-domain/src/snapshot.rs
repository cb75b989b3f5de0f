//! Layered configuration snapshot
//!
//! Composes the static configuration with at most one delta. Every field
//! resolves to the delta's value when present, else to the static value.
//! A snapshot is immutable; publishing new values means building a new
//! snapshot, so a reader holding an old one keeps a consistent view.
//!
//! The per-field resolvers (`transaction_sample_rate()`, `log_level()`,
//! ...) are generated alongside the option registry.

use crate::constants::LOCAL_PROVENANCE;
use crate::delta::ConfigurationDelta;
use crate::options::{DynamicOption, DynamicOverrides, DynamicSettings, OptionValue};
use crate::value_objects::AgentConfig;
use std::sync::Arc;

/// Static configuration plus the current remote overlay
#[derive(Debug, Clone)]
pub struct LayeredSnapshot {
    base: Arc<AgentConfig>,
    delta: Option<Arc<ConfigurationDelta>>,
}

impl LayeredSnapshot {
    /// Snapshot without remote overrides
    pub fn from_static(base: Arc<AgentConfig>) -> Self {
        Self { base, delta: None }
    }

    /// Snapshot layering `delta` over `base`
    pub fn layered(base: Arc<AgentConfig>, delta: ConfigurationDelta) -> Self {
        Self {
            base,
            delta: Some(Arc::new(delta)),
        }
    }

    /// Static configuration
    pub fn base(&self) -> &AgentConfig {
        &self.base
    }

    pub fn base_arc(&self) -> Arc<AgentConfig> {
        Arc::clone(&self.base)
    }

    pub fn delta(&self) -> Option<&ConfigurationDelta> {
        self.delta.as_deref()
    }

    pub fn overrides(&self) -> Option<&DynamicOverrides> {
        self.delta().map(ConfigurationDelta::overrides)
    }

    /// Cache identifier of the delta, `None` before the first successful fetch
    pub fn etag(&self) -> Option<&str> {
        self.delta().map(ConfigurationDelta::etag)
    }

    pub fn provenance(&self) -> &str {
        self.delta()
            .map_or(LOCAL_PROVENANCE, ConfigurationDelta::provenance)
    }

    pub fn service_name(&self) -> &str {
        &self.base.service_name
    }

    pub fn service_environment(&self) -> Option<&str> {
        self.base.service_environment.as_deref()
    }

    /// Whether the value of `option` comes from the delta
    pub fn is_overridden(&self, option: DynamicOption) -> bool {
        self.overrides()
            .is_some_and(|overrides| overrides.contains(option))
    }

    /// Resolved value of one option
    pub fn resolve(&self, option: DynamicOption) -> OptionValue {
        self.overrides()
            .and_then(|overrides| overrides.get(option))
            .unwrap_or_else(|| self.base.dynamic.get(option))
    }

    /// Resolved value of every option
    pub fn effective(&self) -> DynamicSettings {
        match self.overrides() {
            Some(overrides) => overrides.layered_over(&self.base.dynamic),
            None => self.base.dynamic.clone(),
        }
    }

    /// Options whose resolved value differs between the two snapshots
    pub fn changed_options(&self, other: &LayeredSnapshot) -> Vec<DynamicOption> {
        DynamicOption::ALL
            .iter()
            .copied()
            .filter(|option| self.resolve(*option) != other.resolve(*option))
            .collect()
    }
}
