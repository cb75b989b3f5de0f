//! # agentcfg
//!
//! Pull-based central configuration for APM agents.
//!
//! The process starts from a static configuration, polls the management
//! server's agent configuration endpoint, and publishes each accepted
//! response as an immutable [`LayeredSnapshot`]. Readers always see either
//! the previous or the new snapshot, never a mix.
//!
//! ## Example
//!
//! ```ignore
//! use agentcfg::{CentralConfigService, infrastructure::ConfigLoader};
//!
//! let config = ConfigLoader::new().load()?;
//! let mut service = CentralConfigService::from_config(&config)?;
//! service.start();
//!
//! let snapshot = service.current();
//! if *snapshot.recording() {
//!     let rate = *snapshot.transaction_sample_rate();
//! }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Option registry, value grammars, deltas and snapshots
//! - `infrastructure` - Config loading, logging, HTTP transport and the fetcher
//! - [`CentralConfigService`] - Wires the two together for one process

/// Domain layer - option registry, snapshots and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use agentcfg_domain::*;
}

/// Infrastructure layer - config, logging, transport and fetcher
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use agentcfg_infrastructure::*;
}

mod run;
mod service;

pub use domain::{
    AgentConfig, ConfigurationDelta, DynamicOption, DynamicSettings, Error, LayeredSnapshot,
    OptionRegistry, Result, WaitInfo,
};
pub use run::{describe_snapshot, run};
pub use service::CentralConfigService;
