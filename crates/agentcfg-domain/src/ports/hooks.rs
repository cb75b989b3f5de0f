//! Snapshot Update Hook Interface
//!
//! Lets components with their own runtime state (a log filter, a sampler)
//! follow configuration changes without polling the current snapshot.

use crate::snapshot::LayeredSnapshot;
use std::sync::Arc;

/// Called after a new snapshot has been published
///
/// Hooks run on the fetcher task and must not block.
pub trait ConfigUpdateHook: Send + Sync {
    /// Registration name, unique per store
    fn name(&self) -> &str;

    fn on_update(&self, previous: &LayeredSnapshot, current: &LayeredSnapshot);
}

/// Shared hook handle
pub type SharedConfigUpdateHook = Arc<dyn ConfigUpdateHook>;
