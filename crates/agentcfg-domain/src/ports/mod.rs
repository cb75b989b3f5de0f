//! Port Interfaces
//!
//! Seams between the domain and the outside world.
//!
//! | Port | Description |
//! |------|-------------|
//! | [`CentralConfigTransport`] | Issues the conditional configuration request |
//! | [`ConfigUpdateHook`] | Reacts to newly published snapshots |

/// Snapshot update hook
pub mod hooks;
/// Configuration endpoint transport
pub mod transport;

pub use hooks::{ConfigUpdateHook, SharedConfigUpdateHook};
pub use transport::{CentralConfigTransport, ConfigResponse, SharedCentralConfigTransport};
