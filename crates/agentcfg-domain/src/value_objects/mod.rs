//! Domain Value Objects
//!
//! Immutable value objects used by the dynamic options and by the
//! polling loop.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`AgentConfig`] | Static configuration loaded at startup |
//! | [`ConfigDuration`] | Signed duration option value |
//! | [`MatcherList`] | Comma separated wildcard matchers |
//! | [`WaitInfo`] | Interval until the next poll, with its reason |

/// Static configuration value objects
pub mod config;
/// Duration option values
pub mod duration;
/// Wildcard matcher option values
pub mod matcher;
/// Enumerated option values
pub mod types;
/// Poll interval value object
pub mod wait_info;

// Re-export commonly used value objects
pub use config::AgentConfig;
pub use duration::ConfigDuration;
pub use matcher::{MatcherList, WildcardMatcher};
pub use types::{AgentLogLevel, CaptureBody, TraceContinuationStrategy};
pub use wait_info::WaitInfo;
