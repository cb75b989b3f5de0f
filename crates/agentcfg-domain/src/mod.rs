//! # Domain Layer
//!
//! Types of the central configuration subsystem that carry no I/O.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`options`] | Closed registry of dynamic options and their grammars |
//! | [`delta`] | Typed overlay built from one successful response |
//! | [`snapshot`] | Static configuration layered with the current delta |
//! | [`value_objects`] | Durations, matchers, enums, wait intervals |
//! | [`ports`] | Transport and update hook interfaces |
//! | [`error`] | Domain error types |

pub mod constants;
pub mod delta;
pub mod error;
pub mod options;
pub mod ports;
pub mod snapshot;
pub mod value_objects;

// Re-export commonly used types at the crate root
pub use delta::ConfigurationDelta;
pub use error::{Error, OptionParseError, Result};
pub use options::{
    DynamicOption, DynamicOverrides, DynamicSettings, OptionDescriptor, OptionKind,
    OptionRegistry, OptionValue, PayloadParse,
};
pub use snapshot::LayeredSnapshot;
pub use value_objects::{AgentConfig, WaitInfo};
