//! # Infrastructure Layer
//!
//! I/O side of the central configuration subsystem.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based loading of the process configuration |
//! | [`logging`] | Tracing subscriber setup and the log level update hook |
//! | [`central`] | Response parser, snapshot store and polling fetcher |
//! | [`http`] | reqwest transport for the configuration endpoint |
//! | [`shutdown`] | Background task cancellation |
//! | [`error_ext`] | Error context helpers |

pub mod central;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod http;
pub mod logging;
pub mod shutdown;
pub mod utils;

pub use central::{CentralConfigFetcher, ConfigStore, FetchError, FetcherState, ResponseParser};
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
pub use http::HttpConfigTransport;
pub use logging::{LogLevelHandle, LogLevelHook, init_logging};
pub use shutdown::ShutdownCoordinator;
