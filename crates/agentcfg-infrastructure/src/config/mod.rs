//! Configuration management
//!
//! Loads the process configuration from defaults, a TOML file and
//! `AGENTCFG_*` environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, HttpClientConfig, LoggingConfig};
