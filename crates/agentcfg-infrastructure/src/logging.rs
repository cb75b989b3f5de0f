//! Structured logging with tracing
//!
//! Provides centralized logging configuration using the tracing ecosystem.
//! The level filter sits behind a reload layer so the `log_level` option
//! published by the configuration endpoint can change it at runtime.

use agentcfg_domain::error::{Error, Result};
use agentcfg_domain::ports::ConfigUpdateHook;
use agentcfg_domain::snapshot::LayeredSnapshot;
use agentcfg_domain::value_objects::AgentLogLevel;

pub use crate::config::LoggingConfig;
use crate::constants::{LOG_ENV_VAR, LOG_FILE_PREFIX};
use tracing::{Level, info, warn};
use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

/// Handle on the installed level filter
#[derive(Clone)]
pub struct LogLevelHandle {
    handle: reload::Handle<EnvFilter, Registry>,
}

impl LogLevelHandle {
    pub fn new(handle: reload::Handle<EnvFilter, Registry>) -> Self {
        Self { handle }
    }

    /// Replace the active filter with one for `level`
    pub fn set_level(&self, level: AgentLogLevel) -> Result<()> {
        self.set_directive(level.filter_directive())
    }

    /// Replace the active filter with an arbitrary directive
    pub fn set_directive(&self, directive: &str) -> Result<()> {
        let filter = EnvFilter::try_new(directive).map_err(|e| {
            Error::configuration_with_source(format!("Invalid log filter '{directive}'"), e)
        })?;
        self.handle
            .reload(filter)
            .map_err(|e| Error::infrastructure_with_source("Failed to reload log filter", e))
    }

    /// Textual form of the active filter
    pub fn current_directive(&self) -> Option<String> {
        self.handle.with_current(ToString::to_string).ok()
    }
}

impl std::fmt::Debug for LogLevelHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogLevelHandle")
            .field("current", &self.current_directive())
            .finish()
    }
}

/// Initialize logging with the provided configuration
///
/// Console output goes to stderr so stdout stays free for command output.
/// `AGENTCFG_LOG` takes precedence over the configured level. Fails if a
/// global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<LogLevelHandle> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&config.level));
    let (filter, handle) = reload::Layer::new(filter);

    let file_appender = config.file_output.as_ref().map(|path| {
        tracing_appender::rolling::daily(
            path.parent().unwrap_or_else(|| std::path::Path::new(".")),
            path.file_stem()
                .unwrap_or_else(|| std::ffi::OsStr::new(LOG_FILE_PREFIX)),
        )
    });

    // Layer types differ between the JSON and text formats
    let installed = if config.json_format {
        let console = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(true)
            .with_file(true)
            .with_line_number(true);
        let registry = Registry::default().with(filter);
        if let Some(appender) = file_appender {
            let file = fmt::layer()
                .json()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true);
            registry.with(console).with(file).try_init()
        } else {
            registry.with(console).try_init()
        }
    } else {
        let console = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(true)
            .with_file(true)
            .with_line_number(true);
        let registry = Registry::default().with(filter);
        if let Some(appender) = file_appender {
            let file = fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true);
            registry.with(console).with(file).try_init()
        } else {
            registry.with(console).try_init()
        }
    };
    installed.map_err(|e| Error::infrastructure_with_source("Failed to install logger", e))?;

    info!("Logging initialized with level: {}", level);
    Ok(LogLevelHandle::new(handle))
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::Configuration {
            message: format!("Invalid log level: {level}. Use trace, debug, info, warn, or error"),
            source: None,
        }),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &std::path::Path, success: bool) {
    if success {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}

/// Update hook that applies the published `log_level` to the process logger
#[derive(Debug, Clone)]
pub struct LogLevelHook {
    handle: LogLevelHandle,
}

impl LogLevelHook {
    pub const NAME: &'static str = "log-level";

    pub fn new(handle: LogLevelHandle) -> Self {
        Self { handle }
    }
}

impl ConfigUpdateHook for LogLevelHook {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn on_update(&self, previous: &LayeredSnapshot, current: &LayeredSnapshot) {
        let level = *current.log_level();
        if *previous.log_level() == level {
            return;
        }
        match self.handle.set_level(level) {
            Ok(()) => info!(
                level = level.as_str(),
                source = current.provenance(),
                "Log level changed"
            ),
            Err(e) => warn!(error = %e, "Could not apply log level"),
        }
    }
}
