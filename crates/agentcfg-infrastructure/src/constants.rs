//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Protocol constants are defined in `agentcfg_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "agentcfg.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "agentcfg";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "AGENTCFG";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable that overrides the configured log filter
pub const LOG_ENV_VAR: &str = "AGENTCFG_LOG";

/// File name prefix for rolling log files
pub const LOG_FILE_PREFIX: &str = "agentcfg";

// ============================================================================
// HTTP CLIENT CONSTANTS
// ============================================================================

/// HTTP client connect timeout in seconds
pub const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Media type requested from the configuration endpoint
pub const ACCEPT_JSON: &str = "application/json";

// ============================================================================
// LIFECYCLE CONSTANTS
// ============================================================================

/// Name of the background polling task
pub const FETCHER_TASK_NAME: &str = "central-config-fetcher";

/// Time allowed for background tasks to stop on shutdown
pub const SHUTDOWN_TIMEOUT_SECS: u64 = 10;
