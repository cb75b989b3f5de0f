//! Domain layer constants
//!
//! Protocol constants of the central configuration endpoint and the
//! defaults of the static agent configuration. Infrastructure-specific
//! constants remain in `agentcfg_infrastructure::constants`.

// ============================================================================
// CENTRAL CONFIGURATION PROTOCOL
// ============================================================================

/// Path of the agent configuration endpoint, relative to the server URL
pub const CENTRAL_CONFIG_PATH: &str = "config/v1/agents";

/// Query parameter carrying the service name
pub const SERVICE_NAME_QUERY: &str = "service.name";

/// Query parameter carrying the service environment
pub const SERVICE_ENVIRONMENT_QUERY: &str = "service.environment";

/// Response header carrying the cache identifier
pub const ETAG_HEADER: &str = "etag";

/// Request header carrying the held cache identifier
pub const IF_NONE_MATCH_HEADER: &str = "if-none-match";

/// Response header carrying the cache lifetime
pub const CACHE_CONTROL_HEADER: &str = "cache-control";

/// Cache-Control directive that carries the lifetime in seconds
pub const MAX_AGE_DIRECTIVE: &str = "max-age";

// ============================================================================
// POLLING CONSTANTS
// ============================================================================

/// Wait used when the server gives no usable cache lifetime (5 minutes)
pub const DEFAULT_WAIT_SECS: u64 = 5 * 60;

/// Lower bound for a server-directed cache lifetime
pub const MIN_WAIT_SECS: u64 = 5;

/// Upper bound for a single configuration request (5 minutes)
pub const REQUEST_TIMEOUT_SECS: u64 = 5 * 60;

// ============================================================================
// STATIC CONFIGURATION DEFAULTS
// ============================================================================

/// Service name used when none is configured
pub const DEFAULT_SERVICE_NAME: &str = "unknown-rust-service";

/// Server URL used when none is configured
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8200";

/// Provenance label of a snapshot that carries no remote overrides
pub const LOCAL_PROVENANCE: &str = "local configuration";
