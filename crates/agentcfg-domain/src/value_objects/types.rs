//! Enumerated option values
//!
//! Each enum parses case-insensitively from the wire spelling and
//! serializes back to its canonical spelling.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which request bodies the agent records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CaptureBody {
    #[default]
    Off,
    Errors,
    Transactions,
    All,
}

impl CaptureBody {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Errors => "errors",
            Self::Transactions => "transactions",
            Self::All => "all",
        }
    }
}

impl FromStr for CaptureBody {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "errors" => Ok(Self::Errors),
            "transactions" => Ok(Self::Transactions),
            "all" => Ok(Self::All),
            _ => Err(format!(
                "unknown capture_body mode '{s}', expected off, errors, transactions or all"
            )),
        }
    }
}

/// Agent log level as carried by the `log_level` option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AgentLogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Critical,
    None,
}

impl AgentLogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Critical => "critical",
            Self::None => "none",
        }
    }

    /// Directive understood by an env-filter style logger
    pub fn filter_directive(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warn",
            Self::Error | Self::Critical => "error",
            Self::None => "off",
        }
    }
}

impl FromStr for AgentLogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" | "information" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "critical" => Ok(Self::Critical),
            "none" | "off" => Ok(Self::None),
            _ => Err(format!(
                "unknown log level '{s}', expected trace, debug, info, warning, error, critical or none"
            )),
        }
    }
}

/// How incoming trace context headers are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TraceContinuationStrategy {
    #[default]
    Continue,
    Restart,
    RestartExternal,
}

impl TraceContinuationStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Continue => "continue",
            Self::Restart => "restart",
            Self::RestartExternal => "restart_external",
        }
    }
}

impl FromStr for TraceContinuationStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "continue" => Ok(Self::Continue),
            "restart" => Ok(Self::Restart),
            "restart_external" => Ok(Self::RestartExternal),
            _ => Err(format!(
                "unknown trace continuation strategy '{s}', expected continue, restart or restart_external"
            )),
        }
    }
}

macro_rules! impl_string_conversions {
    ($($name:ident),* $(,)?) => {
        $(
            impl TryFrom<String> for $name {
                type Error = String;

                fn try_from(value: String) -> Result<Self, String> {
                    value.parse()
                }
            }

            impl From<$name> for String {
                fn from(value: $name) -> Self {
                    value.as_str().to_string()
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

impl_string_conversions!(CaptureBody, AgentLogLevel, TraceContinuationStrategy);
