//! Typed option values

use crate::value_objects::{
    AgentLogLevel, CaptureBody, ConfigDuration, MatcherList, TraceContinuationStrategy,
};
use std::fmt;

/// Value grammar of an option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKind {
    Bool,
    Int,
    Double,
    Duration,
    Enum,
    MatcherList,
}

/// A parsed option value
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Bool(bool),
    Int(i32),
    Double(f64),
    Duration(ConfigDuration),
    CaptureBody(CaptureBody),
    LogLevel(AgentLogLevel),
    TraceContinuation(TraceContinuationStrategy),
    Matchers(MatcherList),
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<ConfigDuration> for OptionValue {
    fn from(value: ConfigDuration) -> Self {
        Self::Duration(value)
    }
}

impl From<CaptureBody> for OptionValue {
    fn from(value: CaptureBody) -> Self {
        Self::CaptureBody(value)
    }
}

impl From<AgentLogLevel> for OptionValue {
    fn from(value: AgentLogLevel) -> Self {
        Self::LogLevel(value)
    }
}

impl From<TraceContinuationStrategy> for OptionValue {
    fn from(value: TraceContinuationStrategy) -> Self {
        Self::TraceContinuation(value)
    }
}

impl From<MatcherList> for OptionValue {
    fn from(value: MatcherList) -> Self {
        Self::Matchers(value)
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Double(value) => write!(f, "{value}"),
            Self::Duration(value) => write!(f, "{value}"),
            Self::CaptureBody(value) => write!(f, "{value}"),
            Self::LogLevel(value) => write!(f, "{value}"),
            Self::TraceContinuation(value) => write!(f, "{value}"),
            Self::Matchers(value) => write!(f, "{value}"),
        }
    }
}
