//! Duration option values
//!
//! Durations travel as `<integer><unit>` where the unit is one of `ms`,
//! `s` or `m`. A bare integer is read in milliseconds. Some options use a
//! negative duration as "disabled", so the value is kept signed.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use std::time::Duration;

static DURATION_GRAMMAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(-)?([0-9]+)(ms|s|m)?$").expect("Invalid regex"));

/// Signed millisecond duration as used by duration-typed options
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ConfigDuration {
    millis: i64,
}

impl ConfigDuration {
    /// Duration from a signed number of milliseconds
    pub const fn from_millis(millis: i64) -> Self {
        Self { millis }
    }

    /// Signed number of milliseconds
    pub const fn millis(self) -> i64 {
        self.millis
    }

    pub const fn is_negative(self) -> bool {
        self.millis < 0
    }

    /// Standard duration, `None` when negative
    pub fn as_std(self) -> Option<Duration> {
        u64::try_from(self.millis).ok().map(Duration::from_millis)
    }

    /// Parse a duration, rejecting negative values
    pub fn parse_non_negative(raw: &str) -> Result<Self, String> {
        let duration: Self = raw.parse()?;
        if duration.is_negative() {
            return Err(format!("duration must not be negative, got {duration}"));
        }
        Ok(duration)
    }
}

impl FromStr for ConfigDuration {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        let captures = DURATION_GRAMMAR
            .captures(&normalized)
            .ok_or_else(|| format!("'{raw}' is not a duration, expected <number>(ms|s|m)"))?;

        let magnitude: i64 = captures[2]
            .parse()
            .map_err(|e| format!("duration '{raw}' is out of range: {e}"))?;
        let factor = match captures.get(3).map(|unit| unit.as_str()) {
            None | Some("ms") => 1,
            Some("s") => 1_000,
            Some("m") => 60_000,
            Some(other) => return Err(format!("unknown duration unit '{other}'")),
        };
        let millis = magnitude
            .checked_mul(factor)
            .ok_or_else(|| format!("duration '{raw}' is out of range"))?;

        let millis = if captures.get(1).is_some() {
            -millis
        } else {
            millis
        };
        Ok(Self { millis })
    }
}

impl TryFrom<String> for ConfigDuration {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ConfigDuration> for String {
    fn from(value: ConfigDuration) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ConfigDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.millis)
    }
}
