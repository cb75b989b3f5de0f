//! Wait interval between two configuration polls

use crate::constants::{DEFAULT_WAIT_SECS, MIN_WAIT_SECS};
use std::fmt;
use std::time::Duration;

/// How long the fetcher sleeps before the next request, and why
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitInfo {
    /// Sleep duration
    pub interval: Duration,
    /// Free-text reason, logged with the interval
    pub reason: String,
}

impl WaitInfo {
    pub fn new<S: Into<String>>(interval: Duration, reason: S) -> Self {
        Self {
            interval,
            reason: reason.into(),
        }
    }

    /// The 5 minute fallback wait
    pub fn default_wait<S: Into<String>>(reason: S) -> Self {
        Self::new(Duration::from_secs(DEFAULT_WAIT_SECS), reason)
    }

    /// Wait derived from a `Cache-Control: max-age` value
    ///
    /// Missing, zero and negative values fall back to the 5 minute default.
    /// Positive values under 5 seconds are raised to 5 seconds.
    pub fn from_max_age(max_age_secs: Option<i64>) -> Self {
        match max_age_secs {
            None => Self::default_wait("no usable cache lifetime from server"),
            Some(secs) if secs <= 0 => Self::default_wait(format!(
                "cache lifetime from server was {secs}s, which is invalid"
            )),
            Some(secs) => {
                let secs = secs.unsigned_abs();
                if secs < MIN_WAIT_SECS {
                    Self::new(
                        Duration::from_secs(MIN_WAIT_SECS),
                        format!(
                            "cache lifetime from server was {secs}s, raised to the {MIN_WAIT_SECS}s minimum"
                        ),
                    )
                } else {
                    Self::new(
                        Duration::from_secs(secs),
                        "server-directed cache lifetime",
                    )
                }
            }
        }
    }
}

impl fmt::Display for WaitInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})",
            humantime::format_duration(self.interval),
            self.reason
        )
    }
}
