//! Configuration delta
//!
//! The typed overlay built from one successful response. A delta is never
//! edited after construction; the next successful response replaces it
//! wholesale.

use crate::options::{DynamicOption, DynamicOverrides, OptionValue};

/// Parsed overrides plus the cache identifier of the response they came from
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigurationDelta {
    overrides: DynamicOverrides,
    etag: String,
    provenance: String,
}

impl ConfigurationDelta {
    pub fn new<S: Into<String>>(overrides: DynamicOverrides, etag: S) -> Self {
        let etag = etag.into();
        let provenance = format!("central configuration (etag: {etag})");
        Self {
            overrides,
            etag,
            provenance,
        }
    }

    pub fn overrides(&self) -> &DynamicOverrides {
        &self.overrides
    }

    /// Cache identifier, sent back verbatim as `If-None-Match`
    pub fn etag(&self) -> &str {
        &self.etag
    }

    /// Human readable origin of the values
    pub fn provenance(&self) -> &str {
        &self.provenance
    }

    pub fn get(&self, option: DynamicOption) -> Option<OptionValue> {
        self.overrides.get(option)
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}
