//! Wildcard matchers
//!
//! List-typed options such as `transaction_ignore_urls` hold wildcard
//! patterns: `*` matches any sequence of characters, everything else is
//! literal. Matching ignores case unless the pattern starts with `(?-i)`.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::fmt;

const CASE_SENSITIVE_PREFIX: &str = "(?-i)";

/// A single compiled wildcard pattern
#[derive(Clone)]
pub struct WildcardMatcher {
    pattern: String,
    regex: Regex,
}

impl WildcardMatcher {
    /// Compile a wildcard pattern
    pub fn new(pattern: &str) -> Result<Self, String> {
        let pattern = pattern.trim();
        let (case_sensitive, body) = match pattern.strip_prefix(CASE_SENSITIVE_PREFIX) {
            Some(rest) => (true, rest),
            None => (false, pattern),
        };

        let translated = body
            .split('*')
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*");
        let regex = RegexBuilder::new(&format!("^{translated}$"))
            .case_insensitive(!case_sensitive)
            .dot_matches_new_line(true)
            .build()
            .map_err(|e| format!("invalid wildcard pattern '{pattern}': {e}"))?;

        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    /// The pattern as written
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }
}

impl PartialEq for WildcardMatcher {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl fmt::Debug for WildcardMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WildcardMatcher").field(&self.pattern).finish()
    }
}

impl fmt::Display for WildcardMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

/// Comma separated list of wildcard matchers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MatcherList(Vec<WildcardMatcher>);

impl MatcherList {
    /// Parse a comma separated list, skipping empty entries
    pub fn parse(raw: &str) -> Result<Self, String> {
        raw.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(WildcardMatcher::new)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// True when any matcher accepts the candidate
    pub fn matches(&self, candidate: &str) -> bool {
        self.0.iter().any(|matcher| matcher.matches(candidate))
    }

    /// First matcher that accepts the candidate
    pub fn find(&self, candidate: &str) -> Option<&WildcardMatcher> {
        self.0.iter().find(|matcher| matcher.matches(candidate))
    }

    pub fn matchers(&self) -> &[WildcardMatcher] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<String> for MatcherList {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<MatcherList> for String {
    fn from(value: MatcherList) -> Self {
        value.to_string()
    }
}

impl fmt::Display for MatcherList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let patterns: Vec<&str> = self.0.iter().map(WildcardMatcher::pattern).collect();
        f.write_str(&patterns.join(", "))
    }
}
