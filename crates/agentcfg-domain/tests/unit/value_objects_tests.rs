//! Value object tests

use agentcfg_domain::value_objects::{
    AgentConfig, AgentLogLevel, CaptureBody, ConfigDuration, MatcherList, WildcardMatcher,
};
use std::time::Duration;

#[test]
fn test_wildcard_matcher_semantics() {
    let matcher = WildcardMatcher::new("*/api/*/users").unwrap();
    assert!(matcher.matches("https://host/api/v1/users"));
    assert!(matcher.matches("/API//USERS"));
    assert!(!matcher.matches("/api/v1/users/42"));

    let literal = WildcardMatcher::new("a.b+c").unwrap();
    assert!(literal.matches("A.B+C"));
    assert!(!literal.matches("aXb+c"));

    let everything = WildcardMatcher::new("*").unwrap();
    assert!(everything.matches(""));
}

#[test]
fn test_case_sensitive_prefix() {
    let matcher = WildcardMatcher::new("(?-i)*Token").unwrap();
    assert!(matcher.matches("AccessToken"));
    assert!(!matcher.matches("accesstoken"));
    assert_eq!(matcher.pattern(), "(?-i)*Token");
}

#[test]
fn test_matcher_list_display_round_trip() {
    let list = MatcherList::parse(" a* ,b ").unwrap();
    assert_eq!(list.to_string(), "a*, b");
    assert_eq!(list.find("abc").map(WildcardMatcher::pattern), Some("a*"));
}

#[test]
fn test_config_duration_conversions() {
    let duration = ConfigDuration::from_millis(1_500);
    assert_eq!(duration.as_std(), Some(Duration::from_millis(1_500)));
    assert_eq!(duration.to_string(), "1500ms");
    assert_eq!(ConfigDuration::from_millis(-1).as_std(), None);
}

#[test]
fn test_enum_display_uses_wire_spelling() {
    assert_eq!(CaptureBody::Transactions.to_string(), "transactions");
    assert_eq!(AgentLogLevel::Warning.to_string(), "warning");
    assert_eq!(AgentLogLevel::Warning.filter_directive(), "warn");
    assert_eq!(AgentLogLevel::Critical.filter_directive(), "error");
    assert_eq!(AgentLogLevel::None.filter_directive(), "off");
}

#[test]
fn test_agent_config_defaults() {
    let config = AgentConfig::default();
    assert!(config.central_config);
    assert_eq!(config.server_url, "http://localhost:8200");
    assert!(config.secret_token.is_none());
    assert!(config.api_key.is_none());
}

#[test]
fn test_log_level_string_conversions() {
    let level = AgentLogLevel::try_from("ERROR".to_string()).unwrap();
    assert_eq!(level, AgentLogLevel::Error);
    assert_eq!(String::from(level), "error");

    let parsed: AgentLogLevel = serde_json::from_str("\"critical\"").unwrap();
    assert_eq!(parsed, AgentLogLevel::Critical);
    assert!(AgentLogLevel::try_from("loud".to_string()).is_err());
}
