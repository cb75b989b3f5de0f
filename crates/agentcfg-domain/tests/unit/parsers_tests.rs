//! Value grammar tests

use agentcfg_domain::options::parsers::{
    parse_bool, parse_duration, parse_enum, parse_int, parse_matchers, parse_max_spans,
    parse_non_negative_duration, parse_sample_rate,
};
use agentcfg_domain::value_objects::{AgentLogLevel, ConfigDuration, TraceContinuationStrategy};

#[test]
fn test_parse_bool_is_case_insensitive() {
    assert_eq!(parse_bool("true"), Ok(true));
    assert_eq!(parse_bool("TRUE"), Ok(true));
    assert_eq!(parse_bool(" False "), Ok(false));
    assert!(parse_bool("yes").is_err());
    assert!(parse_bool("1").is_err());
    assert!(parse_bool("").is_err());
}

#[test]
fn test_parse_int() {
    assert_eq!(parse_int("42"), Ok(42));
    assert_eq!(parse_int("-3"), Ok(-3));
    assert!(parse_int("4.2").is_err());
    assert!(parse_int("ten").is_err());
}

#[test]
fn test_parse_max_spans_lower_bound() {
    assert_eq!(parse_max_spans("-1"), Ok(-1));
    assert_eq!(parse_max_spans("0"), Ok(0));
    assert!(parse_max_spans("-2").is_err());
}

#[test]
fn test_parse_sample_rate_range_and_precision() {
    assert_eq!(parse_sample_rate("0.25"), Ok(0.25));
    assert_eq!(parse_sample_rate("0"), Ok(0.0));
    assert_eq!(parse_sample_rate("1"), Ok(1.0));
    assert_eq!(parse_sample_rate("0.123456"), Ok(0.1235));
    assert_eq!(parse_sample_rate("0.00001"), Ok(0.0001));
    assert!(parse_sample_rate("1.01").is_err());
    assert!(parse_sample_rate("-0.1").is_err());
    assert!(parse_sample_rate("NaN").is_err());
    assert!(parse_sample_rate("half").is_err());
}

#[test]
fn test_parse_duration_units() {
    assert_eq!(parse_duration("5ms"), Ok(ConfigDuration::from_millis(5)));
    assert_eq!(parse_duration("5"), Ok(ConfigDuration::from_millis(5)));
    assert_eq!(parse_duration("2s"), Ok(ConfigDuration::from_millis(2_000)));
    assert_eq!(parse_duration("3m"), Ok(ConfigDuration::from_millis(180_000)));
    assert_eq!(parse_duration("10MS"), Ok(ConfigDuration::from_millis(10)));
    assert_eq!(parse_duration("-1ms"), Ok(ConfigDuration::from_millis(-1)));
    assert!(parse_duration("5h").is_err());
    assert!(parse_duration("fast").is_err());
}

#[test]
fn test_parse_non_negative_duration() {
    assert_eq!(
        parse_non_negative_duration("0ms"),
        Ok(ConfigDuration::from_millis(0))
    );
    assert!(parse_non_negative_duration("-1ms").is_err());
}

#[test]
fn test_parse_matchers() {
    let matchers = parse_matchers("/health*, , *.js ,(?-i)/Admin").unwrap();
    assert_eq!(matchers.len(), 3);
    assert!(matchers.matches("/healthcheck"));
    assert!(matchers.matches("/static/app.JS"));
    assert!(matchers.matches("/Admin"));
    assert!(!matchers.matches("/admin"));
    assert!(parse_matchers("").unwrap().is_empty());
}

#[test]
fn test_parse_enums() {
    assert_eq!(parse_enum::<AgentLogLevel>("Warning"), Ok(AgentLogLevel::Warning));
    assert_eq!(parse_enum::<AgentLogLevel>("warn"), Ok(AgentLogLevel::Warning));
    assert_eq!(parse_enum::<AgentLogLevel>("information"), Ok(AgentLogLevel::Info));
    assert!(parse_enum::<AgentLogLevel>("verbose").is_err());
    assert_eq!(
        parse_enum::<TraceContinuationStrategy>("RESTART"),
        Ok(TraceContinuationStrategy::Restart)
    );
    assert!(parse_enum::<TraceContinuationStrategy>("restart-external").is_err());
}
