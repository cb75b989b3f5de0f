//! Option registry tests

use agentcfg_domain::value_objects::{AgentLogLevel, CaptureBody, ConfigDuration};
use agentcfg_domain::{DynamicOption, DynamicSettings, OptionKind, OptionRegistry, OptionValue};
use std::collections::HashMap;

fn payload(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn test_registry_covers_every_option() {
    let registry = OptionRegistry::global();
    assert_eq!(registry.len(), DynamicOption::ALL.len());
    for option in DynamicOption::ALL {
        let descriptor = registry
            .descriptor(*option)
            .expect("every option has a descriptor");
        assert_eq!(descriptor.option(), *option);
        assert_eq!(DynamicOption::from_key(option.key()), Some(*option));
    }
}

#[test]
fn test_known_wire_keys() {
    let keys: Vec<&str> = DynamicOption::ALL.iter().map(|o| o.key()).collect();
    for expected in [
        "capture_body",
        "capture_body_content_types",
        "capture_headers",
        "transaction_sample_rate",
        "transaction_max_spans",
        "transaction_ignore_urls",
        "log_level",
        "recording",
        "sanitize_field_names",
        "ignore_message_queues",
        "stack_trace_limit",
        "span_stack_trace_min_duration",
        "span_compression_enabled",
        "span_compression_exact_match_max_duration",
        "span_compression_same_kind_max_duration",
        "exit_span_min_duration",
        "trace_continuation_strategy",
    ] {
        assert!(keys.contains(&expected), "missing key {expected}");
    }
    assert_eq!(DynamicOption::from_key("span_frames_min_duration"), None);
}

#[test]
fn test_option_kinds() {
    assert_eq!(DynamicOption::Recording.kind(), OptionKind::Bool);
    assert_eq!(DynamicOption::TransactionSampleRate.kind(), OptionKind::Double);
    assert_eq!(DynamicOption::TransactionMaxSpans.kind(), OptionKind::Int);
    assert_eq!(
        DynamicOption::TransactionIgnoreUrls.kind(),
        OptionKind::MatcherList
    );
    assert_eq!(DynamicOption::ExitSpanMinDuration.kind(), OptionKind::Duration);
    assert_eq!(DynamicOption::LogLevel.kind(), OptionKind::Enum);
}

#[test]
fn test_parse_payload_matches_direct_parser() {
    let registry = OptionRegistry::global();
    let raw = payload(&[
        ("capture_body", "ALL"),
        ("capture_headers", "False"),
        ("transaction_sample_rate", "0.25"),
        ("transaction_max_spans", "-1"),
        ("transaction_ignore_urls", "/health*, *.css"),
        ("log_level", "debug"),
        ("recording", "true"),
        ("stack_trace_limit", "10"),
        ("span_stack_trace_min_duration", "-1ms"),
        ("exit_span_min_duration", "2s"),
        ("trace_continuation_strategy", "restart_external"),
    ]);

    let parsed = registry.parse_payload(&raw);
    assert!(parsed.rejected.is_empty());
    assert!(parsed.unknown_keys.is_empty());
    assert_eq!(parsed.overrides.len(), raw.len());

    for (key, value) in &raw {
        let descriptor = registry.lookup(key).expect("registered key");
        let direct = descriptor.parse(value).expect("valid value");
        assert_eq!(parsed.overrides.get(descriptor.option()), Some(direct));
    }
}

#[test]
fn test_parse_payload_fails_soft_per_key() {
    let parsed = OptionRegistry::global().parse_payload(&payload(&[
        ("transaction_sample_rate", "1.5"),
        ("recording", "false"),
    ]));

    assert_eq!(parsed.rejected.len(), 1);
    assert_eq!(parsed.rejected[0].key, "transaction_sample_rate");
    assert_eq!(parsed.rejected[0].value, "1.5");
    assert_eq!(parsed.overrides.transaction_sample_rate, None);
    assert_eq!(parsed.overrides.recording, Some(false));
}

#[test]
fn test_parse_payload_collects_unknown_keys() {
    let parsed = OptionRegistry::global().parse_payload(&payload(&[
        ("zzz_future_option", "1"),
        ("capture_body", "errors"),
        ("aaa_future_option", "2"),
    ]));

    assert_eq!(
        parsed.unknown_keys,
        vec!["aaa_future_option".to_string(), "zzz_future_option".to_string()]
    );
    assert_eq!(parsed.overrides.options(), vec![DynamicOption::CaptureBody]);
    assert_eq!(parsed.overrides.capture_body, Some(CaptureBody::Errors));
}

#[test]
fn test_descriptor_error_carries_key_and_value() {
    let descriptor = OptionRegistry::global()
        .lookup("span_compression_exact_match_max_duration")
        .unwrap();
    let err = descriptor.parse("-5ms").unwrap_err();
    assert_eq!(err.key, "span_compression_exact_match_max_duration");
    assert_eq!(err.value, "-5ms");
}

#[test]
fn test_dynamic_settings_defaults() {
    let settings = DynamicSettings::default();
    assert_eq!(settings.capture_body, CaptureBody::Off);
    assert!(settings.capture_headers);
    assert!((settings.transaction_sample_rate - 1.0).abs() < f64::EPSILON);
    assert_eq!(settings.transaction_max_spans, 500);
    assert_eq!(settings.log_level, AgentLogLevel::Info);
    assert!(settings.recording);
    assert_eq!(settings.stack_trace_limit, 50);
    assert_eq!(
        settings.span_stack_trace_min_duration,
        ConfigDuration::from_millis(5)
    );
    assert!(settings.transaction_ignore_urls.matches("/favicon.ico"));
    assert!(settings.sanitize_field_names.matches("Authorization"));
    assert!(settings.ignore_message_queues.is_empty());
    assert_eq!(
        settings.get(DynamicOption::TransactionMaxSpans),
        OptionValue::Int(500)
    );
}

#[test]
fn test_dynamic_settings_deserialize_wire_grammar() {
    let settings: DynamicSettings = serde_json::from_value(serde_json::json!({
        "capture_body": "Transactions",
        "exit_span_min_duration": "1m",
        "sanitize_field_names": "foo*, (?-i)Bar",
        "transaction_sample_rate": 0.5,
    }))
    .unwrap();

    assert_eq!(settings.capture_body, CaptureBody::Transactions);
    assert_eq!(
        settings.exit_span_min_duration,
        ConfigDuration::from_millis(60_000)
    );
    assert!(settings.sanitize_field_names.matches("FOOTER"));
    assert!(!settings.sanitize_field_names.matches("bar"));
    // Unlisted fields keep their defaults
    assert!(settings.recording);
}
