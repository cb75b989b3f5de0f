//! Logging Tests

use agentcfg_domain::delta::ConfigurationDelta;
use agentcfg_domain::options::DynamicOverrides;
use agentcfg_domain::ports::ConfigUpdateHook;
use agentcfg_domain::snapshot::LayeredSnapshot;
use agentcfg_domain::value_objects::{AgentConfig, AgentLogLevel};
use agentcfg_infrastructure::constants::DEFAULT_LOG_LEVEL;
use agentcfg_infrastructure::logging::{
    LogLevelHandle, LogLevelHook, LoggingConfig, parse_log_level,
};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry, reload};

fn snapshot_with_level(level: Option<AgentLogLevel>) -> LayeredSnapshot {
    let base = Arc::new(AgentConfig::default());
    match level {
        Some(level) => LayeredSnapshot::layered(
            base,
            ConfigurationDelta::new(
                DynamicOverrides {
                    log_level: Some(level),
                    ..Default::default()
                },
                "\"lvl\"",
            ),
        ),
        None => LayeredSnapshot::from_static(base),
    }
}

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("INFO").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warn").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);

    assert!(parse_log_level("invalid").is_err());
}

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, DEFAULT_LOG_LEVEL);
    assert!(!config.json_format);
    assert!(config.file_output.is_none());
    assert!(config.follow_central_level);
}

#[test]
fn test_log_level_hook_reloads_filter() {
    let (layer, handle) = reload::Layer::new(EnvFilter::new("info"));
    let _subscriber = Registry::default().with(layer);
    let handle = LogLevelHandle::new(handle);
    let hook = LogLevelHook::new(handle.clone());
    assert_eq!(hook.name(), LogLevelHook::NAME);

    hook.on_update(
        &snapshot_with_level(None),
        &snapshot_with_level(Some(AgentLogLevel::Debug)),
    );
    assert_eq!(
        handle.current_directive().unwrap().to_lowercase(),
        "debug"
    );

    hook.on_update(
        &snapshot_with_level(Some(AgentLogLevel::Debug)),
        &snapshot_with_level(Some(AgentLogLevel::None)),
    );
    assert_eq!(handle.current_directive().unwrap().to_lowercase(), "off");
}

#[test]
fn test_log_level_hook_ignores_unchanged_level() {
    let (layer, handle) = reload::Layer::new(EnvFilter::new("warn"));
    let _subscriber = Registry::default().with(layer);
    let handle = LogLevelHandle::new(handle);
    let hook = LogLevelHook::new(handle.clone());

    // Both resolve to the static default
    hook.on_update(&snapshot_with_level(None), &snapshot_with_level(None));
    assert_eq!(handle.current_directive().unwrap().to_lowercase(), "warn");
}

#[test]
fn test_set_directive_rejects_garbage() {
    let (layer, handle) = reload::Layer::new(EnvFilter::new("info"));
    let _subscriber = Registry::default().with(layer);
    let handle = LogLevelHandle::new(handle);

    assert!(handle.set_directive("agentcfg=loudest").is_err());
    assert!(handle.set_level(AgentLogLevel::Warning).is_ok());
    assert_eq!(handle.current_directive().unwrap().to_lowercase(), "warn");
}
