//! Process entry point

use crate::service::CentralConfigService;
use agentcfg_domain::snapshot::LayeredSnapshot;
use agentcfg_infrastructure::config::ConfigLoader;
use agentcfg_infrastructure::logging::{LogLevelHook, init_logging};
use agentcfg_infrastructure::shutdown::wait_for_ctrl_c;
use anyhow::Context;
use serde_json::json;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Load configuration, then either poll once and print the effective
/// settings as JSON, or poll in the background until Ctrl-C
pub async fn run(config_path: Option<&Path>, once: bool) -> anyhow::Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = config_path {
        loader = loader.with_config_path(path);
    }
    let config = loader.load().context("Failed to load configuration")?;
    let log_handle = init_logging(&config.logging)?;

    let mut service = CentralConfigService::from_config(&config)?;
    if config.logging.follow_central_level {
        service.register_hook(Arc::new(LogLevelHook::new(log_handle)));
    }

    if once {
        if let Some(wait) = service.poll_once().await {
            info!(next_poll = %wait, "Single poll finished");
        }
        let snapshot = service.current();
        println!("{}", serde_json::to_string_pretty(&describe_snapshot(&snapshot))?);
        return Ok(());
    }

    if !service.start() {
        info!("Central configuration disabled, nothing to poll");
    }
    wait_for_ctrl_c().await;
    service.shutdown().await;
    Ok(())
}

/// JSON description of a snapshot: identity, origin and every effective value
pub fn describe_snapshot(snapshot: &LayeredSnapshot) -> serde_json::Value {
    let overridden: Vec<&str> = snapshot
        .overrides()
        .map(|overrides| overrides.options().into_iter().map(|o| o.key()).collect())
        .unwrap_or_default();
    json!({
        "service_name": snapshot.service_name(),
        "service_environment": snapshot.service_environment(),
        "source": snapshot.provenance(),
        "etag": snapshot.etag(),
        "overridden": overridden,
        "settings": snapshot.effective(),
    })
}
