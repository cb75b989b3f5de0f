//! Configuration loader
//!
//! Handles loading configuration from various sources including
//! TOML files, environment variables, and default values.

use crate::config::AppConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::log_config_loaded;
use agentcfg_domain::error::{Error, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix, nested keys split on `__`
    ///    (e.g., `AGENTCFG_AGENT__SERVICE_NAME`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_SEPARATOR),
        );

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
            dirs::config_dir()
                .map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME))
                .unwrap_or_default(),
            dirs::home_dir()
                .map(|d| {
                    d.join(format!(".{DEFAULT_CONFIG_DIR}"))
                        .join(DEFAULT_CONFIG_FILENAME)
                })
                .unwrap_or_default(),
        ];

        candidates.into_iter().find(|path| path.is_file())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
///
/// Option values have already been checked by their parsers during
/// deserialization; this covers the cross-field and range constraints.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_agent_config(config)?;
    validate_dynamic_defaults(config)?;
    validate_http_config(config)?;
    Ok(())
}

fn validate_agent_config(config: &AppConfig) -> Result<()> {
    let agent = &config.agent;
    if agent.service_name.trim().is_empty() {
        return Err(Error::Configuration {
            message: "Service name cannot be empty".to_string(),
            source: None,
        });
    }
    let url = reqwest::Url::parse(&agent.server_url)
        .config_context(format!("Invalid server URL '{}'", agent.server_url))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::Configuration {
            message: format!(
                "Server URL must use http or https, got '{}'",
                url.scheme()
            ),
            source: None,
        });
    }
    Ok(())
}

fn validate_dynamic_defaults(config: &AppConfig) -> Result<()> {
    let dynamic = &config.agent.dynamic;
    if !(0.0..=1.0).contains(&dynamic.transaction_sample_rate) {
        return Err(Error::Configuration {
            message: format!(
                "Transaction sample rate must be between 0 and 1, got {}",
                dynamic.transaction_sample_rate
            ),
            source: None,
        });
    }
    if dynamic.transaction_max_spans < -1 {
        return Err(Error::Configuration {
            message: format!(
                "Transaction max spans must be -1 or greater, got {}",
                dynamic.transaction_max_spans
            ),
            source: None,
        });
    }
    Ok(())
}

fn validate_http_config(config: &AppConfig) -> Result<()> {
    if config.http.timeout_secs == 0 {
        return Err(Error::Configuration {
            message: "HTTP timeout cannot be 0".to_string(),
            source: None,
        });
    }
    Ok(())
}
