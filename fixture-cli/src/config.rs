use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use fixture_core::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use std::env;

const DEFAULTS: &str = include_str!("../config/default.toml");

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub endpoint: EndpointConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EndpointConfig {
    /// Scheme, host and port the `/users` path is appended to
    pub base_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format (pretty, json, compact)
    pub format: LogFormat,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
    Compact,
}

impl Config {
    /// Load configuration from the embedded defaults and the environment.
    ///
    /// A config file is layered in by [`Config::from_file`]; the binary picks
    /// that path whenever `--config` or `CONFIG_FILE` is given.
    pub fn from_env() -> Result<Self> {
        let config = ConfigBuilder::builder()
            .add_source(File::from_str(DEFAULTS, FileFormat::Toml))
            .add_source(Self::environment())
            .build()
            .context("Failed to build configuration")?;

        let mut result: Config = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        Self::apply_standard_env_vars(&mut result);

        Ok(result)
    }

    /// Load configuration from a specific file path, on top of the defaults.
    ///
    /// Environment variables still override values from the file.
    pub fn from_file(path: &str) -> Result<Self> {
        let config = ConfigBuilder::builder()
            .add_source(File::from_str(DEFAULTS, FileFormat::Toml))
            .add_source(File::with_name(path).format(FileFormat::Toml))
            .add_source(Self::environment())
            .build()
            .context("Failed to build configuration from file")?;

        let mut result: Config = config
            .try_deserialize()
            .context("Failed to deserialize configuration from file")?;

        Self::apply_standard_env_vars(&mut result);

        Ok(result)
    }

    /// `FIXTURES_<SECTION>__<KEY>`, e.g. `FIXTURES_ENDPOINT__BASE_URL`
    fn environment() -> Environment {
        Environment::with_prefix("FIXTURES")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    /// Apply standard environment variables (USERS_BASE_URL, LOG_LEVEL)
    fn apply_standard_env_vars(config: &mut Config) {
        if let Ok(base_url) = env::var("USERS_BASE_URL") {
            config.endpoint.base_url = base_url;
        }

        if let Ok(log_level) = env::var("LOG_LEVEL") {
            config.logging.level = log_level;
        }
    }

    /// Full URL of the users endpoint
    pub fn users_url(&self) -> String {
        format!(
            "{}{}",
            self.endpoint.base_url.trim_end_matches('/'),
            fixture_core::USERS_PATH
        )
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        // Validate log level
        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(anyhow::anyhow!(
                    "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                    self.logging.level
                ));
            }
        }

        // Validate endpoint
        let base_url = &self.endpoint.base_url;
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(fixture_core::FixtureError::invalid_base_url(base_url).into());
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: EndpointConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
            },
            logging: LoggingConfig {
                level: "warn".to_string(),
                format: LogFormat::Compact,
            },
        }
    }
}
