use crate::transport::DEFAULT_TIMEOUT;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::info;

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT.as_millis() as u64
}

#[derive(Clone, Deserialize)]
pub struct ZabbixConfig {
    pub url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    pub username: Option<String>,
    pub password: Option<String>,
    pub session_id: Option<String>,
}

impl fmt::Debug for ZabbixConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |secret: &Option<String>| secret.as_ref().map(|_| "<redacted>");
        f.debug_struct("ZabbixConfig")
            .field("url", &self.url)
            .field("timeout_ms", &self.timeout_ms)
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .field("session_id", &redact(&self.session_id))
            .finish()
    }
}

impl ZabbixConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub zabbix: ZabbixConfig,
}

impl Config {
    /// Load `config.toml` from the working directory
    pub fn new() -> Result<Self> {
        Self::from_path("config.toml")
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&config_str)?;
        info!("Config loaded for {}", config.zabbix.url);
        Ok(config)
    }

    /// Build the config from `ZABBIX_*` environment variables
    pub fn from_env() -> Result<Self> {
        let url = env::var("ZABBIX_URL").context("ZABBIX_URL is not set")?;
        let timeout_ms = match env::var("ZABBIX_TIMEOUT_MS") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("invalid ZABBIX_TIMEOUT_MS: {value}"))?,
            Err(_) => default_timeout_ms(),
        };

        Ok(Self {
            zabbix: ZabbixConfig {
                url,
                timeout_ms,
                username: env::var("ZABBIX_USERNAME").ok(),
                password: env::var("ZABBIX_PASSWORD").ok(),
                session_id: env::var("ZABBIX_SESSION_ID").ok(),
            },
        })
    }

    /// `config.toml` when present, the environment otherwise
    pub fn load() -> Result<Self> {
        Self::load_from("config.toml")
    }

    /// `path` when it exists, the environment otherwise
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_path(path)
        } else {
            Self::from_env()
        }
    }
}
