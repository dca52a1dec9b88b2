//! Configuration.
//!
//! Loaded from a TOML file with environment variable overrides. Every field
//! has a default, so an empty file is a valid configuration.

use crate::domain::user::RankingOrder;
use crate::error::BoardError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Environment variable overriding `base_url`.
pub const ENV_BASE_URL: &str = "BOARD_BASE_URL";

/// Environment variable overriding `update_interval_ms`.
pub const ENV_UPDATE_INTERVAL_MS: &str = "BOARD_UPDATE_INTERVAL_MS";

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DashboardConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_update_interval_ms")]
    pub update_interval_ms: u64,

    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Order of the compact leaderboard on the dashboard page.
    #[serde(default)]
    pub ranking_order: RankingOrder,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_base_url() -> String {
    crate::network::DEFAULT_API_URL.to_string()
}

fn default_update_interval_ms() -> u64 {
    crate::network::DEFAULT_UPDATE_INTERVAL.as_millis() as u64
}

fn default_request_timeout_ms() -> u64 {
    crate::network::DEFAULT_REQUEST_TIMEOUT.as_millis() as u64
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            update_interval_ms: default_update_interval_ms(),
            request_timeout_ms: default_request_timeout_ms(),
            ranking_order: RankingOrder::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Which diagnostic levels are emitted.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub verbose: bool,

    #[serde(default = "default_true")]
    pub warn: bool,

    #[serde(default = "default_true")]
    pub error: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            verbose: true,
            warn: true,
            error: true,
        }
    }
}

impl LoggingConfig {
    /// Most verbose level enabled by the toggles, as an `EnvFilter` level.
    pub fn level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.warn {
            "warn"
        } else if self.error {
            "error"
        } else {
            "off"
        }
    }
}

impl DashboardConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, BoardError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file, then apply environment overrides.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BoardError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config = Self::from_toml_str(&content)?;
        config.apply_env()?;
        Ok(config)
    }

    /// Defaults plus environment overrides.
    pub fn from_env() -> Result<Self, BoardError> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<(), BoardError> {
        self.apply_overrides(
            std::env::var(ENV_BASE_URL).ok(),
            std::env::var(ENV_UPDATE_INTERVAL_MS).ok(),
        )
    }

    fn apply_overrides(
        &mut self,
        base_url: Option<String>,
        interval_ms: Option<String>,
    ) -> Result<(), BoardError> {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        if let Some(raw) = interval_ms {
            self.update_interval_ms = raw.trim().parse().map_err(|_| {
                BoardError::Config(format!("{} is not a number: {:?}", ENV_UPDATE_INTERVAL_MS, raw))
            })?;
        }
        self.validate()
    }

    fn validate(&self) -> Result<(), BoardError> {
        if self.base_url.trim().is_empty() {
            return Err(BoardError::Config("base_url must not be empty".into()));
        }
        if self.update_interval_ms == 0 {
            return Err(BoardError::Config("update_interval_ms must be positive".into()));
        }
        if self.request_timeout_ms == 0 {
            return Err(BoardError::Config("request_timeout_ms must be positive".into()));
        }
        Ok(())
    }

    pub fn update_interval(&self) -> Duration {
        Duration::from_millis(self.update_interval_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
