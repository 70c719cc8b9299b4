// crates/dashboard-terminal/src/config.rs

//! Configuration for the dashboard.
//!
//! Sources, lowest precedence first:
//! - built-in defaults
//! - an optional TOML file (`--config`)
//! - `DASHBOARD_API_BASE` in the environment
//! - command-line flags (applied by `main`)

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const API_BASE_ENV: &str = "DASHBOARD_API_BASE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend base URL, without a trailing slash.
    pub api_base: String,
    /// Underlyings offered by the symbol selector, in display order.
    pub symbols: Vec<String>,
    pub default_symbol: String,
    /// Positions / option chain / market data cadence.
    pub fast_poll_secs: u64,
    /// Trade history cadence.
    pub slow_poll_secs: u64,
    pub request_timeout_secs: u64,
    pub log_file: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:5000".to_string(),
            symbols: vec![
                "BANKNIFTY".to_string(),
                "NIFTY".to_string(),
                "FINNIFTY".to_string(),
            ],
            default_symbol: "BANKNIFTY".to_string(),
            fast_poll_secs: 5,
            slow_poll_secs: 10,
            request_timeout_secs: 30,
            log_file: PathBuf::from("options-dashboard.log"),
        }
    }
}

impl ClientConfig {
    /// Read a TOML file; missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn with_env_overrides(self) -> Self {
        self.with_api_base_override(env::var(API_BASE_ENV).ok())
    }

    fn with_api_base_override(mut self, api_base: Option<String>) -> Self {
        if let Some(base) = api_base.filter(|b| !b.trim().is_empty()) {
            self.api_base = base;
        }
        self
    }

    /// Normalise and check the final configuration.
    ///
    /// A default symbol missing from the list is put in front of it.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        self.api_base = self.api_base.trim().trim_end_matches('/').to_string();
        if self.api_base.is_empty() {
            return Err(ConfigError::Invalid("api_base must not be empty".into()));
        }
        if self.fast_poll_secs == 0 || self.slow_poll_secs == 0 {
            return Err(ConfigError::Invalid("poll intervals must be non-zero".into()));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid("request_timeout_secs must be non-zero".into()));
        }

        self.symbols.retain(|s| !s.trim().is_empty());
        if self.default_symbol.trim().is_empty() {
            match self.symbols.first() {
                Some(first) => self.default_symbol = first.clone(),
                None => return Err(ConfigError::Invalid("no symbols configured".into())),
            }
        }
        if !self.symbols.contains(&self.default_symbol) {
            self.symbols.insert(0, self.default_symbol.clone());
        }

        Ok(self)
    }

    pub fn default_symbol_index(&self) -> usize {
        self.symbols
            .iter()
            .position(|s| *s == self.default_symbol)
            .unwrap_or(0)
    }

    pub fn fast_poll(&self) -> Duration {
        Duration::from_secs(self.fast_poll_secs)
    }

    pub fn slow_poll(&self) -> Duration {
        Duration::from_secs(self.slow_poll_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_stock_dashboard() {
        let config = ClientConfig::default().validate().unwrap();
        assert_eq!(config.api_base, "http://localhost:5000");
        assert_eq!(config.fast_poll(), Duration::from_secs(5));
        assert_eq!(config.slow_poll(), Duration::from_secs(10));
        assert_eq!(config.symbols[config.default_symbol_index()], "BANKNIFTY");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = ClientConfig::from_toml(
            r#"
            api_base = "http://10.0.0.5:5000/"
            default_symbol = "NIFTY"
            "#,
        )
        .unwrap()
        .validate()
        .unwrap();

        assert_eq!(config.api_base, "http://10.0.0.5:5000");
        assert_eq!(config.slow_poll_secs, 10);
        assert_eq!(config.default_symbol_index(), 1);
    }

    #[test]
    fn unknown_default_symbol_is_prepended() {
        let config = ClientConfig {
            default_symbol: "MIDCPNIFTY".to_string(),
            ..ClientConfig::default()
        }
        .validate()
        .unwrap();
        assert_eq!(config.symbols[0], "MIDCPNIFTY");
        assert_eq!(config.default_symbol_index(), 0);
    }

    #[test]
    fn zero_interval_is_rejected() {
        let err = ClientConfig {
            fast_poll_secs: 0,
            ..ClientConfig::default()
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn empty_symbol_setup_is_rejected() {
        let err = ClientConfig {
            symbols: vec![],
            default_symbol: String::new(),
            ..ClientConfig::default()
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = ClientConfig::from_toml("fast_poll_secs = \"soon\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn blank_env_override_is_ignored() {
        let config = ClientConfig::default().with_api_base_override(Some("  ".into()));
        assert_eq!(config.api_base, "http://localhost:5000");
        let config = ClientConfig::default().with_api_base_override(Some("http://x:1".into()));
        assert_eq!(config.api_base, "http://x:1");
    }
}
