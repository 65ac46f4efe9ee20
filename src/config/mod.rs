//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file with environment variable
//! overrides for sensitive values like `LEDGER_ADMIN_KEY`. Every section is
//! optional and falls back to its defaults.

use serde::Deserialize;
use std::path::Path;

use crate::error::{ConfigError, Result};

mod ledger;
mod logging;
mod server;

pub use ledger::{LedgerConfig, ADMIN_KEY_ENV};
pub use logging::{LoggingConfig, LOG_FORMATS};
pub use server::ServerConfig;

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub ledger: LedgerConfig,
}

impl Config {
    /// Read, parse and validate a config file, applying environment
    /// overrides.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;

        let mut config = Self::parse(&content)?;
        config.apply_env();
        config.validate()?;

        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load(path);
        }

        let mut config = Self::default();
        config.apply_env();
        config.validate()?;

        Ok(config)
    }

    /// Parse TOML without validating or consulting the environment.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content).map_err(ConfigError::Parse)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.host.is_empty() {
            return Err(ConfigError::MissingField {
                field: "server.host",
            }
            .into());
        }
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port",
                reason: "must be non-zero".into(),
            }
            .into());
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!(
                    "expected one of {}, got '{}'",
                    LOG_FORMATS.join(", "),
                    self.logging.format
                ),
            }
            .into());
        }
        if self.ledger.admin_key.is_empty() {
            return Err(ConfigError::MissingField {
                field: "ledger.admin_key",
            }
            .into());
        }
        Ok(())
    }

    /// Admin key from the environment wins over the file.
    fn apply_env(&mut self) {
        if let Some(key) = std::env::var(ADMIN_KEY_ENV).ok().filter(|k| !k.is_empty()) {
            self.ledger.admin_key = key;
        }
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.server.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
        assert!(config.ledger.seed_demo_data);
        assert_eq!(config.ledger.admin_key, "letmein");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::parse(
            r#"
[server]
port = 9000

[ledger]
seed_demo_data = false
"#,
        )
        .unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert!(!config.ledger.seed_demo_data);
        assert_eq!(config.ledger.admin_key, "letmein");
    }

    #[test]
    fn rejects_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(matches!(
            config.validate(),
            Err(Error::Config(ConfigError::InvalidValue {
                field: "server.port",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_unknown_log_format() {
        let mut config = Config::default();
        config.logging.format = "xml".into();
        assert!(matches!(
            config.validate(),
            Err(Error::Config(ConfigError::InvalidValue {
                field: "logging.format",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_empty_admin_key() {
        let mut config = Config::default();
        config.ledger.admin_key.clear();
        assert!(matches!(
            config.validate(),
            Err(Error::Config(ConfigError::MissingField {
                field: "ledger.admin_key"
            }))
        ));
    }

    #[test]
    fn debug_output_redacts_admin_key() {
        let config = Config::default();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("letmein"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        assert!(matches!(
            Config::parse("[server\nport = "),
            Err(Error::Config(ConfigError::Parse(_)))
        ));
    }
}
