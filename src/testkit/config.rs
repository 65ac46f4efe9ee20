//! Canonical test configurations.
//!
//! Single source of truth for config structs used across tests.

use crate::config::{Config, LedgerConfig, LoggingConfig, ServerConfig};

/// A valid configuration without demo data.
pub fn config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".into(),
            port: 8080,
        },
        logging: LoggingConfig::default(),
        ledger: LedgerConfig {
            seed_demo_data: false,
            admin_key: super::domain::ADMIN_KEY.into(),
        },
    }
}
