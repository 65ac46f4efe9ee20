//! Ledger bootstrap configuration.

use std::fmt;

use serde::Deserialize;

/// Environment variable that overrides `ledger.admin_key`.
pub const ADMIN_KEY_ENV: &str = "LEDGER_ADMIN_KEY";

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Load the demo games and wallet at startup.
    pub seed_demo_data: bool,
    /// Credential required to settle games.
    pub admin_key: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
            admin_key: "letmein".into(),
        }
    }
}

// Keeps the admin key out of logs.
impl fmt::Debug for LedgerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LedgerConfig")
            .field("seed_demo_data", &self.seed_demo_data)
            .field("admin_key", &"<redacted>")
            .finish()
    }
}
