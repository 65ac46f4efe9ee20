use std::path::Path;

use crate::config::{Config, ADMIN_KEY_ENV};
use crate::error::Result;

/// Validate configuration file without starting the server.
pub fn execute_config<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    println!("Checking configuration: {}", path.display());
    println!();

    let config = Config::load(path)?;

    println!("✓ Configuration file is valid");
    println!();
    println!("Summary:");
    println!("  Listen: {}", config.server.bind_address());
    println!("  Logging: {} ({})", config.logging.level, config.logging.format);
    println!("  Demo data: {}", config.ledger.seed_demo_data);

    if std::env::var(ADMIN_KEY_ENV).is_ok_and(|k| !k.is_empty()) {
        println!("✓ Admin key found (from {ADMIN_KEY_ENV} env var)");
    } else {
        println!("⚠ Admin key taken from the config file");
        println!("  Set {ADMIN_KEY_ENV} to keep it out of version control");
    }

    println!();
    println!("Configuration is ready to use.");

    Ok(())
}
