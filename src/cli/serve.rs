//! Handler for the `serve` command.

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use crate::adapter::inbound::http;
use crate::bootstrap;
use crate::cli::ServeArgs;
use crate::config::Config;
use crate::error::Result;
use crate::ledger::Ledger;

/// Apply command-line overrides on top of the loaded configuration.
pub fn apply_overrides(config: &mut Config, args: &ServeArgs) {
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref level) = args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs {
        config.logging.format = "json".to_string();
    }
    if args.no_seed {
        config.ledger.seed_demo_data = false;
    }
}

/// Build the ledger described by the configuration.
pub fn build_ledger(config: &Config) -> Ledger {
    let builder = Ledger::builder(config.ledger.admin_key.clone());
    if config.ledger.seed_demo_data {
        bootstrap::seed_demo(builder).build()
    } else {
        builder.build()
    }
}

/// Execute the serve command.
pub async fn execute(args: &ServeArgs) -> Result<()> {
    let mut config = Config::load_or_default(&args.config)?;
    apply_overrides(&mut config, args);
    config.validate()?;

    config.init_logging();
    info!(
        config = %args.config.display(),
        seed_demo_data = config.ledger.seed_demo_data,
        "parimutuel starting"
    );

    let ledger = Arc::new(build_ledger(&config));
    let listener = TcpListener::bind(config.server.bind_address()).await?;

    http::serve(listener, ledger, shutdown_signal()).await?;

    info!("parimutuel stopped");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => warn!(error = %e, "Failed to listen for shutdown signal"),
    }
}
