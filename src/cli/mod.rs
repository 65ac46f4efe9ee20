//! Command-line interface definitions.

pub mod check;
pub mod serve;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parimutuel - In-memory pari-mutuel betting ledger.
#[derive(Parser, Debug)]
#[command(name = "parimutuel")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the ledger over HTTP (foreground)
    Serve(ServeArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `parimutuel check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments for the `serve` subcommand.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Path to configuration file (defaults apply if it does not exist)
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Override listen host
    #[arg(long)]
    pub host: Option<String>,

    /// Override listen port
    #[arg(long)]
    pub port: Option<u16>,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,

    /// Start with an empty ledger instead of the demo games
    #[arg(long)]
    pub no_seed: bool,
}
