//! Parimutuel - In-memory pari-mutuel betting ledger.
//!
//! The crate tracks games, accepts token stakes on one of three outcomes per
//! game, derives live odds from pool sizes and, on settlement, pays the
//! whole pool out to the winning stakes in proportion to their share of the
//! winning pool.
//!
//! # Modules
//!
//! - [`domain`] - Games, bets, wallets, odds and ledger errors
//! - [`ledger`] - The lock-guarded store and its operations
//! - [`bootstrap`] - Demo fixtures applied at startup
//! - [`config`] - Configuration loading from TOML files
//! - [`adapter`] - HTTP adapter translating requests into ledger calls
//! - [`cli`] - Command-line interface
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use parimutuel::domain::compute_odds;
//!
//! let odds = compute_odds(150, 120, 30);
//! assert_eq!(odds.home, 0.5);
//! ```

pub mod adapter;
pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod ledger;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
