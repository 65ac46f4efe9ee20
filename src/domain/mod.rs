//! Ledger domain types: games, bets, wallets and odds.

pub mod error;

mod bet;
mod game;
mod id;
mod odds;
mod wallet;

pub use bet::Bet;
pub use error::LedgerError;
pub use game::{Game, GameStatus, Pools, Selection};
pub use id::{BetId, GameId, UserId};
pub use odds::{compute_odds, Odds};
pub use wallet::Wallet;
