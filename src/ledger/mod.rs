//! The in-memory betting ledger.
//!
//! A [`Ledger`] owns every game, bet and wallet behind a single mutex.
//! Each operation holds the lock for its whole duration and never blocks
//! while holding it, so operations are linearizable: concurrent bets on the
//! same game are applied one after another and no update is lost.
//!
//! Reads hand back detached copies. Nothing outside this module can reach
//! live state.
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use parimutuel::domain::{Game, GameId, Pools, Selection, UserId};
//! use parimutuel::ledger::{BetRequest, Ledger};
//!
//! let ledger = Ledger::builder("secret")
//!     .wallet(UserId::new(1), 1000)
//!     .game(
//!         Game::new(GameId::new(101), "Flag Football", "Whirls", "Chicks", Utc::now())
//!             .with_pools(Pools::new(100, 100, 0)),
//!     )
//!     .build();
//!
//! let receipt = ledger
//!     .place_bet(BetRequest::new(UserId::new(1), GameId::new(101), "home", 100))
//!     .unwrap();
//! assert_eq!(receipt.wallet.balance(), 900);
//!
//! let settled = ledger.settle("secret", GameId::new(101), Selection::Home).unwrap();
//! assert_eq!(settled.game.result(), Some(Selection::Home));
//! assert_eq!(ledger.wallet(UserId::new(1)).unwrap().balance(), 1050);
//! ```

mod bet;
mod builder;
mod settle;
mod snapshot;
mod state;


use parking_lot::Mutex;

pub use bet::{BetReceipt, BetRequest};
pub use builder::LedgerBuilder;
pub use settle::{compute_payouts, Payout};
pub use snapshot::GameSnapshot;

use crate::domain::{Bet, GameId, LedgerError, UserId, Wallet};
use state::LedgerState;

/// Authoritative store of games, bets and wallets.
pub struct Ledger {
    state: Mutex<LedgerState>,
    admin_key: String,
}

impl Ledger {
    /// Start building a ledger whose settlements require `admin_key`.
    pub fn builder(admin_key: impl Into<String>) -> LedgerBuilder {
        LedgerBuilder::new(admin_key)
    }

    /// Every game with fresh odds, ordered by id.
    pub fn list_games(&self) -> Vec<GameSnapshot> {
        let state = self.state.lock();
        state.games.values().map(GameSnapshot::from).collect()
    }

    /// One game with fresh odds.
    pub fn game(&self, game_id: GameId) -> Result<GameSnapshot, LedgerError> {
        let state = self.state.lock();
        state
            .games
            .get(&game_id)
            .map(GameSnapshot::from)
            .ok_or(LedgerError::GameNotFound { game_id })
    }

    /// A copy of one user's wallet.
    pub fn wallet(&self, user_id: UserId) -> Result<Wallet, LedgerError> {
        let state = self.state.lock();
        state
            .wallets
            .get(&user_id)
            .copied()
            .ok_or(LedgerError::UserNotFound { user_id })
    }

    /// All bets recorded against a game, ordered by bet id.
    pub fn bets_for_game(&self, game_id: GameId) -> Vec<Bet> {
        let state = self.state.lock();
        state.bets_for_game(game_id).cloned().collect()
    }

    /// Number of bets ever recorded.
    pub fn bet_count(&self) -> usize {
        self.state.lock().bets.len()
    }
}

impl std::fmt::Debug for Ledger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("Ledger")
            .field("games", &state.games.len())
            .field("bets", &state.bets.len())
            .field("wallets", &state.wallets.len())
            .finish_non_exhaustive()
    }
}
