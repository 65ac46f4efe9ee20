use std::collections::{BTreeMap, HashMap};

use parking_lot::Mutex;

use super::state::LedgerState;
use super::Ledger;
use crate::domain::{Game, GameId, UserId, Wallet};

/// Builder for a [`Ledger`] with explicit fixtures.
///
/// Adding a game or wallet with an id that is already present replaces
/// the earlier entry.
pub struct LedgerBuilder {
    admin_key: String,
    games: BTreeMap<GameId, Game>,
    wallets: HashMap<UserId, Wallet>,
}

impl LedgerBuilder {
    /// Start a builder with the admin credential used by settlement.
    pub fn new(admin_key: impl Into<String>) -> Self {
        Self {
            admin_key: admin_key.into(),
            games: BTreeMap::new(),
            wallets: HashMap::new(),
        }
    }

    /// Add a game.
    #[must_use]
    pub fn game(mut self, game: Game) -> Self {
        self.games.insert(game.id(), game);
        self
    }

    /// Grant a user a wallet holding `balance` tokens.
    #[must_use]
    pub fn wallet(mut self, user_id: UserId, balance: u64) -> Self {
        self.wallets.insert(user_id, Wallet::new(user_id, balance));
        self
    }

    /// Number of games added so far.
    #[must_use]
    pub fn game_count(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn build(self) -> Ledger {
        Ledger {
            state: Mutex::new(LedgerState::new(self.games, self.wallets)),
            admin_key: self.admin_key,
        }
    }
}
