use std::collections::{BTreeMap, HashMap};

use crate::domain::{Bet, BetId, Game, GameId, UserId, Wallet};

/// Everything the ledger lock guards.
#[derive(Debug)]
pub(super) struct LedgerState {
    pub(super) games: BTreeMap<GameId, Game>,
    /// Append-only, ordered by bet id.
    pub(super) bets: Vec<Bet>,
    pub(super) wallets: HashMap<UserId, Wallet>,
    /// Advanced only when a bet is recorded; failed attempts never consume an id.
    pub(super) next_bet_id: BetId,
}

impl LedgerState {
    pub(super) fn new(games: BTreeMap<GameId, Game>, wallets: HashMap<UserId, Wallet>) -> Self {
        Self {
            games,
            bets: Vec::new(),
            wallets,
            next_bet_id: BetId::new(1),
        }
    }

    pub(super) fn bets_for_game(&self, game_id: GameId) -> impl Iterator<Item = &Bet> {
        self.bets.iter().filter(move |bet| bet.game_id() == game_id)
    }
}
