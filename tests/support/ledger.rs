use parimutuel::domain::{GameId, UserId};
use parimutuel::ledger::{BetRequest, Ledger};

pub fn bet(user: UserId, game: GameId, selection: &str, stake: i64) -> BetRequest {
    BetRequest::new(user, game, selection, stake)
}

pub fn balance(ledger: &Ledger, user: UserId) -> u64 {
    ledger.wallet(user).expect("wallet exists").balance()
}

/// Sum of all pools on every game.
pub fn pooled_tokens(ledger: &Ledger) -> u128 {
    ledger
        .list_games()
        .iter()
        .map(|g| g.game.pools().total())
        .sum()
}
