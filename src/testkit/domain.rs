//! Builders for ledger fixtures used across tests.
//!
//! Provides a small, explicit ledger so tests focus on assertions rather
//! than construction boilerplate and never depend on the demo seed data.

use chrono::{Duration, Utc};

use crate::domain::{Game, GameId, Pools, UserId};
use crate::ledger::{Ledger, LedgerBuilder};

/// Admin credential used by [`ledger`].
pub const ADMIN_KEY: &str = "test-admin-key";

/// Funded user in [`ledger`].
pub const USER: UserId = UserId::new(1);

/// Second funded user in [`ledger`].
pub const OTHER_USER: UserId = UserId::new(2);

/// Starting balance of every funded user.
pub const STARTING_BALANCE: u64 = 1000;

/// Game with pools `home=100, away=100, draw=0`.
pub const SEEDED_GAME: GameId = GameId::new(101);

/// Game with empty pools.
pub const EMPTY_GAME: GameId = GameId::new(102);

/// A pre-game game starting in an hour.
pub fn game(id: GameId, pools: Pools) -> Game {
    Game::new(
        id,
        "Flag Football",
        "Home Side",
        "Away Side",
        Utc::now() + Duration::hours(1),
    )
    .with_pools(pools)
}

/// Builder pre-loaded with the canonical fixtures, for tests that add more.
pub fn ledger_builder() -> LedgerBuilder {
    Ledger::builder(ADMIN_KEY)
        .wallet(USER, STARTING_BALANCE)
        .wallet(OTHER_USER, STARTING_BALANCE)
        .game(game(SEEDED_GAME, Pools::new(100, 100, 0)))
        .game(game(EMPTY_GAME, Pools::default()))
}

/// The canonical fixture ledger: two funded users, one seeded game and one
/// empty game.
pub fn ledger() -> Ledger {
    ledger_builder().build()
}
