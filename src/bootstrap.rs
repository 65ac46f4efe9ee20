//! Demo fixtures applied at startup.
//!
//! The ledger itself starts empty; this is a separate step that the
//! `serve` command runs unless demo data is disabled in the config.

use chrono::{DateTime, Duration, Utc};
use tracing::info;

use crate::domain::{Game, GameId, Pools, UserId};
use crate::ledger::LedgerBuilder;

/// The single funded demo user.
pub const DEMO_USER: UserId = UserId::new(1);

/// Tokens granted to [`DEMO_USER`].
pub const DEMO_BALANCE: u64 = 1000;

/// Demo games, starting relative to `now`.
pub fn demo_games(now: DateTime<Utc>) -> Vec<Game> {
    vec![
        Game::new(
            GameId::new(101),
            "Flag Football",
            "Welsh Fam Whirls",
            "Lewis Chicks",
            now + Duration::minutes(30),
        )
        .with_pools(Pools::new(100, 100, 0)),
        Game::new(
            GameId::new(102),
            "Soccer",
            "Alumni",
            "Dillon",
            now + Duration::minutes(90),
        )
        .with_pools(Pools::new(150, 120, 30)),
        Game::new(
            GameId::new(103),
            "Volleyball",
            "Cat Food",
            "Kiss My Ace",
            now + Duration::minutes(90),
        )
        .with_pools(Pools::new(150, 120, 30)),
    ]
}

/// Add the demo wallet and games to a ledger under construction.
pub fn seed_demo(builder: LedgerBuilder) -> LedgerBuilder {
    let builder = demo_games(Utc::now())
        .into_iter()
        .fold(builder.wallet(DEMO_USER, DEMO_BALANCE), LedgerBuilder::game);
    info!(games = builder.game_count(), "Demo data seeded");
    builder
}
