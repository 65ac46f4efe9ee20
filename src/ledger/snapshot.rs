use serde::{Deserialize, Serialize};

use crate::domain::{Game, Odds};

/// A detached copy of a game with odds computed at read time.
///
/// Changing a snapshot never touches ledger state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    #[serde(flatten)]
    pub game: Game,
    #[serde(flatten)]
    pub odds: Odds,
}

impl From<&Game> for GameSnapshot {
    fn from(game: &Game) -> Self {
        Self {
            game: game.clone(),
            odds: Odds::from(game.pools()),
        }
    }
}
