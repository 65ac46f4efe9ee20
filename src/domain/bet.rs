//! Immutable bet records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::game::Selection;
use super::id::{BetId, GameId, UserId};

/// A stake placed on one outcome of a game.
///
/// Bets are never mutated or removed once recorded; together they form the
/// audit trail of every pool contribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bet {
    id: BetId,
    user_id: UserId,
    game_id: GameId,
    selection: Selection,
    #[serde(rename = "stake_tokens")]
    stake: u64,
    placed_at: DateTime<Utc>,
}

impl Bet {
    /// Create a new bet record.
    #[must_use]
    pub fn new(
        id: BetId,
        user_id: UserId,
        game_id: GameId,
        selection: Selection,
        stake: u64,
        placed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            game_id,
            selection,
            stake,
            placed_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> BetId {
        self.id
    }

    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    #[must_use]
    pub fn game_id(&self) -> GameId {
        self.game_id
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Tokens staked.
    #[must_use]
    pub fn stake(&self) -> u64 {
        self.stake
    }

    #[must_use]
    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_wire_field_names() {
        let placed_at = Utc::now();
        let bet = Bet::new(
            BetId::new(1),
            UserId::new(2),
            GameId::new(101),
            Selection::Home,
            100,
            placed_at,
        );
        let json = serde_json::to_value(&bet).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["user_id"], 2);
        assert_eq!(json["game_id"], 101);
        assert_eq!(json["selection"], "home");
        assert_eq!(json["stake_tokens"], 100);
        assert!(json["placed_at"].is_string());
    }
}
