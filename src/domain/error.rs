//! Ledger errors for rejected operations.
//!
//! Every variant is a caller-correctable domain error. Validation always
//! precedes mutation, so returning one of these means ledger state is
//! unchanged.
//!
//! # Examples
//!
//! ```
//! use parimutuel::domain::error::LedgerError;
//! use parimutuel::domain::UserId;
//!
//! let err = LedgerError::UserNotFound { user_id: UserId::new(9) };
//! assert_eq!(err.code(), "user_not_found");
//! assert_eq!(err.to_string(), "user 9 not found");
//! ```

use thiserror::Error;

use super::id::{GameId, UserId};

/// Errors returned by ledger operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// No wallet exists for the user.
    #[error("user {user_id} not found")]
    UserNotFound {
        /// The user that was looked up.
        user_id: UserId,
    },

    /// Stakes must be positive token amounts.
    #[error("stake must be positive, got {stake}")]
    InvalidStake {
        /// The rejected stake.
        stake: i64,
    },

    /// The wallet cannot cover the stake.
    #[error("insufficient balance: {balance} < {stake}")]
    InsufficientBalance {
        /// Wallet balance at the time of the attempt.
        balance: u64,
        /// The requested stake.
        stake: u64,
    },

    /// No game exists with the id.
    #[error("game {game_id} not found")]
    GameNotFound {
        /// The game that was looked up.
        game_id: GameId,
    },

    /// Bets are only accepted while a game is pre-game.
    #[error("game {game_id} is already settled")]
    GameAlreadySettled {
        /// The settled game.
        game_id: GameId,
    },

    /// The selection is not one of `home`, `away` or `draw`.
    #[error("invalid selection '{selection}'")]
    InvalidSelection {
        /// The rejected selection text.
        selection: String,
    },

    /// The admin credential did not match.
    #[error("forbidden")]
    Forbidden,

    /// Settlement was attempted on a game that is already settled.
    #[error("game {game_id} already settled")]
    AlreadySettled {
        /// The settled game.
        game_id: GameId,
    },

    /// The stake would push a pool or the game total past `u64::MAX`.
    #[error("pool overflow on game {game_id}")]
    PoolOverflow { game_id: GameId },

    /// A payout would push a wallet past `u64::MAX`.
    #[error("balance overflow for user {user_id}")]
    BalanceOverflow { user_id: UserId },
}

impl LedgerError {
    /// Stable snake_case code for wire responses.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound { .. } => "user_not_found",
            Self::InvalidStake { .. } => "invalid_stake",
            Self::InsufficientBalance { .. } => "insufficient_balance",
            Self::GameNotFound { .. } => "game_not_found",
            Self::GameAlreadySettled { .. } => "game_already_settled",
            Self::InvalidSelection { .. } => "invalid_selection",
            Self::Forbidden => "forbidden",
            Self::AlreadySettled { .. } => "already_settled",
            Self::PoolOverflow { .. } => "pool_overflow",
            Self::BalanceOverflow { .. } => "balance_overflow",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct() {
        let errors = [
            LedgerError::UserNotFound {
                user_id: UserId::new(1),
            },
            LedgerError::InvalidStake { stake: 0 },
            LedgerError::InsufficientBalance {
                balance: 1,
                stake: 2,
            },
            LedgerError::GameNotFound {
                game_id: GameId::new(1),
            },
            LedgerError::GameAlreadySettled {
                game_id: GameId::new(1),
            },
            LedgerError::InvalidSelection {
                selection: "x".into(),
            },
            LedgerError::Forbidden,
            LedgerError::AlreadySettled {
                game_id: GameId::new(1),
            },
            LedgerError::PoolOverflow {
                game_id: GameId::new(1),
            },
            LedgerError::BalanceOverflow {
                user_id: UserId::new(1),
            },
        ];
        let mut codes: Vec<_> = errors.iter().map(LedgerError::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn display_includes_amounts() {
        let err = LedgerError::InsufficientBalance {
            balance: 50,
            stake: 100,
        };
        assert_eq!(err.to_string(), "insufficient balance: 50 < 100");
    }
}
