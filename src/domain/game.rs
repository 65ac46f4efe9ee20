//! Games, their outcome pools and lifecycle.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::LedgerError;
use super::id::GameId;

/// One of the three outcomes a stake can back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection {
    Home,
    Away,
    Draw,
}

impl Selection {
    /// All selections, in pool order.
    pub const ALL: [Selection; 3] = [Selection::Home, Selection::Away, Selection::Draw];

    /// Wire name of the selection.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Away => "away",
            Self::Draw => "draw",
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Selection {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Self::Home),
            "away" => Ok(Self::Away),
            "draw" => Ok(Self::Draw),
            other => Err(LedgerError::InvalidSelection {
                selection: other.to_string(),
            }),
        }
    }
}

/// Lifecycle state of a game. `Settled` is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    PreGame,
    Settled,
}

impl GameStatus {
    /// Returns true while the game still accepts bets.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, GameStatus::PreGame)
    }
}

/// Cumulative tokens staked on each outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pools {
    #[serde(rename = "home_pool_tokens")]
    pub home: u64,
    #[serde(rename = "away_pool_tokens")]
    pub away: u64,
    #[serde(rename = "draw_pool_tokens")]
    pub draw: u64,
}

impl Pools {
    #[must_use]
    pub const fn new(home: u64, away: u64, draw: u64) -> Self {
        Self { home, away, draw }
    }

    /// Sum of all three pools, widened so it cannot overflow.
    #[must_use]
    pub const fn total(&self) -> u128 {
        self.home as u128 + self.away as u128 + self.draw as u128
    }

    /// Pool backing the given selection.
    #[must_use]
    pub const fn get(&self, selection: Selection) -> u64 {
        match selection {
            Selection::Home => self.home,
            Selection::Away => self.away,
            Selection::Draw => self.draw,
        }
    }

    /// Pools after adding `stake` to `selection`, or `None` if that pool or
    /// the total would no longer fit in a `u64`.
    #[must_use]
    pub fn with_stake(self, selection: Selection, stake: u64) -> Option<Self> {
        let mut next = self;
        let pool = next.get_mut(selection);
        *pool = pool.checked_add(stake)?;
        (next.total() <= u128::from(u64::MAX)).then_some(next)
    }

    fn get_mut(&mut self, selection: Selection) -> &mut u64 {
        match selection {
            Selection::Home => &mut self.home,
            Selection::Away => &mut self.away,
            Selection::Draw => &mut self.draw,
        }
    }
}

/// A contest with three-way wagering pools.
///
/// Identity fields never change after construction. Pools only grow while
/// the game is [`GameStatus::PreGame`] and are frozen once it settles.
/// `result` is set exactly when the status becomes `Settled`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    id: GameId,
    sport: String,
    home: String,
    away: String,
    start_time: DateTime<Utc>,
    status: GameStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    result: Option<Selection>,
    #[serde(flatten)]
    pools: Pools,
}

impl Game {
    /// Create a pre-game game with empty pools.
    pub fn new(
        id: GameId,
        sport: impl Into<String>,
        home: impl Into<String>,
        away: impl Into<String>,
        start_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            sport: sport.into(),
            home: home.into(),
            away: away.into(),
            start_time,
            status: GameStatus::PreGame,
            result: None,
            pools: Pools::default(),
        }
    }

    /// Start the game with pre-funded pools.
    #[must_use]
    pub fn with_pools(mut self, pools: Pools) -> Self {
        self.pools = pools;
        self
    }

    #[must_use]
    pub fn id(&self) -> GameId {
        self.id
    }

    #[must_use]
    pub fn sport(&self) -> &str {
        &self.sport
    }

    /// Home side name.
    #[must_use]
    pub fn home(&self) -> &str {
        &self.home
    }

    /// Away side name.
    #[must_use]
    pub fn away(&self) -> &str {
        &self.away
    }

    #[must_use]
    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn result(&self) -> Option<Selection> {
        self.result
    }

    #[must_use]
    pub fn pools(&self) -> Pools {
        self.pools
    }

    /// Add a stake to the pool for `selection`. Pools are untouched when
    /// the addition would overflow.
    pub(crate) fn add_stake(
        &mut self,
        selection: Selection,
        stake: u64,
    ) -> Result<(), LedgerError> {
        debug_assert!(self.status.is_open(), "stake added to settled game");
        self.pools = self
            .pools
            .with_stake(selection, stake)
            .ok_or(LedgerError::PoolOverflow { game_id: self.id })?;
        Ok(())
    }

    /// Terminal transition to `Settled` with the given result.
    pub(crate) fn settle(&mut self, result: Selection) {
        debug_assert!(self.status.is_open(), "game settled twice");
        self.status = GameStatus::Settled;
        self.result = Some(result);
    }
}
