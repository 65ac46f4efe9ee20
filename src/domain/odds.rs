//! Implied odds derived from pool sizes.
//!
//! Odds are never stored. Every read path recomputes them from the current
//! pools with [`compute_odds`].

use serde::{Deserialize, Serialize};

use super::game::{Pools, Selection};

/// Each outcome's fraction of the total pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Odds {
    #[serde(rename = "home_odds")]
    pub home: f64,
    #[serde(rename = "away_odds")]
    pub away: f64,
    #[serde(rename = "draw_odds")]
    pub draw: f64,
}

impl Odds {
    /// Odds for one selection.
    #[must_use]
    pub fn get(&self, selection: Selection) -> f64 {
        match selection {
            Selection::Home => self.home,
            Selection::Away => self.away,
            Selection::Draw => self.draw,
        }
    }

    /// Sum of the three odds; 1.0 (within float tolerance) for any funded pool.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.home + self.away + self.draw
    }
}

impl From<Pools> for Odds {
    fn from(pools: Pools) -> Self {
        compute_odds(pools.home, pools.away, pools.draw)
    }
}

/// Compute implied odds for a three-way pool.
///
/// An empty pool yields all-zero odds rather than dividing by zero.
#[must_use]
pub fn compute_odds(home_pool: u64, away_pool: u64, draw_pool: u64) -> Odds {
    let total = home_pool as f64 + away_pool as f64 + draw_pool as f64;
    if total <= 0.0 {
        return Odds::default();
    }
    Odds {
        home: home_pool as f64 / total,
        away: away_pool as f64 / total,
        draw: draw_pool as f64 / total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn empty_pool_is_all_zero() {
        let odds = compute_odds(0, 0, 0);
        assert_eq!(odds, Odds::default());
        assert_eq!(odds.sum(), 0.0);
    }

    #[test]
    fn fractions_of_total() {
        let odds = compute_odds(150, 120, 30);
        assert!((odds.home - 0.5).abs() < EPSILON);
        assert!((odds.away - 0.4).abs() < EPSILON);
        assert!((odds.draw - 0.1).abs() < EPSILON);
    }

    #[test]
    fn single_funded_pool_takes_all() {
        let odds = compute_odds(0, 0, 7);
        assert_eq!(odds.get(Selection::Draw), 1.0);
        assert_eq!(odds.get(Selection::Home), 0.0);
    }

    #[test]
    fn funded_odds_sum_to_one() {
        let triples = [
            (1, 0, 0),
            (1, 1, 1),
            (3, 7, 11),
            (100, 100, 0),
            (u64::from(u32::MAX), 1, 12_345),
            (999_999_937, 2, 3),
        ];
        for (h, a, d) in triples {
            let odds = compute_odds(h, a, d);
            assert!((odds.sum() - 1.0).abs() < EPSILON, "{h},{a},{d} -> {odds:?}");
            assert!(odds.home >= 0.0 && odds.away >= 0.0 && odds.draw >= 0.0);
        }
    }

    #[test]
    fn from_pools_matches_compute() {
        let pools = Pools::new(200, 100, 0);
        assert_eq!(Odds::from(pools), compute_odds(200, 100, 0));
    }

    #[test]
    fn serializes_wire_field_names() {
        let json = serde_json::to_value(compute_odds(1, 1, 0)).unwrap();
        assert_eq!(json["home_odds"], 0.5);
        assert_eq!(json["away_odds"], 0.5);
        assert_eq!(json["draw_odds"], 0.0);
    }
}
