use std::collections::HashMap;

use tracing::{debug, error, info, warn};

use super::state::LedgerState;
use super::{GameSnapshot, Ledger};
use crate::domain::{Bet, BetId, GameId, LedgerError, Pools, Selection, UserId, Wallet};

/// Tokens credited to one winning bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payout {
    pub bet_id: BetId,
    pub user_id: UserId,
    pub amount: u64,
}

/// Pari-mutuel payouts for a game settled with `result`.
///
/// Each winning bet receives `floor(stake * total / winner_pool)`, the
/// exact floor of its share of the winning pool applied to the whole pool.
/// Rounding residue stays undistributed. When nobody backed `result` the
/// pool is forfeited and no payouts are produced. Losing bets are skipped,
/// and each payout is independent of every other bet, so input order does
/// not matter.
pub fn compute_payouts<'a>(
    bets: impl IntoIterator<Item = &'a Bet>,
    result: Selection,
    pools: Pools,
) -> Vec<Payout> {
    let winner_pool = pools.get(result);
    if winner_pool == 0 {
        return Vec::new();
    }
    let total = pools.total();

    bets.into_iter()
        .filter(|bet| bet.selection() == result)
        .map(|bet| {
            // stake <= winner_pool, so the share is at most `total`.
            let amount = (u128::from(bet.stake()) * total / u128::from(winner_pool)).min(total);
            Payout {
                bet_id: bet.id(),
                user_id: bet.user_id(),
                // Only pools seeded past u64::MAX in total can saturate here.
                amount: u64::try_from(amount).unwrap_or(u64::MAX),
            }
        })
        .collect()
}

impl Ledger {
    /// Check a settlement credential without touching any game.
    pub fn authorize(&self, admin_key: &str) -> Result<(), LedgerError> {
        if admin_key == self.admin_key {
            Ok(())
        } else {
            Err(LedgerError::Forbidden)
        }
    }

    /// Settle a game and pay out its pools to the winning bets.
    ///
    /// Requires the admin credential. The status change and every wallet
    /// credit happen under one lock acquisition, so no caller can see a
    /// settled game with only some payouts applied.
    pub fn settle(
        &self,
        admin_key: &str,
        game_id: GameId,
        result: Selection,
    ) -> Result<GameSnapshot, LedgerError> {
        if let Err(e) = self.authorize(admin_key) {
            warn!(game = %game_id, "Settlement rejected: bad admin credential");
            return Err(e);
        }

        let mut state = self.state.lock();
        apply_settlement(&mut state, game_id, result).map_err(|e| {
            debug!(game = %game_id, error = %e, "Settlement rejected");
            e
        })
    }
}

fn apply_settlement(
    state: &mut LedgerState,
    game_id: GameId,
    result: Selection,
) -> Result<GameSnapshot, LedgerError> {
    let game = state
        .games
        .get_mut(&game_id)
        .ok_or(LedgerError::GameNotFound { game_id })?;
    if !game.status().is_open() {
        return Err(LedgerError::AlreadySettled { game_id });
    }

    let pools = game.pools();
    let payouts = compute_payouts(
        state.bets.iter().filter(|bet| bet.game_id() == game_id),
        result,
        pools,
    );

    // Credits are staged on copies so an overflow leaves the game open and
    // every wallet as it was.
    let mut credited: HashMap<UserId, Wallet> = HashMap::new();
    let mut paid = 0u128;
    for payout in &payouts {
        let current = credited
            .get(&payout.user_id)
            .or_else(|| state.wallets.get(&payout.user_id))
            .copied();
        let Some(mut wallet) = current else {
            error!(
                bet = %payout.bet_id,
                user = %payout.user_id,
                "Winning bet has no wallet"
            );
            continue;
        };
        wallet.credit(payout.amount)?;
        credited.insert(payout.user_id, wallet);
        paid += u128::from(payout.amount);
    }

    game.settle(result);
    state.wallets.extend(credited);

    info!(
        game = %game_id,
        result = %result,
        total = pools.total(),
        winner_pool = pools.get(result),
        winners = payouts.len(),
        paid,
        residue = pools.total().saturating_sub(paid),
        "Game settled"
    );

    Ok(GameSnapshot::from(&*game))
}
