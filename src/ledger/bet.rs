use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info};

use super::state::LedgerState;
use super::{GameSnapshot, Ledger};
use crate::domain::{Bet, GameId, LedgerError, Selection, UserId, Wallet};

/// Input to [`Ledger::place_bet`].
///
/// `selection` and `stake` are kept as received so that validation happens
/// inside the ledger, in a fixed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BetRequest {
    pub user_id: UserId,
    pub game_id: GameId,
    pub selection: String,
    pub stake: i64,
}

impl BetRequest {
    pub fn new(
        user_id: UserId,
        game_id: GameId,
        selection: impl Into<String>,
        stake: i64,
    ) -> Self {
        Self {
            user_id,
            game_id,
            selection: selection.into(),
            stake,
        }
    }
}

/// Result of a successful bet: the new record plus copies of the wallet and
/// game as they stand immediately after it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BetReceipt {
    pub bet: Bet,
    pub wallet: Wallet,
    pub game: GameSnapshot,
}

impl Ledger {
    /// Stake tokens on one outcome of a pre-game game.
    ///
    /// Checks run in this order and the first failure is returned: user
    /// exists, stake is positive, balance covers the stake, game exists,
    /// game is pre-game, selection is valid, pool has room for the stake.
    /// On success the wallet debit, the pool increment and the new bet are
    /// applied together; on failure nothing changes.
    pub fn place_bet(&self, request: BetRequest) -> Result<BetReceipt, LedgerError> {
        let (user_id, game_id) = (request.user_id, request.game_id);
        let mut state = self.state.lock();

        match apply_bet(&mut state, request) {
            Ok(receipt) => {
                let selection = receipt.bet.selection();
                info!(
                    bet = %receipt.bet.id(),
                    user = %user_id,
                    game = %game_id,
                    selection = %selection,
                    stake = receipt.bet.stake(),
                    balance = receipt.wallet.balance(),
                    pool = receipt.game.game.pools().get(selection),
                    "Bet placed"
                );
                Ok(receipt)
            }
            Err(e) => {
                debug!(user = %user_id, game = %game_id, error = %e, "Bet rejected");
                Err(e)
            }
        }
    }
}

fn apply_bet(state: &mut LedgerState, request: BetRequest) -> Result<BetReceipt, LedgerError> {
    let BetRequest {
        user_id,
        game_id,
        selection,
        stake,
    } = request;

    let wallet = state
        .wallets
        .get_mut(&user_id)
        .ok_or(LedgerError::UserNotFound { user_id })?;
    let stake = match u64::try_from(stake) {
        Ok(stake) if stake > 0 => stake,
        _ => return Err(LedgerError::InvalidStake { stake }),
    };
    wallet.ensure_covers(stake)?;
    let game = state
        .games
        .get_mut(&game_id)
        .ok_or(LedgerError::GameNotFound { game_id })?;
    if !game.status().is_open() {
        return Err(LedgerError::GameAlreadySettled { game_id });
    }
    let selection: Selection = selection.parse()?;

    // The pool increment is the only effect that can fail, so it goes
    // first; the debit was covered above.
    game.add_stake(selection, stake)?;
    wallet.debit(stake);

    let id = state.next_bet_id;
    state.next_bet_id = id.next();
    let bet = Bet::new(id, user_id, game_id, selection, stake, Utc::now());
    state.bets.push(bet.clone());

    Ok(BetReceipt {
        bet,
        wallet: *wallet,
        game: GameSnapshot::from(&*game),
    })
}
