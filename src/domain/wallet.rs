//! Per-user token wallets.

use serde::{Deserialize, Serialize};

use super::error::LedgerError;
use super::id::UserId;

/// A user's token balance. The balance never goes negative: debits are
/// checked before they are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    user_id: UserId,
    #[serde(rename = "tokens_balance")]
    balance: u64,
}

impl Wallet {
    #[must_use]
    pub const fn new(user_id: UserId, balance: u64) -> Self {
        Self { user_id, balance }
    }

    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    #[must_use]
    pub fn balance(&self) -> u64 {
        self.balance
    }

    /// Check that `amount` can be debited without going negative.
    pub fn ensure_covers(&self, amount: u64) -> Result<(), LedgerError> {
        if self.balance < amount {
            return Err(LedgerError::InsufficientBalance {
                balance: self.balance,
                stake: amount,
            });
        }
        Ok(())
    }

    /// Debit a previously checked amount.
    pub(crate) fn debit(&mut self, amount: u64) {
        debug_assert!(self.balance >= amount, "debit exceeds balance");
        self.balance -= amount;
    }

    /// Credit `amount`. The balance is untouched if it would overflow.
    pub(crate) fn credit(&mut self, amount: u64) -> Result<(), LedgerError> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow {
                user_id: self.user_id,
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_covers_exact_balance() {
        let wallet = Wallet::new(UserId::new(1), 100);
        assert!(wallet.ensure_covers(100).is_ok());
        assert_eq!(
            wallet.ensure_covers(101),
            Err(LedgerError::InsufficientBalance {
                balance: 100,
                stake: 101
            })
        );
    }

    #[test]
    fn debit_and_credit() {
        let mut wallet = Wallet::new(UserId::new(1), 1000);
        wallet.debit(100);
        assert_eq!(wallet.balance(), 900);
        wallet.credit(150).unwrap();
        assert_eq!(wallet.balance(), 1050);
    }

    #[test]
    fn credit_rejects_overflow() {
        let mut wallet = Wallet::new(UserId::new(4), u64::MAX - 1);
        assert_eq!(
            wallet.credit(2),
            Err(LedgerError::BalanceOverflow {
                user_id: UserId::new(4)
            })
        );
        assert_eq!(wallet.balance(), u64::MAX - 1);
    }

    #[test]
    fn serializes_wire_field_names() {
        let json = serde_json::to_value(Wallet::new(UserId::new(1), 900)).unwrap();
        assert_eq!(json["user_id"], 1);
        assert_eq!(json["tokens_balance"], 900);
    }
}
