//! # Current Module
//!
//! Current account: withdrawals may overdraw the balance down to
//! `-overdraft_limit`, and fees can be charged against it.

use crate::account::{sealed, Account};
use crate::error::{AccountError, AccountResult};
use crate::kind::AccountKind;
use crate::ledger::Ledger;
use crate::receipt::{Entry, Receipt};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, warn};

/// Overdraft limit used when none is given
pub const DEFAULT_OVERDRAFT_LIMIT: Decimal = dec!(5000);

/// Current account
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentAccount {
    ledger: Ledger,
    overdraft_limit: Decimal,
}

impl CurrentAccount {
    /// Open a current account with the default overdraft limit
    pub fn new(name: impl Into<String>, balance: Decimal) -> Self {
        Self {
            ledger: Ledger::new(name, balance),
            overdraft_limit: DEFAULT_OVERDRAFT_LIMIT,
        }
    }

    /// Open a current account with a given overdraft limit. The limit must
    /// not be negative.
    pub fn with_overdraft_limit(
        name: impl Into<String>,
        balance: Decimal,
        overdraft_limit: Decimal,
    ) -> AccountResult<Self> {
        if overdraft_limit < Decimal::ZERO {
            return Err(AccountError::InvalidOverdraftLimit(overdraft_limit));
        }

        Ok(Self {
            ledger: Ledger::new(name, balance),
            overdraft_limit,
        })
    }

    pub fn overdraft_limit(&self) -> Decimal {
        self.overdraft_limit
    }

    /// Charge a fee.
    ///
    /// NOTE: unlike `withdraw`, no overdraft check is applied here, so a fee
    /// can take the balance below `-overdraft_limit`. Callers rely on this.
    /// Fails only on overflow, leaving the balance unchanged.
    pub fn charge_fee(&mut self, fee: Decimal) -> AccountResult<Receipt> {
        let balance = self
            .ledger
            .debit(fee)
            .ok_or_else(|| AccountError::overflow("charge fee", fee))?;
        debug!(account = self.name(), kind = self.kind().as_str(), %fee, %balance, "fee charged");
        Ok(Receipt::new(self.kind(), Entry::FeeCharged { fee, balance }))
    }
}

impl Account for CurrentAccount {
    fn kind(&self) -> AccountKind {
        AccountKind::Current
    }

    fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    fn ledger_mut(&mut self, _: sealed::Token) -> &mut Ledger {
        &mut self.ledger
    }

    fn withdraw(&mut self, amount: Decimal) -> AccountResult<Receipt> {
        // A ceiling past Decimal::MAX cannot be exceeded
        let ceiling = self.ledger.balance().checked_add(self.overdraft_limit);
        if ceiling.is_some_and(|ceiling| amount > ceiling) {
            warn!(
                account = self.name(),
                kind = self.kind().as_str(),
                %amount,
                balance = %self.ledger.balance(),
                limit = %self.overdraft_limit,
                "overdraft limit exceeded"
            );
            return Err(AccountError::OverdraftLimitExceeded {
                requested: amount,
                limit: self.overdraft_limit,
            });
        }

        let balance = self
            .ledger
            .debit(amount)
            .ok_or_else(|| AccountError::overflow("withdraw", amount))?;
        debug!(account = self.name(), kind = self.kind().as_str(), %amount, %balance, "current withdrawal");
        Ok(Receipt::new(self.kind(), Entry::Withdrawn { amount, balance }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account() {
        let account = CurrentAccount::new("Bob", dec!(2000));
        assert_eq!(account.name(), "Bob");
        assert_eq!(account.balance(), dec!(2000));
        assert_eq!(account.overdraft_limit(), dec!(5000));
        assert_eq!(account.kind(), AccountKind::Current);
    }

    #[test]
    fn test_invalid_overdraft_limit() {
        let result = CurrentAccount::with_overdraft_limit("Bob", dec!(100), dec!(-1));
        assert_eq!(result, Err(AccountError::InvalidOverdraftLimit(dec!(-1))));
    }

    #[test]
    fn test_withdraw_within_balance() {
        let mut account = CurrentAccount::new("Bob", dec!(2500));
        let receipt = account.withdraw(dec!(1200)).unwrap();

        assert_eq!(account.balance(), dec!(1300));
        assert_eq!(
            receipt.to_string(),
            "CurrentAccount: Withdrawn 1200. Remaining balance = 1300"
        );
    }

    #[test]
    fn test_withdraw_into_overdraft() {
        let mut account = CurrentAccount::with_overdraft_limit("Bob", dec!(100), dec!(50)).unwrap();

        assert!(account.withdraw(dec!(150)).is_ok());
        assert_eq!(account.balance(), dec!(-50));
    }

    #[test]
    fn test_withdraw_over_limit() {
        let mut account = CurrentAccount::with_overdraft_limit("Bob", dec!(100), dec!(50)).unwrap();
        let err = account.withdraw(dec!(150.5)).unwrap_err();

        assert!(err.is_rejection());
        assert_eq!(
            err.to_string(),
            "Overdraft limit exceeded! Cannot withdraw 150.5."
        );
        assert_eq!(account.balance(), dec!(100));
    }

    #[test]
    fn test_charge_fee_ignores_overdraft_limit() {
        let mut account = CurrentAccount::with_overdraft_limit("Y", dec!(100), dec!(50)).unwrap();
        let receipt = account.charge_fee(dec!(200)).unwrap();

        assert_eq!(account.balance(), dec!(-100));
        assert!(account.balance() < -account.overdraft_limit());
        assert_eq!(
            receipt.to_string(),
            "CurrentAccount: Fee of 200 charged. Remaining balance = -100"
        );
    }

    #[test]
    fn test_charge_fee_overflow_leaves_balance() {
        let mut account = CurrentAccount::new("Bob", dec!(-100));
        let err = account.charge_fee(Decimal::MAX).unwrap_err();

        assert_eq!(err, AccountError::overflow("charge fee", Decimal::MAX));
        assert_eq!(account.balance(), dec!(-100));
    }

    #[test]
    fn test_withdraw_with_unbounded_ceiling() {
        let mut account = CurrentAccount::with_overdraft_limit("Bob", Decimal::MAX, dec!(5000)).unwrap();

        assert!(account.withdraw(dec!(1)).is_ok());
        assert_eq!(account.balance(), Decimal::MAX - dec!(1));
    }
}
