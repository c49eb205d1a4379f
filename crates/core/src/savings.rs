//! # Savings Module
//!
//! Savings account: withdrawals can never take the balance below zero, and
//! interest is credited on demand at a fixed rate.

use crate::account::{sealed, Account};
use crate::error::{AccountError, AccountResult};
use crate::kind::AccountKind;
use crate::ledger::Ledger;
use crate::receipt::{Entry, Receipt};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, warn};

/// Interest rate used when none is given (5%)
pub const DEFAULT_INTEREST_RATE: Decimal = dec!(0.05);

/// Savings account
///
/// # Example
/// ```
/// use polybank_core::{Account, SavingsAccount};
/// use rust_decimal_macros::dec;
///
/// let mut account = SavingsAccount::new("X", dec!(100));
/// account.add_interest()?;
/// assert_eq!(account.balance(), dec!(105));
/// # Ok::<(), polybank_core::AccountError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SavingsAccount {
    ledger: Ledger,
    interest_rate: Decimal,
}

impl SavingsAccount {
    /// Open a savings account at the default interest rate
    pub fn new(name: impl Into<String>, balance: Decimal) -> Self {
        Self {
            ledger: Ledger::new(name, balance),
            interest_rate: DEFAULT_INTEREST_RATE,
        }
    }

    /// Open a savings account at a given rate. The rate must not be negative.
    pub fn with_interest_rate(
        name: impl Into<String>,
        balance: Decimal,
        interest_rate: Decimal,
    ) -> AccountResult<Self> {
        if interest_rate < Decimal::ZERO {
            return Err(AccountError::InvalidInterestRate(interest_rate));
        }

        Ok(Self {
            ledger: Ledger::new(name, balance),
            interest_rate,
        })
    }

    pub fn interest_rate(&self) -> Decimal {
        self.interest_rate
    }

    /// Credit `balance * interest_rate`. Repeated calls compound.
    ///
    /// Fails only on overflow, leaving the balance unchanged.
    pub fn add_interest(&mut self) -> AccountResult<Receipt> {
        let rate = self.interest_rate;
        let overflow = move || AccountError::overflow("add interest at rate", rate);
        let interest = self
            .ledger
            .balance()
            .checked_mul(rate)
            .ok_or_else(overflow)?;
        let balance = self.ledger.credit(interest).ok_or_else(overflow)?;
        debug!(account = self.name(), kind = self.kind().as_str(), %interest, %balance, "interest added");
        Ok(Receipt::new(self.kind(), Entry::InterestAdded { interest, balance }))
    }
}

impl Account for SavingsAccount {
    fn kind(&self) -> AccountKind {
        AccountKind::Savings
    }

    fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    fn ledger_mut(&mut self, _: sealed::Token) -> &mut Ledger {
        &mut self.ledger
    }

    fn withdraw(&mut self, amount: Decimal) -> AccountResult<Receipt> {
        let available = self.ledger.balance();
        if amount > available {
            warn!(account = self.name(), kind = self.kind().as_str(), %amount, %available, "savings withdrawal rejected");
            return Err(AccountError::InsufficientBalance {
                requested: amount,
                available,
            });
        }

        let balance = self
            .ledger
            .debit(amount)
            .ok_or_else(|| AccountError::overflow("withdraw", amount))?;
        debug!(account = self.name(), kind = self.kind().as_str(), %amount, %balance, "savings withdrawal");
        Ok(Receipt::new(self.kind(), Entry::Withdrawn { amount, balance }))
    }
}
