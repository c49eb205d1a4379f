//! # Ledger Module
//!
//! Name and balance shared by every account variant.
//!
//! The balance can only move through `credit` and `debit`, which are
//! crate-private, and the module itself is not exported: outside this crate
//! the only way to change a balance is an account operation.

use rust_decimal::Decimal;

/// Base state of an account
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    name: String,
    balance: Decimal,
}

impl Ledger {
    pub(crate) fn new(name: impl Into<String>, balance: Decimal) -> Self {
        Self {
            name: name.into(),
            balance,
        }
    }

    /// Account holder name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Add to the balance, returns the new balance.
    ///
    /// `None` on overflow, balance untouched.
    pub(crate) fn credit(&mut self, amount: Decimal) -> Option<Decimal> {
        self.balance = self.balance.checked_add(amount)?;
        Some(self.balance)
    }

    /// Subtract from the balance without any policy check, returns the new
    /// balance.
    ///
    /// `None` on overflow, balance untouched.
    pub(crate) fn debit(&mut self, amount: Decimal) -> Option<Decimal> {
        self.balance = self.balance.checked_sub(amount)?;
        Some(self.balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_credit_debit() {
        let mut ledger = Ledger::new("Alice", dec!(100));

        assert_eq!(ledger.credit(dec!(50)), Some(dec!(150)));
        assert_eq!(ledger.debit(dec!(200)), Some(dec!(-50)));
        assert_eq!(ledger.balance(), dec!(-50));
        assert_eq!(ledger.name(), "Alice");
    }

    #[test]
    fn test_overflow_leaves_balance() {
        let mut ledger = Ledger::new("Alice", dec!(1000));
        assert_eq!(ledger.credit(Decimal::MAX), None);
        assert_eq!(ledger.balance(), dec!(1000));

        let mut ledger = Ledger::new("Bob", dec!(-1000));
        assert_eq!(ledger.debit(Decimal::MAX), None);
        assert_eq!(ledger.balance(), dec!(-1000));
    }
}
