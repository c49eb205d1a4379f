//! # Error Module
//!
//! Domain errors for the account model, built with thiserror.
//!
//! A rejected withdrawal is a business outcome, not a fault: the balance is
//! left untouched and the caller reports the message and carries on. An
//! arithmetic overflow is handled the same way.

use rust_decimal::Decimal;
use thiserror::Error;

/// Account errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccountError {
    // === Withdrawal rejections ===
    #[error("Insufficient balance! Cannot withdraw {requested}.")]
    InsufficientBalance {
        requested: Decimal,
        available: Decimal,
    },

    #[error("Overdraft limit exceeded! Cannot withdraw {requested}.")]
    OverdraftLimitExceeded { requested: Decimal, limit: Decimal },

    // === Arithmetic errors ===
    #[error("Amount overflow! Cannot {operation} {amount}.")]
    AmountOverflow {
        operation: &'static str,
        amount: Decimal,
    },

    // === Validation errors ===
    #[error("Invalid interest rate: {0} (must not be negative)")]
    InvalidInterestRate(Decimal),

    #[error("Invalid overdraft limit: {0} (must not be negative)")]
    InvalidOverdraftLimit(Decimal),
}

/// Result type alias with AccountError
pub type AccountResult<T> = Result<T, AccountError>;

impl AccountError {
    /// Create amount overflow error
    pub fn overflow(operation: &'static str, amount: Decimal) -> Self {
        Self::AmountOverflow { operation, amount }
    }

    /// Whether this error is a withdrawal policy refusing the amount
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            AccountError::InsufficientBalance { .. } | AccountError::OverdraftLimitExceeded { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_display() {
        let err = AccountError::InsufficientBalance {
            requested: dec!(1200),
            available: dec!(300),
        };
        assert_eq!(err.to_string(), "Insufficient balance! Cannot withdraw 1200.");

        let err = AccountError::OverdraftLimitExceeded {
            requested: dec!(9000.50),
            limit: dec!(5000),
        };
        assert_eq!(
            err.to_string(),
            "Overdraft limit exceeded! Cannot withdraw 9000.50."
        );

        let err = AccountError::overflow("deposit", dec!(10));
        assert_eq!(err.to_string(), "Amount overflow! Cannot deposit 10.");
    }

    #[test]
    fn test_error_checks() {
        let err = AccountError::InsufficientBalance {
            requested: dec!(100),
            available: dec!(50),
        };
        assert!(err.is_rejection());

        let err = AccountError::overflow("deposit", Decimal::MAX);
        assert!(!err.is_rejection());

        let err = AccountError::InvalidInterestRate(dec!(-0.01));
        assert!(!err.is_rejection());
        assert!(err.to_string().contains("-0.01"));
    }
}
