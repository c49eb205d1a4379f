//! # Kind Module
//!
//! The variant tag carried by every account. Reports name the variant
//! through this tag instead of asking the value for its type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Account variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    /// Base account with no withdrawal policy of its own
    Generic,
    /// Savings account, no overdraft, earns interest
    Savings,
    /// Current account with an overdraft facility and fees
    Current,
}

impl AccountKind {
    /// Code string (matches the serde representation)
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Generic => "generic",
            AccountKind::Savings => "savings",
            AccountKind::Current => "current",
        }
    }

    /// Name printed at the start of every transcript line
    pub fn report_name(&self) -> &'static str {
        match self {
            AccountKind::Generic => "BankAccount",
            AccountKind::Savings => "SavingsAccount",
            AccountKind::Current => "CurrentAccount",
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.report_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_names() {
        assert_eq!(AccountKind::Generic.to_string(), "BankAccount");
        assert_eq!(AccountKind::Savings.to_string(), "SavingsAccount");
        assert_eq!(AccountKind::Current.to_string(), "CurrentAccount");
    }

    #[test]
    fn test_as_str_matches_serde() {
        for kind in [AccountKind::Generic, AccountKind::Savings, AccountKind::Current] {
            assert_eq!(serde_json::to_value(kind).unwrap(), kind.as_str());
        }
    }
}
