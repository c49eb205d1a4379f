//! # Receipt Module
//!
//! Outcome of a reported account operation. `Display` renders the
//! transcript line: `<VariantName>: <description>`.
//!
//! Amounts print with the scale their computation produced, so interest on
//! a whole balance at `0.05` shows as `15.00`.

use crate::kind::AccountKind;
use rust_decimal::Decimal;
use std::fmt;

/// What an operation did to an account
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Deposited { amount: Decimal, balance: Decimal },
    Withdrawn { amount: Decimal, balance: Decimal },
    /// Base withdrawal: nothing moved
    GenericWithdrawal { requested: Decimal },
    Balance { name: String, balance: Decimal },
    InterestAdded { interest: Decimal, balance: Decimal },
    FeeCharged { fee: Decimal, balance: Decimal },
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Deposited { amount, balance } => {
                write!(f, "Deposited {amount}. New balance = {balance}")
            }
            Entry::Withdrawn { amount, balance } => {
                write!(f, "Withdrawn {amount}. Remaining balance = {balance}")
            }
            Entry::GenericWithdrawal { .. } => {
                write!(f, "Generic withdrawal, override in subclass")
            }
            Entry::Balance { name, balance } => {
                write!(f, "{name}'s current balance = {balance}")
            }
            Entry::InterestAdded { interest, balance } => {
                write!(f, "Interest added = {interest}. New balance = {balance}")
            }
            Entry::FeeCharged { fee, balance } => {
                write!(f, "Fee of {fee} charged. Remaining balance = {balance}")
            }
        }
    }
}

/// A reported operation, tagged with the account variant
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub kind: AccountKind,
    pub entry: Entry,
}

impl Receipt {
    pub fn new(kind: AccountKind, entry: Entry) -> Self {
        Self { kind, entry }
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.entry)
    }
}
