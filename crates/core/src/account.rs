//! # Account Module
//!
//! The `Account` trait is the capability set shared by every variant:
//! deposit, withdraw and balance statement. `GenericAccount` uses the
//! trait's provided behavior as is; `SavingsAccount` and `CurrentAccount`
//! override `withdraw` and add their own bonus operations.
//!
//! `AnyAccount` is the sum type used to keep different variants in one
//! collection.

use crate::current::CurrentAccount;
use crate::error::{AccountError, AccountResult};
use crate::kind::AccountKind;
use crate::ledger::Ledger;
use crate::receipt::{Entry, Receipt};
use crate::savings::SavingsAccount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

pub(crate) mod sealed {
    /// Only this crate can build one, so only this crate can reach a
    /// ledger mutably or implement `Account`.
    pub struct Token(());

    impl Token {
        pub(crate) fn new() -> Self {
            Token(())
        }
    }
}

/// Capability set shared by all account variants.
///
/// The trait is sealed: balances move only through its operations and the
/// variant bonus operations, never by reaching into the ledger.
///
/// ```compile_fail
/// use polybank_core::{Account, SavingsAccount};
/// use rust_decimal_macros::dec;
///
/// let mut alice = SavingsAccount::new("Alice", dec!(1000));
/// let mut mallory = SavingsAccount::new("Mallory", dec!(1));
/// std::mem::swap(alice.ledger_mut(), mallory.ledger_mut());
/// ```
pub trait Account {
    /// Variant tag used in reports
    fn kind(&self) -> AccountKind;

    fn ledger(&self) -> &Ledger;

    #[doc(hidden)]
    fn ledger_mut(&mut self, token: sealed::Token) -> &mut Ledger;

    fn name(&self) -> &str {
        self.ledger().name()
    }

    fn balance(&self) -> Decimal {
        self.ledger().balance()
    }

    /// Add `amount` to the balance.
    ///
    /// No sign check is made on `amount`. Fails only on overflow, leaving
    /// the balance unchanged.
    fn deposit(&mut self, amount: Decimal) -> AccountResult<Receipt> {
        let balance = self
            .ledger_mut(sealed::Token::new())
            .credit(amount)
            .ok_or_else(|| AccountError::overflow("deposit", amount))?;
        debug!(account = self.name(), kind = self.kind().as_str(), %amount, %balance, "deposit");
        Ok(Receipt::new(self.kind(), Entry::Deposited { amount, balance }))
    }

    /// Base withdrawal: reports that the variant has no policy and leaves
    /// the balance alone. Variants with a real policy override this.
    fn withdraw(&mut self, amount: Decimal) -> AccountResult<Receipt> {
        debug!(account = self.name(), kind = self.kind().as_str(), %amount, "generic withdrawal ignored");
        Ok(Receipt::new(
            self.kind(),
            Entry::GenericWithdrawal { requested: amount },
        ))
    }

    /// Balance statement, no side effects
    fn statement(&self) -> Receipt {
        Receipt::new(
            self.kind(),
            Entry::Balance {
                name: self.name().to_string(),
                balance: self.balance(),
            },
        )
    }
}

/// Plain account with only the shared capability set
#[derive(Debug, Clone, PartialEq)]
pub struct GenericAccount {
    ledger: Ledger,
}

impl GenericAccount {
    pub fn new(name: impl Into<String>, balance: Decimal) -> Self {
        Self {
            ledger: Ledger::new(name, balance),
        }
    }
}

impl Account for GenericAccount {
    fn kind(&self) -> AccountKind {
        AccountKind::Generic
    }

    fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    fn ledger_mut(&mut self, _: sealed::Token) -> &mut Ledger {
        &mut self.ledger
    }
}

/// Any account variant, for heterogeneous collections
#[derive(Debug, Clone, PartialEq)]
pub enum AnyAccount {
    Generic(GenericAccount),
    Savings(SavingsAccount),
    Current(CurrentAccount),
}

impl AnyAccount {
    pub fn as_account(&self) -> &dyn Account {
        match self {
            AnyAccount::Generic(account) => account,
            AnyAccount::Savings(account) => account,
            AnyAccount::Current(account) => account,
        }
    }

    pub fn as_account_mut(&mut self) -> &mut dyn Account {
        match self {
            AnyAccount::Generic(account) => account,
            AnyAccount::Savings(account) => account,
            AnyAccount::Current(account) => account,
        }
    }

    pub fn as_savings_mut(&mut self) -> Option<&mut SavingsAccount> {
        match self {
            AnyAccount::Savings(account) => Some(account),
            _ => None,
        }
    }

    pub fn as_current_mut(&mut self) -> Option<&mut CurrentAccount> {
        match self {
            AnyAccount::Current(account) => Some(account),
            _ => None,
        }
    }

    pub fn snapshot(&self) -> AccountSnapshot {
        let account = self.as_account();
        let (interest_rate, overdraft_limit) = match self {
            AnyAccount::Generic(_) => (None, None),
            AnyAccount::Savings(savings) => (Some(savings.interest_rate()), None),
            AnyAccount::Current(current) => (None, Some(current.overdraft_limit())),
        };

        AccountSnapshot {
            kind: account.kind(),
            name: account.name().to_string(),
            balance: account.balance(),
            interest_rate,
            overdraft_limit,
        }
    }
}

impl From<GenericAccount> for AnyAccount {
    fn from(account: GenericAccount) -> Self {
        AnyAccount::Generic(account)
    }
}

impl From<SavingsAccount> for AnyAccount {
    fn from(account: SavingsAccount) -> Self {
        AnyAccount::Savings(account)
    }
}

impl From<CurrentAccount> for AnyAccount {
    fn from(account: CurrentAccount) -> Self {
        AnyAccount::Current(account)
    }
}

impl fmt::Display for AnyAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let account = self.as_account();
        write!(
            f,
            "{} {} (balance: {})",
            account.kind(),
            account.name(),
            account.balance()
        )
    }
}

/// Serializable view of an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub kind: AccountKind,
    pub name: String,
    pub balance: Decimal,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub interest_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub overdraft_limit: Option<Decimal>,
}
