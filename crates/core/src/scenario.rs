//! Demonstration scenario
//!
//! Builds a mixed collection of accounts and runs the same calls over all
//! of them, writing one transcript line per call:
//! 1. Deposit into every account
//! 2. Withdraw from every account (each variant applies its own policy)
//! 3. Balance statement for every account
//! 4. Variant-only operations: interest on the savings account, a fee on
//!    the current account

use crate::account::{Account, AnyAccount, GenericAccount};
use crate::current::CurrentAccount;
use crate::error::AccountResult;
use crate::kind::AccountKind;
use crate::receipt::Receipt;
use crate::savings::SavingsAccount;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::io::{self, Write};
use tracing::{debug, warn};

/// Amounts used by the scenario
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    pub deposit: Decimal,
    pub withdrawal: Decimal,
    pub fee: Decimal,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            deposit: dec!(500),
            withdrawal: dec!(1200),
            fee: dec!(200),
        }
    }
}

/// Accounts the scenario starts from, in transcript order
pub fn opening_accounts() -> Vec<AnyAccount> {
    vec![
        SavingsAccount::new("Alice", dec!(1000)).into(),
        CurrentAccount::new("Bob", dec!(2000)).into(),
        GenericAccount::new("Charlie", dec!(500)).into(),
    ]
}

/// Run the scenario, writing the transcript to `out`.
///
/// Returns the accounts in their final state.
pub fn run<W: Write>(config: &ScenarioConfig, out: &mut W) -> io::Result<Vec<AnyAccount>> {
    let mut accounts = opening_accounts();
    debug!(?config, accounts = accounts.len(), "scenario started");

    section(out, "Performing Deposits")?;
    for account in accounts.iter_mut() {
        let account = account.as_account_mut();
        let result = account.deposit(config.deposit);
        writeln!(out, "{}", transcript_line(account.kind(), &result))?;
    }

    section(out, "Performing Withdrawals (Polymorphism in action)")?;
    for account in accounts.iter_mut() {
        let account = account.as_account_mut();
        let result = account.withdraw(config.withdrawal);
        writeln!(out, "{}", transcript_line(account.kind(), &result))?;
    }

    section(out, "Displaying Balances")?;
    for account in accounts.iter() {
        writeln!(out, "{}", account.as_account().statement())?;
    }

    section(out, "Adding Interest and Fees (Specific to Subclasses)")?;
    if let Some(savings) = accounts.iter_mut().find_map(AnyAccount::as_savings_mut) {
        let result = savings.add_interest();
        writeln!(out, "{}", transcript_line(savings.kind(), &result))?;
    }
    if let Some(current) = accounts.iter_mut().find_map(AnyAccount::as_current_mut) {
        let result = current.charge_fee(config.fee);
        writeln!(out, "{}", transcript_line(current.kind(), &result))?;
    }

    debug!("scenario finished");
    Ok(accounts)
}

/// A refused operation is reported the same way as a completed one
fn transcript_line(kind: AccountKind, result: &AccountResult<Receipt>) -> String {
    match result {
        Ok(receipt) => receipt.to_string(),
        Err(err) => {
            if !err.is_rejection() {
                warn!(kind = kind.as_str(), error = %err, "operation refused");
            }
            format!("{kind}: {err}")
        }
    }
}

fn section<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- {title} ---")
}
