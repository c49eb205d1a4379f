//! # Polybank Core
//!
//! Account model showing dynamic dispatch over three account variants:
//!
//! - [`GenericAccount`]: the base capability set, withdrawal is a no-op
//! - [`SavingsAccount`]: no overdraft, interest on demand
//! - [`CurrentAccount`]: overdraft up to a limit, fees
//!
//! ```
//! use polybank_core::{Account, AnyAccount, CurrentAccount, GenericAccount, SavingsAccount};
//! use rust_decimal_macros::dec;
//!
//! let mut accounts: Vec<AnyAccount> = vec![
//!     SavingsAccount::new("Alice", dec!(1000)).into(),
//!     CurrentAccount::new("Bob", dec!(2000)).into(),
//!     GenericAccount::new("Charlie", dec!(500)).into(),
//! ];
//!
//! for account in accounts.iter_mut() {
//!     let _ = account.as_account_mut().withdraw(dec!(1200));
//! }
//! ```

pub mod account;
pub mod current;
pub mod error;
pub mod kind;
mod ledger;
pub mod receipt;
pub mod savings;
pub mod scenario;

pub use account::{Account, AccountSnapshot, AnyAccount, GenericAccount};
pub use current::{CurrentAccount, DEFAULT_OVERDRAFT_LIMIT};
pub use error::{AccountError, AccountResult};
pub use kind::AccountKind;
pub use receipt::{Entry, Receipt};
pub use savings::{SavingsAccount, DEFAULT_INTEREST_RATE};
pub use scenario::ScenarioConfig;
