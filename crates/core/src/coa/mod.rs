//! Chart of accounts.
//!
//! This module defines the account domain types, the fixed set of tracked
//! cooperative accounts, and the projection of an opening snapshot onto a
//! chart.

pub mod account;
pub mod aggregate;

pub use account::{Account, AccountType, CoaAccount, standard_chart};
pub use aggregate::{project_snapshot, subledger_total};
