//! Journal line domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single line of a journal: an amount posted against an account code,
/// on exactly one side.
///
/// Both columns are carried so a line set can mix debits and credits
/// freely; a line's economic intent is the non-zero column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalLine {
    /// The chart-of-accounts code this line posts to (e.g. `1-1000`).
    #[serde(default)]
    pub account: String,
    /// Debit amount; zero when the line is a credit.
    #[serde(default)]
    pub debit: Decimal,
    /// Credit amount; zero when the line is a debit.
    #[serde(default)]
    pub credit: Decimal,
}

impl JournalLine {
    /// Creates a debit line against the given account.
    #[must_use]
    pub fn debit(account: impl Into<String>, amount: Decimal) -> Self {
        Self {
            account: account.into(),
            debit: amount,
            credit: Decimal::ZERO,
        }
    }

    /// Creates a credit line against the given account.
    #[must_use]
    pub fn credit(account: impl Into<String>, amount: Decimal) -> Self {
        Self {
            account: account.into(),
            credit: amount,
            debit: Decimal::ZERO,
        }
    }
}
