//! Double-entry validation over journals and the chart of accounts.
//!
//! Both validators are total functions: they always return a report value
//! and never panic or error, so callers can decide for themselves whether
//! a failed check blocks a user-facing action.

use rust_decimal::Decimal;
use serde::Serialize;

use super::math;
use super::types::JournalLine;
use crate::coa::{Account, AccountType};

/// Outcome of checking a journal for debit/credit balance.
#[derive(Debug, Clone, Serialize)]
pub struct BalanceReport {
    /// True when total debits equal total credits within tolerance.
    pub is_valid: bool,
    /// Sum of all debit columns.
    pub total_debit: Decimal,
    /// Sum of all credit columns.
    pub total_credit: Decimal,
    /// `total_debit - total_credit`.
    pub difference: Decimal,
    /// Human-readable outcome description.
    pub message: String,
}

impl BalanceReport {
    /// Checks that a set of journal lines is balanced.
    ///
    /// An empty line set is balanced (zero equals zero); this keeps no-op
    /// correction journals legal.
    #[must_use]
    pub fn check(lines: &[JournalLine]) -> Self {
        let total_debit: Decimal = lines.iter().map(|line| line.debit).sum();
        let total_credit: Decimal = lines.iter().map(|line| line.credit).sum();
        let difference = total_debit - total_credit;
        let is_valid = math::within_tolerance(total_debit, total_credit);

        let message = if is_valid {
            "Journal is balanced".to_string()
        } else {
            format!("Journal is not balanced. Debit: {total_debit}, Credit: {total_credit}")
        };

        Self {
            is_valid,
            total_debit,
            total_credit,
            difference,
            message,
        }
    }

    /// Checks an untrusted JSON payload.
    ///
    /// Payloads that are not an array of journal lines yield an invalid
    /// report with zeroed totals and a descriptive message; this function
    /// never errors, keeping shape problems out of the pure engine.
    #[must_use]
    pub fn check_value(payload: &serde_json::Value) -> Self {
        if payload.is_null() {
            return Self::rejected("Journal payload is missing");
        }
        if !payload.is_array() {
            return Self::rejected("Journal payload must be an array of journal lines");
        }
        match serde_json::from_value::<Vec<JournalLine>>(payload.clone()) {
            Ok(lines) => Self::check(&lines),
            Err(_) => Self::rejected("Journal payload contains a malformed line"),
        }
    }

    fn rejected(message: &str) -> Self {
        Self {
            is_valid: false,
            total_debit: Decimal::ZERO,
            total_credit: Decimal::ZERO,
            difference: Decimal::ZERO,
            message: message.to_string(),
        }
    }
}

/// Outcome of checking the accounting equation over a chart of accounts.
#[derive(Debug, Clone, Serialize)]
pub struct EquationReport {
    /// True when `assets = liabilities + equity` within tolerance.
    pub is_valid: bool,
    /// Sum of asset account balances.
    pub total_assets: Decimal,
    /// Sum of liability account balances.
    pub total_liabilities: Decimal,
    /// Sum of equity account balances.
    pub total_equity: Decimal,
    /// `assets - (liabilities + equity)`.
    pub difference: Decimal,
    /// Human-readable outcome description.
    pub message: String,
}

impl EquationReport {
    /// Checks that `assets = liabilities + equity` holds over the chart.
    #[must_use]
    pub fn check(accounts: &[Account]) -> Self {
        let mut total_assets = Decimal::ZERO;
        let mut total_liabilities = Decimal::ZERO;
        let mut total_equity = Decimal::ZERO;

        for account in accounts {
            match account.account_type {
                AccountType::Asset => total_assets += account.balance,
                AccountType::Liability => total_liabilities += account.balance,
                AccountType::Equity => total_equity += account.balance,
            }
        }

        let difference = total_assets - (total_liabilities + total_equity);
        let is_valid = math::within_tolerance(total_assets, total_liabilities + total_equity);

        let message = if is_valid {
            "Accounting equation holds".to_string()
        } else {
            format!(
                "Accounting equation does not hold. Assets: {total_assets}, Liabilities + Equity: {}",
                total_liabilities + total_equity
            )
        };

        Self {
            is_valid,
            total_assets,
            total_liabilities,
            total_equity,
            difference,
            message,
        }
    }
}
