//! Balanced line pairs against the capital counter-account.

use rust_decimal::Decimal;

use crate::coa::{AccountType, CoaAccount};
use crate::ledger::math;
use crate::ledger::types::JournalLine;

/// Builds the balanced pair of lines that moves a tracked account by
/// `delta`, with capital (`3-1000`) as the counter-account.
///
/// The pair follows normal debit/credit rules:
/// - asset up: debit the account, credit capital
/// - asset down: credit the account, debit capital
/// - liability/equity up: debit capital, credit the account
/// - liability/equity down: credit capital, debit the account
///
/// Deltas below the rounding tolerance yield `None` so no zero-value lines
/// are ever emitted.
#[must_use]
pub fn counter_lines(account: CoaAccount, delta: Decimal) -> Option<[JournalLine; 2]> {
    if !math::is_material(delta) {
        return None;
    }

    let code = account.code();
    let capital = CoaAccount::Capital.code();
    let amount = delta.abs();
    let increased = delta > Decimal::ZERO;

    let pair = match (account.account_type(), increased) {
        (AccountType::Asset, true) => [
            JournalLine::debit(code, amount),
            JournalLine::credit(capital, amount),
        ],
        (AccountType::Asset, false) => [
            JournalLine::credit(code, amount),
            JournalLine::debit(capital, amount),
        ],
        (AccountType::Liability | AccountType::Equity, true) => [
            JournalLine::debit(capital, amount),
            JournalLine::credit(code, amount),
        ],
        (AccountType::Liability | AccountType::Equity, false) => [
            JournalLine::credit(capital, amount),
            JournalLine::debit(code, amount),
        ],
    };

    Some(pair)
}
