//! Projection of an opening snapshot onto the chart of accounts.

use rust_decimal::Decimal;

use super::account::{Account, CoaAccount};
use crate::period::snapshot::OpeningSnapshot;

/// Aggregates the snapshot sub-ledger backing the given tracked account.
///
/// This is the single aggregation primitive: the chart projection and the
/// correction diff both define an account's balance through it, so the two
/// can never disagree.
#[must_use]
pub fn subledger_total(snapshot: &OpeningSnapshot, account: CoaAccount) -> Decimal {
    match account {
        CoaAccount::Cash => snapshot.cash,
        CoaAccount::Bank => snapshot.bank,
        CoaAccount::MemberReceivables => snapshot
            .member_receivables
            .iter()
            .map(|row| row.amount)
            .sum(),
        CoaAccount::Inventory => snapshot.inventory.iter().map(|row| row.value()).sum(),
        CoaAccount::SupplierPayables => snapshot
            .supplier_payables
            .iter()
            .map(|row| row.amount)
            .sum(),
        CoaAccount::MandatorySavings => snapshot
            .member_savings
            .iter()
            .map(|row| row.mandatory)
            .sum(),
        CoaAccount::ObligatorySavings => snapshot
            .member_savings
            .iter()
            .map(|row| row.obligatory)
            .sum(),
        CoaAccount::VoluntarySavings => snapshot
            .member_savings
            .iter()
            .map(|row| row.voluntary)
            .sum(),
        CoaAccount::Capital => snapshot.capital,
    }
}

/// Projects a snapshot onto a chart of accounts.
///
/// Returns a new chart; the input is never mutated. Each tracked account
/// present in the chart has its balance replaced by the snapshot's
/// sub-ledger aggregate. Chart entries outside the tracked set keep their
/// balances, and tracked codes absent from the chart are silently skipped
/// so partial charts remain usable.
#[must_use]
pub fn project_snapshot(chart: &[Account], snapshot: &OpeningSnapshot) -> Vec<Account> {
    chart
        .iter()
        .map(|account| {
            let mut projected = account.clone();
            if let Some(tracked) = CoaAccount::from_code(&account.code) {
                projected.balance = subledger_total(snapshot, tracked);
            }
            projected
        })
        .collect()
}
