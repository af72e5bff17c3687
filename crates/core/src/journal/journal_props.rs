//! Property-based tests for the opening and correction journal generators.

use proptest::prelude::*;
use rust_decimal::Decimal;

use artha_shared::types::{ItemId, MemberId, SupplierId};
use chrono::NaiveDate;

use super::correction::diff_snapshots;
use super::opening::opening_journal;
use crate::coa::{AccountType, CoaAccount, subledger_total};
use crate::ledger::types::JournalLine;
use crate::ledger::validation::BalanceReport;
use crate::period::snapshot::{
    InventoryLine, MemberReceivable, MemberSavingsLine, OpeningSnapshot, SupplierPayable,
};

/// Strategy for non-negative amounts with two decimal places.
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for whole-unit quantities.
fn qty_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..1_000i64).prop_map(Decimal::from)
}

/// Strategy for a full opening snapshot.
fn snapshot_strategy() -> impl Strategy<Value = OpeningSnapshot> {
    (
        amount_strategy(),
        amount_strategy(),
        amount_strategy(),
        prop::collection::vec(amount_strategy(), 0..5),
        prop::collection::vec((qty_strategy(), amount_strategy()), 0..5),
        prop::collection::vec(amount_strategy(), 0..5),
        prop::collection::vec(
            (amount_strategy(), amount_strategy(), amount_strategy()),
            0..5,
        ),
    )
        .prop_map(
            |(cash, bank, capital, receivables, inventory, payables, savings)| OpeningSnapshot {
                cash,
                bank,
                capital,
                member_receivables: receivables
                    .into_iter()
                    .enumerate()
                    .map(|(i, amount)| MemberReceivable {
                        member_id: MemberId::new(format!("A-{i:03}")),
                        amount,
                    })
                    .collect(),
                inventory: inventory
                    .into_iter()
                    .enumerate()
                    .map(|(i, (qty, unit_cost))| InventoryLine {
                        item_id: ItemId::new(format!("BRG-{i}")),
                        qty,
                        unit_cost,
                    })
                    .collect(),
                supplier_payables: payables
                    .into_iter()
                    .enumerate()
                    .map(|(i, amount)| SupplierPayable {
                        supplier_id: SupplierId::new(format!("SUP-{i}")),
                        amount,
                    })
                    .collect(),
                member_savings: savings
                    .into_iter()
                    .enumerate()
                    .map(|(i, (mandatory, obligatory, voluntary))| MemberSavingsLine {
                        member_id: MemberId::new(format!("A-{i:03}")),
                        mandatory,
                        obligatory,
                        voluntary,
                    })
                    .collect(),
                ..OpeningSnapshot::new(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
            },
        )
}

/// The signed movement the lines apply to one account, in its normal sign.
fn applied_delta(lines: &[JournalLine], account: CoaAccount) -> Decimal {
    let debit: Decimal = lines
        .iter()
        .filter(|line| line.account == account.code())
        .map(|line| line.debit)
        .sum();
    let credit: Decimal = lines
        .iter()
        .filter(|line| line.account == account.code())
        .map(|line| line.credit)
        .sum();
    match account.account_type() {
        AccountType::Asset => debit - credit,
        AccountType::Liability | AccountType::Equity => credit - debit,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The opening journal balances for any snapshot.
    #[test]
    fn prop_opening_journal_balances(snapshot in snapshot_strategy()) {
        let lines = opening_journal(&snapshot);
        let report = BalanceReport::check(&lines);
        prop_assert!(report.is_valid, "unbalanced: {}", report.message);
    }

    /// The opening journal never carries zero-value lines.
    #[test]
    fn prop_opening_journal_has_no_zero_lines(snapshot in snapshot_strategy()) {
        let lines = opening_journal(&snapshot);
        prop_assert!(
            lines.iter().all(|line| line.debit + line.credit > Decimal::ZERO)
        );
    }

    /// A correction between any two snapshots balances.
    #[test]
    fn prop_correction_balances(
        old in snapshot_strategy(),
        new in snapshot_strategy(),
    ) {
        let lines = diff_snapshots(&old, &new);
        let report = BalanceReport::check(&lines);
        prop_assert!(report.is_valid, "unbalanced: {}", report.message);
    }

    /// Diffing a snapshot against itself is always a no-op.
    #[test]
    fn prop_noop_correction_is_empty(snapshot in snapshot_strategy()) {
        prop_assert!(diff_snapshots(&snapshot, &snapshot).is_empty());
    }

    /// The correction applies exactly the aggregate delta to each tracked
    /// account other than capital (which also absorbs counter-lines).
    #[test]
    fn prop_correction_applies_exact_deltas(
        old in snapshot_strategy(),
        new in snapshot_strategy(),
    ) {
        let lines = diff_snapshots(&old, &new);
        for account in CoaAccount::ALL {
            if account == CoaAccount::Capital {
                continue;
            }
            let delta = subledger_total(&new, account) - subledger_total(&old, account);
            let expected = if delta.abs() < Decimal::new(1, 2) {
                Decimal::ZERO
            } else {
                delta
            };
            prop_assert_eq!(applied_delta(&lines, account), expected);
        }
    }
}
