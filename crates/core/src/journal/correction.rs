//! Correction journal generation.

use crate::coa::{CoaAccount, subledger_total};
use crate::ledger::types::JournalLine;
use crate::period::snapshot::OpeningSnapshot;

use super::lines::counter_lines;

/// Diffs two snapshots and emits the correction journal that moves the
/// ledger from the old balances to the new ones.
///
/// Each tracked account contributes a balanced pair when its aggregate
/// changed materially; capital itself is tracked the same way for direct
/// capital adjustments. Identical snapshots yield an empty journal - a
/// no-op correction is legal, not an error.
///
/// This is the pure diff kernel; the requirement that corrections only
/// apply to a locked period is enforced by the period service.
#[must_use]
pub fn diff_snapshots(old: &OpeningSnapshot, new: &OpeningSnapshot) -> Vec<JournalLine> {
    CoaAccount::ALL
        .into_iter()
        .filter_map(|account| {
            let delta = subledger_total(new, account) - subledger_total(old, account);
            counter_lines(account, delta)
        })
        .flatten()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::validation::BalanceReport;
    use crate::period::snapshot::{MemberReceivable, MemberSavingsLine};
    use artha_shared::types::MemberId;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn base() -> OpeningSnapshot {
        OpeningSnapshot {
            cash: dec!(1_000_000),
            ..OpeningSnapshot::new(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
        }
    }

    #[test]
    fn test_identical_snapshots_yield_empty_journal() {
        let snapshot = base();
        assert!(diff_snapshots(&snapshot, &snapshot).is_empty());
    }

    #[test]
    fn test_cash_increase() {
        let old = base();
        let new = OpeningSnapshot {
            cash: dec!(1_500_000),
            ..old.clone()
        };
        let lines = diff_snapshots(&old, &new);

        assert_eq!(
            lines,
            vec![
                JournalLine::debit("1-1000", dec!(500_000)),
                JournalLine::credit("3-1000", dec!(500_000)),
            ]
        );
    }

    #[test]
    fn test_cash_decrease_inverts_sides() {
        let old = base();
        let new = OpeningSnapshot {
            cash: dec!(400_000),
            ..old.clone()
        };
        let lines = diff_snapshots(&old, &new);

        assert_eq!(
            lines,
            vec![
                JournalLine::credit("1-1000", dec!(600_000)),
                JournalLine::debit("3-1000", dec!(600_000)),
            ]
        );
    }

    #[test]
    fn test_savings_increase_credits_savings() {
        let old = base();
        let new = OpeningSnapshot {
            member_savings: vec![MemberSavingsLine {
                member_id: MemberId::new("A-001"),
                mandatory: dec!(100_000),
                obligatory: Decimal::ZERO,
                voluntary: Decimal::ZERO,
            }],
            ..old.clone()
        };
        let lines = diff_snapshots(&old, &new);

        assert_eq!(
            lines,
            vec![
                JournalLine::debit("3-1000", dec!(100_000)),
                JournalLine::credit("2-1100", dec!(100_000)),
            ]
        );
    }

    #[test]
    fn test_capital_change_emits_offsetting_capital_lines() {
        let old = base();
        let new = OpeningSnapshot {
            capital: dec!(250_000),
            ..old.clone()
        };
        let lines = diff_snapshots(&old, &new);

        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|line| line.account == "3-1000"));
        assert!(BalanceReport::check(&lines).is_valid);
    }

    #[test]
    fn test_sub_tolerance_delta_is_skipped() {
        let old = base();
        let new = OpeningSnapshot {
            cash: old.cash + dec!(0.005),
            ..old.clone()
        };
        assert!(diff_snapshots(&old, &new).is_empty());
    }

    #[test]
    fn test_multi_account_diff_balances() {
        let old = base();
        let new = OpeningSnapshot {
            cash: dec!(1_250_000),
            bank: dec!(90_000),
            member_receivables: vec![MemberReceivable {
                member_id: MemberId::new("A-002"),
                amount: dec!(60_000),
            }],
            ..old.clone()
        };
        let lines = diff_snapshots(&old, &new);

        // cash +250_000, bank +90_000, receivables +60_000
        assert_eq!(lines.len(), 6);
        assert!(BalanceReport::check(&lines).is_valid);
    }
}
