//! Opening journal generation.

use crate::coa::{CoaAccount, subledger_total};
use crate::ledger::types::JournalLine;
use crate::period::snapshot::OpeningSnapshot;

use super::lines::counter_lines;

/// Builds the opening journal for a fresh snapshot.
///
/// Every asset sub-ledger with a material total books as a debit against a
/// capital credit; every liability sub-ledger books the mirror image. The
/// declared capital figure is not journalized itself - it is reconciled
/// against the projected chart by the accounting-equation check - so the
/// result is balanced by construction for any snapshot.
#[must_use]
pub fn opening_journal(snapshot: &OpeningSnapshot) -> Vec<JournalLine> {
    CoaAccount::ALL
        .into_iter()
        .filter(|account| *account != CoaAccount::Capital)
        .filter_map(|account| counter_lines(account, subledger_total(snapshot, account)))
        .flatten()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::validation::BalanceReport;
    use crate::period::snapshot::{MemberReceivable, SupplierPayable};
    use artha_shared::types::{MemberId, SupplierId};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn period_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
    }

    #[test]
    fn test_cash_only_snapshot() {
        let snapshot = OpeningSnapshot {
            cash: dec!(1_000_000),
            ..OpeningSnapshot::new(period_start())
        };
        let lines = opening_journal(&snapshot);

        assert_eq!(
            lines,
            vec![
                JournalLine::debit("1-1000", dec!(1_000_000)),
                JournalLine::credit("3-1000", dec!(1_000_000)),
            ]
        );
    }

    #[test]
    fn test_zero_subledgers_emit_no_lines() {
        let snapshot = OpeningSnapshot::new(period_start());
        assert!(opening_journal(&snapshot).is_empty());
    }

    #[test]
    fn test_liability_books_against_capital() {
        let snapshot = OpeningSnapshot {
            supplier_payables: vec![SupplierPayable {
                supplier_id: SupplierId::new("SUP-1"),
                amount: dec!(400_000),
            }],
            ..OpeningSnapshot::new(period_start())
        };
        let lines = opening_journal(&snapshot);

        assert_eq!(
            lines,
            vec![
                JournalLine::debit("3-1000", dec!(400_000)),
                JournalLine::credit("2-1000", dec!(400_000)),
            ]
        );
    }

    #[test]
    fn test_declared_capital_is_not_journalized() {
        let snapshot = OpeningSnapshot {
            capital: dec!(5_000_000),
            ..OpeningSnapshot::new(period_start())
        };
        assert!(opening_journal(&snapshot).is_empty());
    }

    #[test]
    fn test_mixed_snapshot_balances() {
        let snapshot = OpeningSnapshot {
            cash: dec!(1_000_000),
            bank: dec!(2_000_000),
            capital: dec!(2_800_000),
            member_receivables: vec![MemberReceivable {
                member_id: MemberId::new("A-001"),
                amount: dec!(150_000),
            }],
            supplier_payables: vec![SupplierPayable {
                supplier_id: SupplierId::new("SUP-1"),
                amount: dec!(350_000),
            }],
            ..OpeningSnapshot::new(period_start())
        };
        let lines = opening_journal(&snapshot);

        let report = BalanceReport::check(&lines);
        assert!(report.is_valid);
        // Three asset pairs and one liability pair.
        assert_eq!(lines.len(), 8);
        assert_eq!(report.total_debit, dec!(3_500_000));
    }

    #[test]
    fn test_no_zero_value_lines() {
        let snapshot = OpeningSnapshot {
            cash: dec!(500),
            ..OpeningSnapshot::new(period_start())
        };
        let lines = opening_journal(&snapshot);
        assert!(
            lines
                .iter()
                .all(|line| line.debit + line.credit > Decimal::ZERO)
        );
    }
}
