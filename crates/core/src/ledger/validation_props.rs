//! Property-based tests for the journal balance and accounting equation
//! validators.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::types::JournalLine;
use super::validation::{BalanceReport, EquationReport};
use crate::coa::{Account, AccountType};

/// Strategy for non-negative amounts with two decimal places.
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for a journal line on either side.
fn line_strategy() -> impl Strategy<Value = JournalLine> {
    (amount_strategy(), any::<bool>(), 0u8..9u8).prop_map(|(amount, is_debit, code)| {
        let account = format!("1-{}000", u32::from(code) + 1);
        if is_debit {
            JournalLine::debit(account, amount)
        } else {
            JournalLine::credit(account, amount)
        }
    })
}

/// Strategy for signed account balances with two decimal places.
fn balance_strategy() -> impl Strategy<Value = Decimal> {
    (-10_000_000_000i64..10_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn account_type_strategy() -> impl Strategy<Value = AccountType> {
    prop_oneof![
        Just(AccountType::Asset),
        Just(AccountType::Liability),
        Just(AccountType::Equity),
    ]
}

fn account_strategy() -> impl Strategy<Value = Account> {
    (account_type_strategy(), balance_strategy(), 0u32..100u32).prop_map(
        |(account_type, balance, n)| Account {
            code: format!("9-{n:04}"),
            name: format!("Account {n}"),
            account_type,
            balance,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// For any journal, the report is valid exactly when the absolute
    /// difference between debit and credit totals is below the tolerance.
    #[test]
    fn prop_balance_iff_totals_within_tolerance(
        lines in prop::collection::vec(line_strategy(), 0..20),
    ) {
        let total_debit: Decimal = lines.iter().map(|line| line.debit).sum();
        let total_credit: Decimal = lines.iter().map(|line| line.credit).sum();
        let expected = (total_debit - total_credit).abs() < Decimal::new(1, 2);

        let report = BalanceReport::check(&lines);
        prop_assert_eq!(report.is_valid, expected);
        prop_assert_eq!(report.total_debit, total_debit);
        prop_assert_eq!(report.total_credit, total_credit);
        prop_assert_eq!(report.difference, total_debit - total_credit);
    }

    /// A journal made of exact debit/credit pairs always validates.
    #[test]
    fn prop_paired_lines_always_balance(
        amounts in prop::collection::vec(amount_strategy(), 0..10),
    ) {
        let mut lines = Vec::with_capacity(amounts.len() * 2);
        for amount in &amounts {
            lines.push(JournalLine::debit("1-1000", *amount));
            lines.push(JournalLine::credit("3-1000", *amount));
        }
        prop_assert!(BalanceReport::check(&lines).is_valid);
    }

    /// For any chart, the equation report is valid exactly when
    /// `|assets - (liabilities + equity)|` is below the tolerance.
    #[test]
    fn prop_equation_iff_within_tolerance(
        accounts in prop::collection::vec(account_strategy(), 0..20),
    ) {
        let assets: Decimal = accounts
            .iter()
            .filter(|account| account.account_type == AccountType::Asset)
            .map(|account| account.balance)
            .sum();
        let liabilities: Decimal = accounts
            .iter()
            .filter(|account| account.account_type == AccountType::Liability)
            .map(|account| account.balance)
            .sum();
        let equity: Decimal = accounts
            .iter()
            .filter(|account| account.account_type == AccountType::Equity)
            .map(|account| account.balance)
            .sum();
        let expected = (assets - (liabilities + equity)).abs() < Decimal::new(1, 2);

        let report = EquationReport::check(&accounts);
        prop_assert_eq!(report.is_valid, expected);
        prop_assert_eq!(report.difference, assets - (liabilities + equity));
    }
}
