//! The opening-balance snapshot (saldo awal) for a bookkeeping period.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use artha_shared::types::{ItemId, MemberId, SupplierId};

use crate::loan::LoanOpeningRow;

/// A receivable owed by a member at period start.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberReceivable {
    /// The owing member.
    #[serde(default)]
    pub member_id: MemberId,
    /// Outstanding amount.
    #[serde(default)]
    pub amount: Decimal,
}

/// An inventory position at period start, valued at cost.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryLine {
    /// The stocked item.
    #[serde(default)]
    pub item_id: ItemId,
    /// Quantity on hand.
    #[serde(default)]
    pub qty: Decimal,
    /// Unit cost.
    #[serde(default)]
    pub unit_cost: Decimal,
}

impl InventoryLine {
    /// The position's value: quantity times unit cost.
    #[must_use]
    pub fn value(&self) -> Decimal {
        self.qty * self.unit_cost
    }
}

/// A payable owed to a supplier at period start.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierPayable {
    /// The supplier owed.
    #[serde(default)]
    pub supplier_id: SupplierId,
    /// Outstanding amount.
    #[serde(default)]
    pub amount: Decimal,
}

/// One member's savings balances at period start.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSavingsLine {
    /// The saving member.
    #[serde(default)]
    pub member_id: MemberId,
    /// Principal savings (simpanan pokok).
    #[serde(default)]
    pub mandatory: Decimal,
    /// Compulsory savings (simpanan wajib).
    #[serde(default)]
    pub obligatory: Decimal,
    /// Voluntary savings (simpanan sukarela).
    #[serde(default)]
    pub voluntary: Decimal,
}

/// The opening-balance snapshot for a bookkeeping period.
///
/// Exactly one snapshot is active per cooperative, and `period_start` is
/// unique across historical snapshots. Once `locked` flips to true it never
/// flips back; every later change is recorded as a correction journal
/// against the live snapshot, never as an in-place edit of history.
///
/// All sub-ledger fields default to zero/empty on deserialization so a
/// sparse form submission is a valid snapshot rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningSnapshot {
    /// First day of the period. Identifies the snapshot.
    pub period_start: NaiveDate,
    /// Cash on hand.
    #[serde(default)]
    pub cash: Decimal,
    /// Bank balance.
    #[serde(default)]
    pub bank: Decimal,
    /// Declared cooperative capital (modal koperasi).
    #[serde(default)]
    pub capital: Decimal,
    /// Per-member receivables.
    #[serde(default)]
    pub member_receivables: Vec<MemberReceivable>,
    /// Inventory positions.
    #[serde(default)]
    pub inventory: Vec<InventoryLine>,
    /// Per-supplier payables.
    #[serde(default)]
    pub supplier_payables: Vec<SupplierPayable>,
    /// Per-member savings balances.
    #[serde(default)]
    pub member_savings: Vec<MemberSavingsLine>,
    /// Outstanding loans carried into the period.
    #[serde(default)]
    pub loans: Vec<LoanOpeningRow>,
    /// Whether the period has been locked.
    #[serde(default)]
    pub locked: bool,
}

impl OpeningSnapshot {
    /// Creates an empty snapshot for the given period start.
    #[must_use]
    pub fn new(period_start: NaiveDate) -> Self {
        Self {
            period_start,
            cash: Decimal::ZERO,
            bank: Decimal::ZERO,
            capital: Decimal::ZERO,
            member_receivables: Vec::new(),
            inventory: Vec::new(),
            supplier_payables: Vec::new(),
            member_savings: Vec::new(),
            loans: Vec::new(),
            locked: false,
        }
    }
}
