//! Derivation of loan records from snapshot loan rows.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use artha_shared::types::{LoanId, MemberId};

use super::directory::MemberDirectory;
use super::ids::LoanIdSource;

/// Lifecycle status of a loan record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanStatus {
    /// Principal outstanding.
    Active,
    /// Fully repaid.
    PaidOff,
}

/// A loan row as entered on the opening-balance form.
///
/// Rows come straight from a grid the treasurer fills in; blank rows are
/// expected and filtered by the recorder, not rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanOpeningRow {
    /// The borrowing member; blank marks an empty row.
    #[serde(default)]
    pub member_id: MemberId,
    /// Outstanding principal at period start.
    #[serde(default)]
    pub principal: Decimal,
    /// Annual interest rate.
    #[serde(default)]
    pub rate: Decimal,
    /// Remaining term in months.
    #[serde(default)]
    pub term_months: u32,
    /// Final repayment date, if agreed.
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

/// A loan carried into the period, derived once from a qualifying row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanRecord {
    /// Unique identifier.
    pub id: LoanId,
    /// The borrowing member.
    pub member_id: MemberId,
    /// The member's registered name, when the directory knows them.
    pub member_name: Option<String>,
    /// Original principal.
    pub principal: Decimal,
    /// Annual interest rate.
    pub rate: Decimal,
    /// Remaining term in months.
    pub term_months: u32,
    /// Final repayment date, if agreed.
    pub due_date: Option<NaiveDate>,
    /// The period start this loan was carried in on.
    pub origination_date: NaiveDate,
    /// Lifecycle status; derived records start active.
    pub status: LoanStatus,
    /// Principal still outstanding; equals `principal` at derivation.
    pub remaining_principal: Decimal,
}

/// Derives opening loan records from form rows.
pub struct LoanOpeningRecorder<'a> {
    directory: &'a dyn MemberDirectory,
    ids: &'a dyn LoanIdSource,
}

impl<'a> LoanOpeningRecorder<'a> {
    /// Creates a recorder over the given directory and ID source.
    #[must_use]
    pub fn new(directory: &'a dyn MemberDirectory, ids: &'a dyn LoanIdSource) -> Self {
        Self { directory, ids }
    }

    /// Derives one record per qualifying row.
    ///
    /// A row qualifies when its member code is non-blank and its principal
    /// is positive; anything else is a blank form row and is dropped
    /// silently. Rows are not deduplicated: a member may carry several
    /// loans into the period.
    #[must_use]
    pub fn record(&self, rows: &[LoanOpeningRow], period_start: NaiveDate) -> Vec<LoanRecord> {
        rows.iter()
            .filter(|row| !row.member_id.is_blank() && row.principal > Decimal::ZERO)
            .map(|row| LoanRecord {
                id: self.ids.next_id(),
                member_id: row.member_id.clone(),
                member_name: self
                    .directory
                    .get_member(&row.member_id)
                    .map(|member| member.name),
                principal: row.principal,
                rate: row.rate,
                term_months: row.term_months,
                due_date: row.due_date,
                origination_date: period_start,
                status: LoanStatus::Active,
                remaining_principal: row.principal,
            })
            .collect()
    }
}
