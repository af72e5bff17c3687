//! Account domain types and the fixed cooperative chart.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Account classification for the accounting equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Debit-normal account (cash, receivables, inventory).
    Asset,
    /// Credit-normal account owed to others (payables, member savings).
    Liability,
    /// Credit-normal ownership account (cooperative capital).
    Equity,
}

/// A chart-of-accounts entry with its running balance.
///
/// Unique by `code`; accounts are never deleted within a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Account code (e.g. `1-1000`).
    pub code: String,
    /// Display name.
    pub name: String,
    /// Classification for the accounting equation.
    pub account_type: AccountType,
    /// Current balance in the account's normal sign.
    pub balance: Decimal,
}

/// The fixed set of accounts tracked by the opening-balance engine.
///
/// Each variant carries its ledger code and classification; the opening and
/// correction generators only ever touch these nine accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoaAccount {
    /// Cash on hand.
    Cash,
    /// Bank balance.
    Bank,
    /// Receivables owed by members.
    MemberReceivables,
    /// Merchandise inventory at cost.
    Inventory,
    /// Payables owed to suppliers.
    SupplierPayables,
    /// Members' principal savings (simpanan pokok).
    MandatorySavings,
    /// Members' compulsory savings (simpanan wajib).
    ObligatorySavings,
    /// Members' voluntary savings (simpanan sukarela).
    VoluntarySavings,
    /// Cooperative capital, the counter-account for corrections.
    Capital,
}

impl CoaAccount {
    /// Every tracked account, in chart order.
    pub const ALL: [Self; 9] = [
        Self::Cash,
        Self::Bank,
        Self::MemberReceivables,
        Self::Inventory,
        Self::SupplierPayables,
        Self::MandatorySavings,
        Self::ObligatorySavings,
        Self::VoluntarySavings,
        Self::Capital,
    ];

    /// The account's fixed ledger code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Cash => "1-1000",
            Self::Bank => "1-1100",
            Self::MemberReceivables => "1-1200",
            Self::Inventory => "1-1300",
            Self::SupplierPayables => "2-1000",
            Self::MandatorySavings => "2-1100",
            Self::ObligatorySavings => "2-1200",
            Self::VoluntarySavings => "2-1300",
            Self::Capital => "3-1000",
        }
    }

    /// The account's display name.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Cash => "Kas",
            Self::Bank => "Bank",
            Self::MemberReceivables => "Piutang Anggota",
            Self::Inventory => "Persediaan Barang",
            Self::SupplierPayables => "Hutang Supplier",
            Self::MandatorySavings => "Simpanan Pokok",
            Self::ObligatorySavings => "Simpanan Wajib",
            Self::VoluntarySavings => "Simpanan Sukarela",
            Self::Capital => "Modal Koperasi",
        }
    }

    /// The account's classification.
    #[must_use]
    pub const fn account_type(self) -> AccountType {
        match self {
            Self::Cash | Self::Bank | Self::MemberReceivables | Self::Inventory => {
                AccountType::Asset
            }
            Self::SupplierPayables
            | Self::MandatorySavings
            | Self::ObligatorySavings
            | Self::VoluntarySavings => AccountType::Liability,
            Self::Capital => AccountType::Equity,
        }
    }

    /// Resolves a ledger code back to its tracked account, if any.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|account| account.code() == code)
    }
}

/// Builds the standard cooperative chart with all balances at zero.
#[must_use]
pub fn standard_chart() -> Vec<Account> {
    CoaAccount::ALL
        .into_iter()
        .map(|account| Account {
            code: account.code().to_string(),
            name: account.title().to_string(),
            account_type: account.account_type(),
            balance: Decimal::ZERO,
        })
        .collect()
}
