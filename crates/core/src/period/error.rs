//! Period error types for lock-protocol and state errors.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while managing a bookkeeping period.
#[derive(Debug, Error)]
pub enum PeriodError {
    /// Direct mutation attempted on a locked period.
    #[error(
        "Period is locked. Record the change as a correction journal instead of editing the opening balance directly"
    )]
    PeriodLocked,

    /// No period has been opened yet.
    #[error("No active period")]
    NoActivePeriod,

    /// The period is already locked.
    #[error("Period is already locked")]
    AlreadyLocked,

    /// A new period cannot open while the current one is unlocked.
    #[error("Previous period must be locked before opening a new one")]
    PreviousPeriodOpen,

    /// A period with this start date already exists.
    #[error("A period starting {0} already exists")]
    DuplicatePeriodStart(NaiveDate),

    /// A correction was requested against an unlocked period.
    #[error("Corrections require a locked period; edit the opening balance directly instead")]
    CorrectionRequiresLock,

    /// A generated journal failed the balance check.
    #[error("Journal is not balanced. Debit: {debit}, Credit: {credit}")]
    UnbalancedJournal {
        /// Total debit amount.
        debit: Decimal,
        /// Total credit amount.
        credit: Decimal,
    },

    /// The snapshot violates the accounting equation.
    #[error("Accounting equation does not hold. Difference: {difference}")]
    EquationMismatch {
        /// `assets - (liabilities + equity)` over the projected chart.
        difference: Decimal,
    },
}

impl PeriodError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::PeriodLocked => "PERIOD_LOCKED",
            Self::NoActivePeriod => "NO_ACTIVE_PERIOD",
            Self::AlreadyLocked => "PERIOD_ALREADY_LOCKED",
            Self::PreviousPeriodOpen => "PREVIOUS_PERIOD_OPEN",
            Self::DuplicatePeriodStart(_) => "DUPLICATE_PERIOD_START",
            Self::CorrectionRequiresLock => "CORRECTION_REQUIRES_LOCK",
            Self::UnbalancedJournal { .. } => "UNBALANCED_JOURNAL",
            Self::EquationMismatch { .. } => "EQUATION_MISMATCH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_codes() {
        assert_eq!(PeriodError::PeriodLocked.error_code(), "PERIOD_LOCKED");
        assert_eq!(PeriodError::NoActivePeriod.error_code(), "NO_ACTIVE_PERIOD");
        assert_eq!(
            PeriodError::AlreadyLocked.error_code(),
            "PERIOD_ALREADY_LOCKED"
        );
        assert_eq!(
            PeriodError::UnbalancedJournal {
                debit: dec!(100),
                credit: dec!(50),
            }
            .error_code(),
            "UNBALANCED_JOURNAL"
        );
    }

    #[test]
    fn test_locked_message_points_to_corrections() {
        let message = PeriodError::PeriodLocked.to_string();
        assert!(message.contains("correction journal"));
    }

    #[test]
    fn test_duplicate_start_display() {
        let err =
            PeriodError::DuplicatePeriodStart(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        assert_eq!(err.to_string(), "A period starting 2026-01-01 already exists");
    }
}
