//! Period service: the lock-protocol orchestrator.
//!
//! The service owns the read-diff-write sequence around the snapshot so a
//! single process cannot lose updates to concurrent editors; everything it
//! calls into is pure.

use std::sync::Mutex;

use chrono::NaiveDate;

use artha_shared::CoopConfig;

use super::error::PeriodError;
use super::lock::{PeriodLock, PeriodState};
use super::snapshot::OpeningSnapshot;
use super::store::PeriodStore;
use crate::coa::{project_snapshot, standard_chart};
use crate::journal::{JournalSink, diff_snapshots, opening_journal};
use crate::ledger::types::JournalLine;
use crate::ledger::validation::{BalanceReport, EquationReport};
use crate::loan::{LoanIdSource, LoanOpeningRecorder, LoanRecord, MemberDirectory};

/// Orchestrates the period lifecycle over an injected store and sink.
pub struct PeriodService<S: PeriodStore, J: JournalSink> {
    config: CoopConfig,
    store: S,
    sink: J,
    edit_lock: Mutex<()>,
}

impl<S: PeriodStore, J: JournalSink> PeriodService<S, J> {
    /// Creates a service over the given store and journal sink.
    #[must_use]
    pub fn new(config: CoopConfig, store: S, sink: J) -> Self {
        Self {
            config,
            store,
            sink,
            edit_lock: Mutex::new(()),
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The underlying journal sink.
    pub fn sink(&self) -> &J {
        &self.sink
    }

    /// The current lock state.
    #[must_use]
    pub fn state(&self) -> PeriodState {
        PeriodLock::new(&self.store).state()
    }

    /// Returns true if the active period is locked.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        PeriodLock::new(&self.store).is_locked()
    }

    /// Checks whether a direct snapshot mutation is currently permitted.
    ///
    /// # Errors
    ///
    /// Returns `PeriodError::PeriodLocked` once the period is locked.
    pub fn validate_direct_change(&self) -> Result<(), PeriodError> {
        PeriodLock::new(&self.store).validate_direct_change()
    }

    /// Opens a new period from the given snapshot.
    ///
    /// The previous period (if any) must be locked, the start date must be
    /// unused, and the snapshot must satisfy the accounting equation over
    /// the standard chart. On success the opening journal is posted to the
    /// sink and the snapshot becomes the active, unlocked period.
    ///
    /// # Errors
    ///
    /// Returns a `PeriodError` describing the violated rule.
    pub fn open_period(
        &self,
        snapshot: OpeningSnapshot,
    ) -> Result<Vec<JournalLine>, PeriodError> {
        let _guard = self.edit_lock.lock().unwrap();

        if let Some(active) = self.store.load() {
            if !active.locked {
                return Err(PeriodError::PreviousPeriodOpen);
            }
        }
        if self.store.history_dates().contains(&snapshot.period_start) {
            return Err(PeriodError::DuplicatePeriodStart(snapshot.period_start));
        }

        let projected = project_snapshot(&standard_chart(), &snapshot);
        let equation = EquationReport::check(&projected);
        if !equation.is_valid {
            return Err(PeriodError::EquationMismatch {
                difference: equation.difference,
            });
        }

        let lines = opening_journal(&snapshot);
        let balance = BalanceReport::check(&lines);
        if !balance.is_valid {
            return Err(PeriodError::UnbalancedJournal {
                debit: balance.total_debit,
                credit: balance.total_credit,
            });
        }

        let mut saved = snapshot;
        saved.locked = false;
        self.store.save(&saved);

        if !lines.is_empty() {
            self.sink.post_journal(
                &self.config.journal.opening_description,
                &lines,
                saved.period_start,
            );
        }

        tracing::info!(
            cooperative = %self.config.cooperative.name,
            period_start = %saved.period_start,
            lines = lines.len(),
            "Period opened"
        );
        Ok(lines)
    }

    /// Locks the active period. Terminal: the lock never comes off.
    ///
    /// # Errors
    ///
    /// Returns `NoActivePeriod` or `AlreadyLocked`.
    pub fn lock_period(&self) -> Result<(), PeriodError> {
        let _guard = self.edit_lock.lock().unwrap();

        let mut active = self.store.load().ok_or(PeriodError::NoActivePeriod)?;
        if active.locked {
            return Err(PeriodError::AlreadyLocked);
        }
        active.locked = true;
        self.store.save(&active);

        tracing::info!(period_start = %active.period_start, "Period locked");
        Ok(())
    }

    /// Replaces the active snapshot while the period is still unlocked.
    ///
    /// # Errors
    ///
    /// Returns `NoActivePeriod`, `PeriodLocked`, or `DuplicatePeriodStart`
    /// when the edit moves the start date onto an existing period.
    pub fn apply_direct_change(&self, changed: OpeningSnapshot) -> Result<(), PeriodError> {
        let _guard = self.edit_lock.lock().unwrap();

        let active = self.store.load().ok_or(PeriodError::NoActivePeriod)?;
        if active.locked {
            return Err(PeriodError::PeriodLocked);
        }
        if changed.period_start != active.period_start
            && self.store.history_dates().contains(&changed.period_start)
        {
            return Err(PeriodError::DuplicatePeriodStart(changed.period_start));
        }

        let mut saved = changed;
        saved.locked = false;
        self.store.save(&saved);

        tracing::debug!(period_start = %saved.period_start, "Opening balance edited");
        Ok(())
    }

    /// Records a revision of the locked snapshot as a correction journal.
    ///
    /// Diffs the active snapshot against the revision, posts the balanced
    /// correction to the sink, and stores the revision as the live snapshot
    /// (still locked). A revision with no material change posts nothing,
    /// stores nothing, and succeeds with an empty journal.
    ///
    /// # Errors
    ///
    /// Returns `NoActivePeriod` or `CorrectionRequiresLock`.
    pub fn apply_correction(
        &self,
        revised: OpeningSnapshot,
        date: NaiveDate,
    ) -> Result<Vec<JournalLine>, PeriodError> {
        let _guard = self.edit_lock.lock().unwrap();

        let active = self.store.load().ok_or(PeriodError::NoActivePeriod)?;
        if !active.locked {
            return Err(PeriodError::CorrectionRequiresLock);
        }

        let mut saved = revised;
        saved.period_start = active.period_start;
        saved.locked = true;

        let lines = diff_snapshots(&active, &saved);
        if lines.is_empty() {
            tracing::debug!(period_start = %active.period_start, "No-op correction");
            return Ok(lines);
        }

        let balance = BalanceReport::check(&lines);
        if !balance.is_valid {
            return Err(PeriodError::UnbalancedJournal {
                debit: balance.total_debit,
                credit: balance.total_credit,
            });
        }

        self.store.save(&saved);
        self.sink.post_journal(
            &self.config.journal.correction_description,
            &lines,
            date,
        );

        tracing::info!(
            period_start = %saved.period_start,
            lines = lines.len(),
            "Correction journal posted"
        );
        Ok(lines)
    }

    /// Derives the opening loan records from the active snapshot's loan
    /// rows.
    ///
    /// # Errors
    ///
    /// Returns `NoActivePeriod` when no period has been opened.
    pub fn record_opening_loans(
        &self,
        directory: &dyn MemberDirectory,
        ids: &dyn LoanIdSource,
    ) -> Result<Vec<LoanRecord>, PeriodError> {
        let active = self.store.load().ok_or(PeriodError::NoActivePeriod)?;
        let recorder = LoanOpeningRecorder::new(directory, ids);
        Ok(recorder.record(&active.loans, active.period_start))
    }
}
