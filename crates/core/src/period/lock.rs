//! Period lock state machine.
//!
//! A period moves `NoPeriod -> Unlocked -> Locked`, and `Locked` is
//! terminal: a cooperative opens the next period as a fresh snapshot
//! rather than unlocking the old one. The lock is the sole gate consulted
//! before any direct mutation of the opening balance.

use serde::{Deserialize, Serialize};

use super::error::PeriodError;
use super::store::PeriodStore;

/// Lock state of the current bookkeeping period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodState {
    /// No period has been opened.
    NoPeriod,
    /// The opening balance may still be edited directly.
    Unlocked,
    /// Changes are accepted only as correction journals.
    Locked,
}

impl PeriodState {
    /// Returns true if the opening balance may be edited directly.
    #[must_use]
    pub fn allows_direct_change(&self) -> bool {
        !matches!(self, Self::Locked)
    }
}

/// View of the lock state stored with the active snapshot.
pub struct PeriodLock<'a> {
    store: &'a dyn PeriodStore,
}

impl<'a> PeriodLock<'a> {
    /// Creates a lock view over the given store.
    #[must_use]
    pub fn new(store: &'a dyn PeriodStore) -> Self {
        Self { store }
    }

    /// The current lock state.
    #[must_use]
    pub fn state(&self) -> PeriodState {
        match self.store.load() {
            None => PeriodState::NoPeriod,
            Some(snapshot) if snapshot.locked => PeriodState::Locked,
            Some(_) => PeriodState::Unlocked,
        }
    }

    /// Returns true if the stored snapshot exists and is locked.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.state() == PeriodState::Locked
    }

    /// Checks whether a direct mutation of the snapshot is permitted.
    ///
    /// Allowed while no period exists or the period is unlocked; once
    /// locked, the rejection carries the `PERIOD_LOCKED` code and points
    /// the caller to the correction-journal path.
    ///
    /// # Errors
    ///
    /// Returns `PeriodError::PeriodLocked` when the period is locked.
    pub fn validate_direct_change(&self) -> Result<(), PeriodError> {
        if self.state().allows_direct_change() {
            Ok(())
        } else {
            Err(PeriodError::PeriodLocked)
        }
    }
}
