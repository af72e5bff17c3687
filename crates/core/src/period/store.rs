//! Snapshot persistence contract.
//!
//! The engine never talks to storage directly; it is handed a `PeriodStore`
//! so the same logic runs against memory in tests and a durable backend in
//! production.

use std::collections::BTreeSet;
use std::sync::RwLock;

use chrono::NaiveDate;

use super::snapshot::OpeningSnapshot;

/// Storage for the active snapshot and the start dates of past periods.
pub trait PeriodStore: Send + Sync {
    /// Returns the active snapshot, if a period has been opened.
    fn load(&self) -> Option<OpeningSnapshot>;

    /// Replaces the active snapshot.
    fn save(&self, snapshot: &OpeningSnapshot);

    /// Start dates of every period ever stored, the active one included.
    fn history_dates(&self) -> Vec<NaiveDate>;
}

struct StoreInner {
    active: Option<OpeningSnapshot>,
    history: BTreeSet<NaiveDate>,
}

/// In-memory store backing tests and single-process deployments.
pub struct InMemoryPeriodStore {
    inner: RwLock<StoreInner>,
}

impl InMemoryPeriodStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                active: None,
                history: BTreeSet::new(),
            }),
        }
    }
}

impl Default for InMemoryPeriodStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PeriodStore for InMemoryPeriodStore {
    fn load(&self) -> Option<OpeningSnapshot> {
        self.inner.read().unwrap().active.clone()
    }

    fn save(&self, snapshot: &OpeningSnapshot) {
        let mut inner = self.inner.write().unwrap();
        inner.history.insert(snapshot.period_start);
        inner.active = Some(snapshot.clone());
    }

    fn history_dates(&self) -> Vec<NaiveDate> {
        self.inner.read().unwrap().history.iter().copied().collect()
    }
}
