//! Injected loan ID generation.
//!
//! ID generation is a capability handed to the recorder rather than a call
//! it makes itself, so record creation is deterministic under test.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use artha_shared::types::LoanId;

/// Source of IDs for newly derived loan records.
pub trait LoanIdSource: Send + Sync {
    /// Returns the next loan ID.
    fn next_id(&self) -> LoanId;
}

/// Time-ordered random IDs (UUID v7), the production source.
#[derive(Debug, Default)]
pub struct RandomLoanIds;

impl LoanIdSource for RandomLoanIds {
    fn next_id(&self) -> LoanId {
        LoanId::new()
    }
}

/// Monotonic counter IDs, deterministic across runs.
#[derive(Debug, Default)]
pub struct SequentialLoanIds {
    counter: AtomicU64,
}

impl SequentialLoanIds {
    /// Creates a source counting from one.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl LoanIdSource for SequentialLoanIds {
    fn next_id(&self) -> LoanId {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        LoanId::from_uuid(Uuid::from_u128(u128::from(n)))
    }
}
