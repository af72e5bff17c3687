//! Bookkeeping period management.
//!
//! This module owns the opening-balance snapshot and the lock protocol
//! around it:
//!
//! - `snapshot` - The opening-balance snapshot and its sub-ledgers
//! - `lock` - The `NoPeriod -> Unlocked -> Locked` state machine
//! - `store` - Snapshot persistence contract
//! - `service` - Orchestration of open, lock, edit, and correction
//! - `error` - Period-specific error types

pub mod error;
pub mod lock;
pub mod service;
pub mod snapshot;
pub mod store;

pub use error::PeriodError;
pub use lock::{PeriodLock, PeriodState};
pub use service::PeriodService;
pub use snapshot::{
    InventoryLine, MemberReceivable, MemberSavingsLine, OpeningSnapshot, SupplierPayable,
};
pub use store::{InMemoryPeriodStore, PeriodStore};
