//! Engine-generated journals.
//!
//! This module builds the two journals the engine owns:
//! - the opening journal derived from a fresh snapshot
//! - the correction journal derived from a snapshot diff after lock
//!
//! Both are balanced by construction: every tracked-account movement is
//! paired against the capital counter-account.

pub mod correction;
pub mod lines;
pub mod opening;
pub mod sink;

#[cfg(test)]
mod journal_props;

pub use correction::diff_snapshots;
pub use lines::counter_lines;
pub use opening::opening_journal;
pub use sink::{JournalSink, PostedJournal, RecordingSink};
