//! Journal posting contract.
//!
//! The engine generates journals; posting them to the general ledger is the
//! surrounding application's job. The sink is injected so tests and callers
//! can observe exactly what would be posted.

use std::sync::RwLock;

use chrono::NaiveDate;
use serde::Serialize;

use crate::ledger::types::JournalLine;

/// A journal as handed to the posting collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostedJournal {
    /// Audit description.
    pub description: String,
    /// Posting date.
    pub date: NaiveDate,
    /// The balanced line set.
    pub lines: Vec<JournalLine>,
}

/// Destination for engine-generated journals.
pub trait JournalSink: Send + Sync {
    /// Hands a balanced journal to the general ledger.
    fn post_journal(&self, description: &str, lines: &[JournalLine], date: NaiveDate);
}

/// A sink that records every posted journal, for tests and audit replay.
#[derive(Debug, Default)]
pub struct RecordingSink {
    posted: RwLock<Vec<PostedJournal>>,
}

impl RecordingSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything posted so far, in order.
    #[must_use]
    pub fn posted(&self) -> Vec<PostedJournal> {
        self.posted.read().unwrap().clone()
    }
}

impl JournalSink for RecordingSink {
    fn post_journal(&self, description: &str, lines: &[JournalLine], date: NaiveDate) {
        self.posted.write().unwrap().push(PostedJournal {
            description: description.to_string(),
            date,
            lines: lines.to_vec(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();

        sink.post_journal("first", &[JournalLine::debit("1-1000", dec!(10))], date);
        sink.post_journal("second", &[JournalLine::credit("3-1000", dec!(10))], date);

        let posted = sink.posted();
        assert_eq!(posted.len(), 2);
        assert_eq!(posted[0].description, "first");
        assert_eq!(posted[1].description, "second");
        assert_eq!(posted[0].lines.len(), 1);
    }
}
