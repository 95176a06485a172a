//! Durable scan-history persistence.
//!
//! The store is a flat, append-only UTF-8 text file, one scan event per
//! line, never rewritten or compacted. See [`HistoryStore`].

mod record;
mod store;

pub use record::{ScanRecord, TIMESTAMP_FORMAT};
pub use store::{HistoryStore, NO_HISTORY_SENTINEL};
