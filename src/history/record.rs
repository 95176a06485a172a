//! Scan record formatting and parsing.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp format used for history lines: second precision, local time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One scan-history entry: a timestamp and a free-text description of the
/// scan and its outcome.
///
/// Records are immutable once written; the store's append order is their
/// chronological order. The on-disk form is a single UTF-8 line:
///
/// ```text
/// [2024-05-01 14:03:22] Link Scan - http://bit.ly/abc123 - SUSPICIOUS
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRecord {
    /// When the scan completed, in local time at second precision.
    pub timestamp: NaiveDateTime,

    /// Human-readable description of the scan and its outcome.
    pub description: String,
}

impl ScanRecord {
    /// Creates a record stamped with the current local time.
    pub fn now(description: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now().naive_local(),
            description: description.into(),
        }
    }

    /// Formats the record as its on-disk line, without trailing newline.
    pub fn format_line(&self) -> String {
        format!(
            "[{}] {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.description
        )
    }

    /// Parses a history line back into a record.
    ///
    /// Returns `None` for lines that do not carry a well-formed
    /// `[timestamp] description` prefix.
    pub fn parse_line(line: &str) -> Option<Self> {
        let rest = line.strip_prefix('[')?;
        let (stamp, description) = rest.split_once("] ")?;
        let timestamp = NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).ok()?;
        Some(Self {
            timestamp,
            description: description.to_string(),
        })
    }
}

impl fmt::Display for ScanRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_line())
    }
}
