//! The append-only scan-history store.

use crate::core::error::HistoryError;
use crate::history::record::ScanRecord;

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Sentinel returned by [`HistoryStore::read_all`] when the store has
/// never been created. A missing store is empty history, not an error.
pub const NO_HISTORY_SENTINEL: &str = "No logs found.";

/// Appends timestamped scan records to a flat text file and reads the
/// full history back.
///
/// Each append is an independent, durable write: the file is opened in
/// append mode (created if missing), one line is written, and the handle
/// is closed before the call returns. There is no batching and no
/// locking; the model is a single process with a single writer.
///
/// # Examples
///
/// ```rust,no_run
/// use safescan::history::HistoryStore;
///
/// let store = HistoryStore::new("report_log.txt");
/// store.append("Link Scan - http://bit.ly/abc123 - SUSPICIOUS")?;
/// println!("{}", store.read_all()?);
/// # Ok::<(), safescan::core::HistoryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    /// Creates a store backed by the file at `path`.
    ///
    /// The file itself is created lazily, on the first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one record, stamped with the current local time.
    ///
    /// # Errors
    ///
    /// Any I/O failure propagates as [`HistoryError::Append`]; a scan that
    /// is not recorded must not fail silently.
    pub fn append(&self, description: &str) -> Result<(), HistoryError> {
        self.append_record(&ScanRecord::now(description))
    }

    /// Appends an already-stamped record.
    pub fn append_record(&self, record: &ScanRecord) -> Result<(), HistoryError> {
        let line = format!("{}\n", record.format_line());

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| HistoryError::Append {
                path: self.path.display().to_string(),
                source: e,
            })?;

        file.write_all(line.as_bytes())
            .map_err(|e| HistoryError::Append {
                path: self.path.display().to_string(),
                source: e,
            })?;

        tracing::debug!(
            path = %self.path.display(),
            description = %record.description,
            "History record appended"
        );

        Ok(())
    }

    /// Returns the full current content of the store, verbatim.
    ///
    /// A store that has never been created yields
    /// [`NO_HISTORY_SENTINEL`] instead of an error. Any other read
    /// failure propagates as [`HistoryError::Read`].
    pub fn read_all(&self) -> Result<String, HistoryError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(NO_HISTORY_SENTINEL.to_string())
            }
            Err(e) => Err(HistoryError::Read {
                path: self.path.display().to_string(),
                source: e,
            }),
        }
    }

    /// Returns the parsed records currently in the store.
    ///
    /// A missing store yields an empty list. Lines that do not parse as
    /// records (foreign content in the file) are skipped.
    pub fn records(&self) -> Result<Vec<ScanRecord>, HistoryError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(content.lines().filter_map(ScanRecord::parse_line).collect()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(HistoryError::Read {
                path: self.path.display().to_string(),
                source: e,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> HistoryStore {
        HistoryStore::new(dir.path().join("report_log.txt"))
    }

    #[test]
    fn test_fresh_store_reads_sentinel() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.read_all().unwrap(), NO_HISTORY_SENTINEL);
        assert!(store.records().unwrap().is_empty());
    }

    #[test]
    fn test_append_then_read_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let descriptions = [
            "Link Scan - http://bit.ly/abc123 - SUSPICIOUS",
            "File Scan - readme.txt - SAFE",
            "File Scan - unknown.exe - SUSPICIOUS EXTENSION (.exe)",
        ];
        for d in &descriptions {
            store.append(d).unwrap();
        }

        let content = store.read_all().unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);

        let prefix = Regex::new(r"^\[\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\] ").unwrap();
        for (line, description) in lines.iter().zip(&descriptions) {
            assert!(prefix.is_match(line), "bad prefix: {line}");
            assert!(line.ends_with(description), "bad suffix: {line}");
        }
    }

    #[test]
    fn test_records_preserve_append_order() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        for i in 0..5 {
            store.append(&format!("scan {i}")).unwrap();
        }

        let records = store.records().unwrap();
        assert_eq!(records.len(), 5);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.description, format!("scan {i}"));
        }
    }

    #[test]
    fn test_records_skip_foreign_lines() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.append("real record").unwrap();
        std::fs::write(
            store.path(),
            format!("{}\nnot a record\n", store.read_all().unwrap().trim_end()),
        )
        .unwrap();

        let records = store.records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].description, "real record");
    }

    #[test]
    fn test_append_failure_propagates() {
        let dir = TempDir::new().unwrap();
        // Parent directory does not exist, so the open must fail.
        let store = HistoryStore::new(dir.path().join("missing-dir/report_log.txt"));
        let err = store.append("lost scan").unwrap_err();
        assert!(matches!(err, HistoryError::Append { .. }));
    }
}
