//! Error types for the safescan library.
//!
//! This module provides structured, typed errors for all failure scenarios.
//! The library never panics; all errors are returned as `Result` values.

use thiserror::Error;

/// Error computing a file's content digest.
///
/// A digest failure means the file could not be fingerprinted and therefore
/// could not be classified. Callers must surface this as a distinct outcome;
/// an unreadable file is never "safe".
#[derive(Debug, Error)]
pub enum DigestError {
    /// The file does not exist at the given path.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: String,
    },

    /// The file could not be opened or read (permission denied, path is a
    /// directory, interrupted read, ...).
    #[error("failed to read '{path}': {source}")]
    Io {
        /// Path that failed.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl DigestError {
    /// Creates a `DigestError` from an I/O error, mapping `NotFound` to
    /// [`DigestError::FileNotFound`].
    pub fn from_io(path: impl Into<String>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    /// Returns the path this error refers to.
    pub fn path(&self) -> &str {
        match self {
            Self::FileNotFound { path } | Self::Io { path, .. } => path,
        }
    }
}

/// Error reading or writing the scan-history store.
///
/// A missing store is not an error: [`HistoryStore::read_all`] reports it
/// through the empty-history sentinel instead. Everything else propagates,
/// since a scan not recorded is a silent loss of history.
///
/// [`HistoryStore::read_all`]: crate::history::HistoryStore::read_all
#[derive(Debug, Error)]
pub enum HistoryError {
    /// Appending a record to the store failed.
    #[error("failed to append to history '{path}': {source}")]
    Append {
        /// Path of the history store.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Reading the store failed for a reason other than the store not
    /// existing yet.
    #[error("failed to read history '{path}': {source}")]
    Read {
        /// Path of the history store.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Error constructing a URL matcher from a rule set.
///
/// Rules are compiled exactly once, at construction; a malformed pattern
/// surfaces here rather than at match time.
#[derive(Debug, Error)]
pub enum RuleError {
    /// A rule's regular expression failed to compile.
    #[error("invalid pattern in rule '{id}': {source}")]
    InvalidPattern {
        /// Identifier of the offending rule.
        id: String,
        /// Underlying regex compilation error.
        source: regex::Error,
    },
}

impl RuleError {
    /// Creates an `InvalidPattern` error.
    pub fn invalid_pattern(id: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            id: id.into(),
            source,
        }
    }
}

/// The error type surfaced by [`ScanSession`] operations.
///
/// [`ScanSession`]: crate::session::ScanSession
#[derive(Debug, Error)]
pub enum SessionError {
    /// The file could not be fingerprinted.
    #[error(transparent)]
    Digest(#[from] DigestError),

    /// The scan could not be recorded in the history store.
    #[error(transparent)]
    History(#[from] HistoryError),
}
