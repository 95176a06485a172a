//! The scan session façade.
//!
//! [`ScanSession`] packages the orchestration a presentation layer
//! performs around each user action: produce a verdict, record a one-line
//! summary in the history store, and emit an audit event. Callers that
//! need finer control can use [`UrlMatcher`], [`FileClassifier`], and
//! [`HistoryStore`] directly.

use crate::audit;
use crate::core::error::{HistoryError, SessionError};
use crate::core::types::{FileVerdict, UrlVerdict};
use crate::file::FileClassifier;
use crate::history::HistoryStore;
use crate::url::UrlMatcher;

use std::path::Path;

/// Default history file, next to the process working directory.
const DEFAULT_HISTORY_PATH: &str = "report_log.txt";

/// Builder for creating a [`ScanSession`].
#[derive(Debug, Default)]
pub struct ScanSessionBuilder {
    matcher: Option<UrlMatcher>,
    classifier: Option<FileClassifier>,
    history: Option<HistoryStore>,
}

impl ScanSessionBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the URL matcher. Defaults to the built-in rule set.
    pub fn with_matcher(mut self, matcher: UrlMatcher) -> Self {
        self.matcher = Some(matcher);
        self
    }

    /// Sets the file classifier. Defaults to the built-in demo lists.
    pub fn with_classifier(mut self, classifier: FileClassifier) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Sets the history store. Defaults to `report_log.txt` in the
    /// current working directory.
    pub fn with_history(mut self, history: HistoryStore) -> Self {
        self.history = Some(history);
        self
    }

    /// Sets the history store by path.
    pub fn with_history_path(self, path: impl Into<std::path::PathBuf>) -> Self {
        self.with_history(HistoryStore::new(path))
    }

    /// Builds the session, filling unset components with defaults.
    pub fn build(self) -> ScanSession {
        ScanSession {
            matcher: self.matcher.unwrap_or_default(),
            classifier: self
                .classifier
                .unwrap_or_else(FileClassifier::with_builtin_lists),
            history: self
                .history
                .unwrap_or_else(|| HistoryStore::new(DEFAULT_HISTORY_PATH)),
        }
    }
}

/// Orchestrates scans: verdict, history record, audit event.
///
/// Every scan action appends exactly one history line carrying the
/// subject (URL or path) and the outcome category, so the store reads as
/// a chronological report. A file that cannot be fingerprinted is
/// recorded as `UNREADABLE` and returned as an error, never as a verdict.
///
/// # Examples
///
/// ```rust,no_run
/// use safescan::session::ScanSession;
///
/// let session = ScanSession::builder()
///     .with_history_path("report_log.txt")
///     .build();
///
/// let verdict = session.scan_url("http://bit.ly/abc123")?;
/// assert!(verdict.is_suspicious());
/// # Ok::<(), safescan::core::HistoryError>(())
/// ```
#[derive(Debug)]
pub struct ScanSession {
    matcher: UrlMatcher,
    classifier: FileClassifier,
    history: HistoryStore,
}

impl ScanSession {
    /// Creates a new builder.
    pub fn builder() -> ScanSessionBuilder {
        ScanSessionBuilder::new()
    }

    /// Creates a session from explicit components.
    pub fn new(matcher: UrlMatcher, classifier: FileClassifier, history: HistoryStore) -> Self {
        Self {
            matcher,
            classifier,
            history,
        }
    }

    /// Returns the URL matcher.
    pub fn matcher(&self) -> &UrlMatcher {
        &self.matcher
    }

    /// Returns the file classifier.
    pub fn classifier(&self) -> &FileClassifier {
        &self.classifier
    }

    /// Returns the history store.
    pub fn history_store(&self) -> &HistoryStore {
        &self.history
    }

    /// Scans a URL, records the outcome, and returns the verdict.
    ///
    /// The history line has the form
    /// `Link Scan - <url> - SUSPICIOUS|SAFE`.
    ///
    /// # Errors
    ///
    /// Matching itself cannot fail; only a history write failure
    /// propagates.
    pub fn scan_url(&self, url: &str) -> Result<UrlVerdict, HistoryError> {
        let scan_id = uuid::Uuid::new_v4().to_string();
        let verdict = self.matcher.evaluate(url);

        audit::emit_url_scanned(&scan_id, url, &verdict);
        self.history
            .append(&format!("Link Scan - {url} - {}", verdict.category()))?;

        Ok(verdict)
    }

    /// Scans a file, records the outcome, and returns the verdict.
    ///
    /// The history line has the form
    /// `File Scan - <path> - MALICIOUS|SUSPICIOUS EXTENSION (<ext>)|SAFE`.
    /// A digest failure is recorded as `File Scan - <path> - UNREADABLE`
    /// and then returned as [`SessionError::Digest`], so the caller can
    /// never conflate "could not classify" with "classified and safe".
    pub fn scan_file(&self, path: &Path) -> Result<FileVerdict, SessionError> {
        let scan_id = uuid::Uuid::new_v4().to_string();

        match self.classifier.classify_detailed(path) {
            Ok((digest, verdict)) => {
                audit::emit_file_scanned(&scan_id, path, &digest, &verdict);
                self.history.append(&format!(
                    "File Scan - {} - {}",
                    path.display(),
                    verdict.category()
                ))?;
                Ok(verdict)
            }
            Err(err) => {
                audit::emit_digest_failed(&scan_id, path, &err);
                self.history
                    .append(&format!("File Scan - {} - UNREADABLE", path.display()))?;
                Err(err.into())
            }
        }
    }

    /// Returns the full scan history, or the empty-history sentinel.
    pub fn history(&self) -> Result<String, HistoryError> {
        self.history.read_all()
    }
}

impl Default for ScanSession {
    fn default() -> Self {
        Self::builder().build()
    }
}
