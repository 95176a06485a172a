//! Audit event emission functions.

use crate::core::error::DigestError;
use crate::core::types::{FileDigest, FileVerdict, UrlVerdict};

use std::path::Path;

/// Emits an audit event for a completed URL scan.
pub fn emit_url_scanned(scan_id: &str, url: &str, verdict: &UrlVerdict) {
    tracing::info!(
        target: "safescan::audit",
        event_type = "url_scanned",
        scan_id = %scan_id,
        url = %url,
        verdict = %verdict.category(),
        matched_rule = ?verdict.rule_id(),
        "URL scanned"
    );
}

/// Emits an audit event for a completed file scan.
pub fn emit_file_scanned(scan_id: &str, path: &Path, digest: &FileDigest, verdict: &FileVerdict) {
    tracing::info!(
        target: "safescan::audit",
        event_type = "file_scanned",
        scan_id = %scan_id,
        path = %path.display(),
        digest_md5 = %digest.md5,
        digest_sha256 = ?digest.sha256,
        verdict = %verdict.category(),
        "File scanned"
    );
}

/// Emits an audit event for a file that could not be fingerprinted.
pub fn emit_digest_failed(scan_id: &str, path: &Path, error: &DigestError) {
    tracing::warn!(
        target: "safescan::audit",
        event_type = "digest_failed",
        scan_id = %scan_id,
        path = %path.display(),
        error = %error,
        "File could not be fingerprinted"
    );
}
