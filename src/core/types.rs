//! Core types used throughout the safescan library.
//!
//! This module defines the verdict enums produced by the URL matcher and
//! the file classifier, and the digest structure used for blacklist lookup.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The outcome of classifying a single file.
///
/// The classifier is an ordered decision list: a blacklisted digest takes
/// precedence over a suspicious extension, which takes precedence over
/// `Safe`. A file that could not be fingerprinted produces a
/// [`DigestError`](crate::core::DigestError) instead of any verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FileVerdict {
    /// The file's digest matches a known-bad fingerprint.
    Malicious {
        /// The matching digest (lowercase hex MD5).
        digest: String,
    },

    /// The file carries an extension from the suspicious-extension set.
    SuspiciousExtension {
        /// The offending extension, lowercase, with leading dot.
        extension: String,
    },

    /// Neither the digest nor the extension raised a flag.
    Safe,
}

impl FileVerdict {
    /// Returns `true` if the verdict is [`FileVerdict::Malicious`].
    pub fn is_malicious(&self) -> bool {
        matches!(self, Self::Malicious { .. })
    }

    /// Returns `true` if the verdict is [`FileVerdict::SuspiciousExtension`].
    pub fn is_suspicious_extension(&self) -> bool {
        matches!(self, Self::SuspiciousExtension { .. })
    }

    /// Returns `true` if the verdict is [`FileVerdict::Safe`].
    pub fn is_safe(&self) -> bool {
        matches!(self, Self::Safe)
    }

    /// Short uppercase category label, as written into scan-history lines.
    pub fn category(&self) -> String {
        match self {
            Self::Malicious { .. } => "MALICIOUS".to_string(),
            Self::SuspiciousExtension { extension } => {
                format!("SUSPICIOUS EXTENSION ({extension})")
            }
            Self::Safe => "SAFE".to_string(),
        }
    }
}

impl fmt::Display for FileVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category())
    }
}

/// The outcome of matching a URL against the heuristic rule set.
///
/// The verdict is binary. The matched rule id is reporting metadata only
/// and does not grade the suspicion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UrlVerdict {
    /// At least one heuristic rule matched.
    Suspicious {
        /// Identifier of the first rule that matched.
        rule_id: String,
    },

    /// No rule matched.
    Safe,
}

impl UrlVerdict {
    /// Returns `true` if the verdict is [`UrlVerdict::Suspicious`].
    pub fn is_suspicious(&self) -> bool {
        matches!(self, Self::Suspicious { .. })
    }

    /// Returns `true` if the verdict is [`UrlVerdict::Safe`].
    pub fn is_safe(&self) -> bool {
        matches!(self, Self::Safe)
    }

    /// Returns the id of the matched rule, if any.
    pub fn rule_id(&self) -> Option<&str> {
        match self {
            Self::Suspicious { rule_id } => Some(rule_id),
            Self::Safe => None,
        }
    }

    /// Short uppercase category label, as written into scan-history lines.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Suspicious { .. } => "SUSPICIOUS",
            Self::Safe => "SAFE",
        }
    }
}

impl fmt::Display for UrlVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category())
    }
}

/// Content digests of a scanned file.
///
/// MD5 is the primary digest because the blacklist format is MD5-keyed.
/// SHA-256 is optional and provided as the migration path to a stronger
/// fingerprint; when the blacklist format moves, lookups can switch over
/// without touching the streaming pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileDigest {
    /// MD5 digest, lowercase hex (primary, blacklist-keyed).
    pub md5: String,

    /// SHA-256 digest, lowercase hex (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
}

impl FileDigest {
    /// Creates a new `FileDigest` with only the MD5 digest.
    pub fn new(md5: impl Into<String>) -> Self {
        Self {
            md5: md5.into(),
            sha256: None,
        }
    }

    /// Sets the SHA-256 digest.
    pub fn with_sha256(mut self, sha256: impl Into<String>) -> Self {
        self.sha256 = Some(sha256.into());
        self
    }

    /// Returns the primary digest used for blacklist lookup.
    pub fn primary(&self) -> &str {
        &self.md5
    }
}

impl fmt::Display for FileDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "md5:{}", self.md5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_verdict_is_methods() {
        let malicious = FileVerdict::Malicious {
            digest: "abc".into(),
        };
        assert!(malicious.is_malicious());
        assert!(!malicious.is_safe());

        let ext = FileVerdict::SuspiciousExtension {
            extension: ".exe".into(),
        };
        assert!(ext.is_suspicious_extension());

        assert!(FileVerdict::Safe.is_safe());
    }

    #[test]
    fn test_file_verdict_category() {
        let ext = FileVerdict::SuspiciousExtension {
            extension: ".exe".into(),
        };
        assert_eq!(ext.category(), "SUSPICIOUS EXTENSION (.exe)");
        assert_eq!(FileVerdict::Safe.category(), "SAFE");
    }

    #[test]
    fn test_url_verdict_rule_id() {
        let verdict = UrlVerdict::Suspicious {
            rule_id: "url-shortener".into(),
        };
        assert!(verdict.is_suspicious());
        assert_eq!(verdict.rule_id(), Some("url-shortener"));
        assert_eq!(UrlVerdict::Safe.rule_id(), None);
    }

    #[test]
    fn test_file_digest_display() {
        let digest = FileDigest::new("abc123").with_sha256("def456");
        assert_eq!(format!("{}", digest), "md5:abc123");
        assert_eq!(digest.primary(), "abc123");
    }
}
