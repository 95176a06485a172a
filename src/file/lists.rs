//! Blacklist and extension-set configuration for file classification.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A set of known-bad file content digests (lowercase hex MD5).
///
/// The set is immutable configuration with process lifetime: it is built
/// once, injected into a classifier, and never mutated during execution.
/// Digests are normalized to lowercase on construction so lookups are
/// case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DigestBlacklist {
    digests: HashSet<String>,
}

impl DigestBlacklist {
    /// Creates a blacklist from an iterator of hex digest strings.
    pub fn new<I, S>(digests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            digests: digests
                .into_iter()
                .map(|d| d.into().to_lowercase())
                .collect(),
        }
    }

    /// The built-in demo blacklist.
    ///
    /// Placeholder fingerprints, not real threat intelligence; deployments
    /// are expected to supply their own set.
    pub fn builtin() -> Self {
        Self::new([
            "e99a18c428cb38d5f260853678922e03",
            "098f6bcd4621d373cade4e832627b4f6",
        ])
    }

    /// Parses a blacklist from a JSON array of digest strings.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let digests: Vec<String> = serde_json::from_str(json)?;
        Ok(Self::new(digests))
    }

    /// Returns `true` if the digest is blacklisted.
    pub fn contains(&self, digest: &str) -> bool {
        self.digests.contains(&digest.to_lowercase())
    }

    /// Returns the number of blacklisted digests.
    pub fn len(&self) -> usize {
        self.digests.len()
    }

    /// Returns `true` if the blacklist is empty.
    pub fn is_empty(&self) -> bool {
        self.digests.is_empty()
    }
}

/// A set of file extensions flagged as higher risk.
///
/// Extensions are stored lowercase with their leading dot; membership
/// checks are case-insensitive. Like [`DigestBlacklist`], this is
/// immutable, process-lifetime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuspiciousExtensions {
    extensions: HashSet<String>,
}

impl SuspiciousExtensions {
    /// Creates an extension set from an iterator of extension strings.
    ///
    /// A missing leading dot is added so `"exe"` and `".exe"` are
    /// equivalent inputs.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|e| {
                    let e = e.into().to_lowercase();
                    if e.starts_with('.') {
                        e
                    } else {
                        format!(".{e}")
                    }
                })
                .collect(),
        }
    }

    /// The built-in extension set: formats commonly used to deliver
    /// malware on desktop systems.
    pub fn builtin() -> Self {
        Self::new([".exe", ".bat", ".vbs", ".scr", ".cmd", ".js", ".ps1"])
    }

    /// Parses an extension set from a JSON array of extension strings.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let extensions: Vec<String> = serde_json::from_str(json)?;
        Ok(Self::new(extensions))
    }

    /// Returns `true` if the extension (with leading dot) is in the set.
    ///
    /// The empty string, used for files without an extension, is never a
    /// member.
    pub fn contains(&self, extension: &str) -> bool {
        !extension.is_empty() && self.extensions.contains(&extension.to_lowercase())
    }

    /// Returns the number of extensions in the set.
    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}
