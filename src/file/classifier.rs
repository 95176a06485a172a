//! The file classifier.

use crate::core::digest::DigestComputer;
use crate::core::error::DigestError;
use crate::core::types::{FileDigest, FileVerdict};
use crate::file::lists::{DigestBlacklist, SuspiciousExtensions};

use std::path::Path;

/// Classifies files by digest blacklist lookup and extension lookup.
///
/// Classification is an ordered decision list:
///
/// 1. digest in blacklist → [`FileVerdict::Malicious`] (short-circuit)
/// 2. extension in suspicious set → [`FileVerdict::SuspiciousExtension`]
/// 3. otherwise → [`FileVerdict::Safe`]
///
/// A digest failure propagates as [`DigestError`]; the extension check is
/// never consulted for a file that could not be fingerprinted, so an
/// unreadable file can never be reported as safe.
///
/// # Examples
///
/// ```rust,no_run
/// use safescan::file::FileClassifier;
/// use std::path::Path;
///
/// let classifier = FileClassifier::with_builtin_lists();
/// let verdict = classifier.classify(Path::new("download.exe"))?;
/// if !verdict.is_safe() {
///     println!("flagged: {verdict}");
/// }
/// # Ok::<(), safescan::core::DigestError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct FileClassifier {
    blacklist: DigestBlacklist,
    extensions: SuspiciousExtensions,
    computer: DigestComputer,
}

impl FileClassifier {
    /// Creates a classifier from injected configuration.
    pub fn new(blacklist: DigestBlacklist, extensions: SuspiciousExtensions) -> Self {
        Self {
            blacklist,
            extensions,
            computer: DigestComputer::new(),
        }
    }

    /// Creates a classifier over the built-in demo lists.
    pub fn with_builtin_lists() -> Self {
        Self::new(DigestBlacklist::builtin(), SuspiciousExtensions::builtin())
    }

    /// Replaces the digest computer (e.g. to enable SHA-256).
    pub fn with_digest_computer(mut self, computer: DigestComputer) -> Self {
        self.computer = computer;
        self
    }

    /// Returns the blacklist this classifier consults.
    pub fn blacklist(&self) -> &DigestBlacklist {
        &self.blacklist
    }

    /// Returns the extension set this classifier consults.
    pub fn extensions(&self) -> &SuspiciousExtensions {
        &self.extensions
    }

    /// Classifies the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`DigestError`] when the file cannot be read for
    /// fingerprinting. This is a distinct outcome from any verdict.
    pub fn classify(&self, path: &Path) -> Result<FileVerdict, DigestError> {
        self.classify_detailed(path).map(|(_, verdict)| verdict)
    }

    /// Classifies the file at `path`, returning the computed digest along
    /// with the verdict.
    pub fn classify_detailed(
        &self,
        path: &Path,
    ) -> Result<(FileDigest, FileVerdict), DigestError> {
        let digest = self.computer.digest_file(path)?;
        let verdict = self.classify_digest(path, &digest);
        Ok((digest, verdict))
    }

    /// Classifies using an already-computed digest.
    ///
    /// Useful when the caller has the digest at hand (e.g. from a prior
    /// scan of the same content) and wants to skip re-reading the file.
    pub fn classify_digest(&self, path: &Path, digest: &FileDigest) -> FileVerdict {
        if self.blacklist.contains(digest.primary()) {
            return FileVerdict::Malicious {
                digest: digest.primary().to_string(),
            };
        }

        let extension = extension_of(path);
        if self.extensions.contains(&extension) {
            return FileVerdict::SuspiciousExtension { extension };
        }

        FileVerdict::Safe
    }
}

/// Extracts the final dot-delimited suffix of the filename, lowercased and
/// with its leading dot.
///
/// Files with no extension (including dotfiles like `.bashrc`) yield the
/// empty string, which is never a member of any extension set.
fn extension_of(path: &Path) -> String {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!(".{}", ext.to_lowercase()),
        None => String::new(),
    }
}
