//! Streaming file fingerprinting.
//!
//! This module provides `DigestComputer` for computing file content digests.
//! MD5 is the primary digest because the blacklist format is MD5-keyed;
//! SHA-256 can be computed in the same pass for forward migration.

use crate::core::error::DigestError;
use crate::core::types::FileDigest;

use md5::{Digest, Md5};
use sha2::Sha256;

use std::io::Read;
use std::path::Path;

/// Configuration for computing file digests.
///
/// MD5 is always computed as the primary, blacklist-keyed digest.
/// SHA-256 can be enabled for callers migrating to a stronger fingerprint.
///
/// # Examples
///
/// ```rust
/// use safescan::core::DigestComputer;
///
/// // Default: only MD5
/// let computer = DigestComputer::new();
///
/// // With SHA-256 for a future blacklist format
/// let computer = DigestComputer::new().with_sha256(true);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DigestComputer {
    /// Whether to also compute the SHA-256 digest.
    compute_sha256: bool,
}

impl DigestComputer {
    /// Creates a new `DigestComputer` with default settings (MD5 only).
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables SHA-256 digest computation.
    pub fn with_sha256(mut self, enabled: bool) -> Self {
        self.compute_sha256 = enabled;
        self
    }

    /// Returns whether SHA-256 computation is enabled.
    pub fn computes_sha256(&self) -> bool {
        self.compute_sha256
    }

    /// Computes digests from bytes already in memory.
    pub fn digest_bytes(&self, data: &[u8]) -> FileDigest {
        let md5 = format!("{:x}", Md5::digest(data));

        let sha256 = self
            .compute_sha256
            .then(|| format!("{:x}", Sha256::digest(data)));

        FileDigest { md5, sha256 }
    }

    /// Computes digests from a file path.
    ///
    /// The file is streamed in fixed-size chunks so peak memory stays
    /// bounded regardless of file size. The handle is scoped to this call
    /// and released on every exit path.
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::FileNotFound`] if the path does not exist,
    /// or [`DigestError::Io`] for any other open or read failure. Callers
    /// must treat either as "cannot classify", never as "safe".
    pub fn digest_file(&self, path: &Path) -> Result<FileDigest, DigestError> {
        let file = std::fs::File::open(path)
            .map_err(|e| DigestError::from_io(path.display().to_string(), e))?;

        let mut reader = std::io::BufReader::new(file);
        self.digest_reader(&mut reader)
            .map_err(|e| DigestError::from_io(path.display().to_string(), e))
    }

    /// Computes digests from a synchronous reader in a single pass.
    pub fn digest_reader<R: Read>(&self, reader: &mut R) -> Result<FileDigest, std::io::Error> {
        let mut md5_hasher = Md5::new();
        let mut sha256_hasher = self.compute_sha256.then(Sha256::new);

        let mut buffer = [0u8; 64 * 1024];
        loop {
            let bytes_read = reader.read(&mut buffer)?;
            if bytes_read == 0 {
                break;
            }

            let chunk = &buffer[..bytes_read];
            md5_hasher.update(chunk);
            if let Some(ref mut h) = sha256_hasher {
                h.update(chunk);
            }
        }

        let md5 = format!("{:x}", md5_hasher.finalize());
        let sha256 = sha256_hasher.map(|h| format!("{:x}", h.finalize()));

        Ok(FileDigest { md5, sha256 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_digest_bytes_md5_only() {
        let computer = DigestComputer::new();
        let digest = computer.digest_bytes(b"test");

        assert_eq!(digest.md5, "098f6bcd4621d373cade4e832627b4f6");
        assert_eq!(digest.sha256, None);
    }

    #[test]
    fn test_digest_bytes_with_sha256() {
        let computer = DigestComputer::new().with_sha256(true);
        let digest = computer.digest_bytes(b"test");

        assert_eq!(digest.md5, "098f6bcd4621d373cade4e832627b4f6");
        assert_eq!(
            digest.sha256.as_deref(),
            Some("9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08")
        );
    }

    #[test]
    fn test_digest_empty_input() {
        let computer = DigestComputer::new();
        let digest = computer.digest_bytes(b"");
        assert_eq!(digest.md5, "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn test_digest_file_matches_digest_bytes() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"some file content").unwrap();

        let computer = DigestComputer::new();
        let from_file = computer.digest_file(file.path()).unwrap();
        let from_bytes = computer.digest_bytes(b"some file content");

        assert_eq!(from_file, from_bytes);
    }

    #[test]
    fn test_digest_file_streams_large_input() {
        // Larger than one 64 KiB chunk, so the streaming loop runs twice.
        let data = vec![0xabu8; 100 * 1024];
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&data).unwrap();

        let computer = DigestComputer::new();
        let from_file = computer.digest_file(file.path()).unwrap();
        let from_bytes = computer.digest_bytes(&data);

        assert_eq!(from_file, from_bytes);
    }

    #[test]
    fn test_digest_missing_file() {
        let computer = DigestComputer::new();
        let err = computer
            .digest_file(Path::new("/no/such/file.bin"))
            .unwrap_err();

        assert!(matches!(err, DigestError::FileNotFound { .. }));
    }

    #[test]
    fn test_digest_deterministic() {
        let computer = DigestComputer::new();
        let a = computer.digest_bytes(b"same input");
        let b = computer.digest_bytes(b"same input");
        assert_eq!(a, b);
    }
}
