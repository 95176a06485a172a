//! Core types for the safescan library.
//!
//! This module provides the fundamental building blocks used throughout
//! the library:
//!
//! - [`types`] - Verdict enums and the `FileDigest` structure
//! - [`error`] - Structured error types
//! - [`digest`] - Streaming MD5/SHA-256 file fingerprinting

pub mod digest;
pub mod error;
pub mod types;

// Re-export commonly used types at the core level
pub use digest::DigestComputer;
pub use error::{DigestError, HistoryError, RuleError, SessionError};
pub use types::{FileDigest, FileVerdict, UrlVerdict};
