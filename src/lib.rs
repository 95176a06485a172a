//! # Safescan
//!
//! The detection-and-logging core of a URL/file scanning application:
//! heuristic URL matching, digest-based file classification, and durable
//! scan-history persistence.
//!
//! ## Overview
//!
//! Safescan packages the scanning logic behind a desktop security tool so
//! that presentation layers (GUI shells, clipboard monitors, CLIs) stay
//! thin. It lets you:
//!
//! - Check URLs against an ordered set of heuristic pattern rules
//! - Fingerprint files with a streaming digest and classify them against
//!   a blacklist and a suspicious-extension set
//! - Append timestamped scan records to a flat history file and read the
//!   full history back
//! - Emit structured audit events for every scan
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use safescan::session::ScanSession;
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = ScanSession::builder()
//!         .with_history_path("report_log.txt")
//!         .build();
//!
//!     let verdict = session.scan_url("http://bit.ly/abc123")?;
//!     if verdict.is_suspicious() {
//!         println!("avoid this link");
//!     }
//!
//!     let verdict = session.scan_file(Path::new("download.exe"))?;
//!     println!("file verdict: {verdict}");
//!
//!     println!("{}", session.history()?);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several layers:
//!
//! - **Core**: verdict types, digest computation, and error handling
//! - **Url**: heuristic rules and the compiled matcher
//! - **File**: blacklist/extension configuration and the classifier
//! - **History**: the append-only scan-history store
//! - **Session**: an orchestration façade tying the above together
//! - **Audit**: structured `tracing` events for every scan
//!
//! All operations are synchronous and run to completion on the calling
//! thread; file handles and hash state are scoped to the single call that
//! created them. The built-in rule set, blacklist, and extension set are
//! demo-quality placeholders meant to be replaced with deployment-specific
//! configuration.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod audit;
pub mod core;
pub mod file;
pub mod history;
pub mod session;
pub mod url;

// Re-export commonly used types at the crate root
pub use crate::core::{
    DigestComputer, DigestError, FileDigest, FileVerdict, HistoryError, RuleError, SessionError,
    UrlVerdict,
};
pub use crate::file::{DigestBlacklist, FileClassifier, SuspiciousExtensions};
pub use crate::history::{HistoryStore, ScanRecord};
pub use crate::session::ScanSession;
pub use crate::url::{UrlMatcher, UrlRule};

/// Prelude module for convenient imports.
///
/// ```rust
/// use safescan::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::{
        DigestComputer, DigestError, FileDigest, FileVerdict, HistoryError, RuleError,
        SessionError, UrlVerdict,
    };
    pub use crate::file::{DigestBlacklist, FileClassifier, SuspiciousExtensions};
    pub use crate::history::{HistoryStore, ScanRecord};
    pub use crate::session::ScanSession;
    pub use crate::url::{UrlMatcher, UrlRule};
}
