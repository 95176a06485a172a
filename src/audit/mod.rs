//! Structured audit logging.
//!
//! This module provides functions for emitting structured audit events
//! using the `tracing` crate, under the `safescan::audit` target. Events
//! can be captured by any tracing subscriber the caller installs; the
//! library never installs one itself.

mod events;

pub use events::{emit_digest_failed, emit_file_scanned, emit_url_scanned};
