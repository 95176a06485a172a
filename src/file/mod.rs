//! File fingerprinting and classification.
//!
//! A [`FileClassifier`] combines a digest lookup against a
//! [`DigestBlacklist`] with an extension lookup against a
//! [`SuspiciousExtensions`] set, in that order.

mod classifier;
mod lists;

pub use classifier::FileClassifier;
pub use lists::{DigestBlacklist, SuspiciousExtensions};
