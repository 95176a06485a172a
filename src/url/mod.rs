//! URL heuristic matching.
//!
//! A [`UrlMatcher`] evaluates candidate URLs against an ordered set of
//! [`UrlRule`]s, compiled once at construction.

mod matcher;
mod rules;

pub use matcher::UrlMatcher;
pub use rules::{builtin_rules, rules_from_json, UrlRule};
