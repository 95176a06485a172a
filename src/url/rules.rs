//! Heuristic URL rules.

use serde::{Deserialize, Serialize};

/// A heuristic rule evaluated against a normalized (lowercased) URL.
///
/// Rules are immutable configuration: a matcher compiles a rule set once
/// at construction and never mutates it. Any matching rule makes the URL
/// suspicious; order only determines which rule id gets reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UrlRule {
    /// Matches when the regular expression finds a match anywhere in the
    /// URL (substring search, not a full-string match).
    Pattern {
        /// Stable identifier for reporting.
        id: String,
        /// Regular expression, matched against the lowercased URL.
        pattern: String,
    },

    /// Matches when `prefix` occurs in the URL and the text following it
    /// does NOT match `allowed_suffix` (implicitly anchored at the start
    /// of that text).
    ///
    /// This expresses "a `login.` label not followed by a known-good TLD"
    /// without regex lookaround, which the `regex` crate does not support.
    PrefixWithoutSuffix {
        /// Stable identifier for reporting.
        id: String,
        /// Literal substring to locate (already lowercase).
        prefix: String,
        /// Regular expression the following text must match for the
        /// occurrence to be considered benign.
        allowed_suffix: String,
    },
}

impl UrlRule {
    /// Creates a regular-expression rule.
    pub fn pattern(id: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::Pattern {
            id: id.into(),
            pattern: pattern.into(),
        }
    }

    /// Creates a prefix-without-suffix rule.
    pub fn prefix_without_suffix(
        id: impl Into<String>,
        prefix: impl Into<String>,
        allowed_suffix: impl Into<String>,
    ) -> Self {
        Self::PrefixWithoutSuffix {
            id: id.into(),
            prefix: prefix.into(),
            allowed_suffix: allowed_suffix.into(),
        }
    }

    /// Returns the rule's identifier.
    pub fn id(&self) -> &str {
        match self {
            Self::Pattern { id, .. } | Self::PrefixWithoutSuffix { id, .. } => id,
        }
    }
}

/// The built-in heuristic rule set.
///
/// Five families: bait/phishing keyword combinations, fake login
/// subdomains, fake account/security alerts, known URL shorteners, and
/// email-like strings under high-abuse TLDs.
///
/// These are demo-quality placeholders, not real-world threat coverage;
/// deployments are expected to supply their own rule set.
pub fn builtin_rules() -> Vec<UrlRule> {
    vec![
        UrlRule::pattern(
            "bait-keywords",
            r"(free|bonus|offer|click|win)[-_.]?(now|gift|money|cash)",
        ),
        UrlRule::prefix_without_suffix(
            "fake-login-subdomain",
            "login.",
            r"[a-z]*\.(com|net|org)",
        ),
        UrlRule::pattern(
            "account-alert",
            r"(account|security|bank)[-_.]?(alert|warning)",
        ),
        UrlRule::pattern("url-shortener", r"(bit\.ly|tinyurl\.com|t\.co|goo\.gl)"),
        UrlRule::pattern("abuse-tld", r"[^\s]+@[^.]+\.(ru|cn|tk|top|xyz)"),
    ]
}

/// Parses a rule set from a JSON array.
///
/// The format is the serde representation of [`UrlRule`]:
///
/// ```json
/// [
///   { "type": "pattern", "id": "url-shortener", "pattern": "bit\\.ly" }
/// ]
/// ```
pub fn rules_from_json(json: &str) -> Result<Vec<UrlRule>, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_rules_cover_five_families() {
        let rules = builtin_rules();
        let ids: Vec<&str> = rules.iter().map(|r| r.id()).collect();
        assert_eq!(
            ids,
            [
                "bait-keywords",
                "fake-login-subdomain",
                "account-alert",
                "url-shortener",
                "abuse-tld"
            ]
        );
    }

    #[test]
    fn test_rules_json_roundtrip() {
        let rules = builtin_rules();
        let json = serde_json::to_string(&rules).unwrap();
        let parsed = rules_from_json(&json).unwrap();
        assert_eq!(parsed, rules);
    }

    #[test]
    fn test_rules_from_json_format() {
        let json = r#"[
            { "type": "pattern", "id": "shortener", "pattern": "bit\\.ly" },
            { "type": "prefix_without_suffix", "id": "login", "prefix": "login.",
              "allowed_suffix": "[a-z]*\\.(com|net|org)" }
        ]"#;
        let rules = rules_from_json(json).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].id(), "shortener");
        assert_eq!(rules[1].id(), "login");
    }
}
