//! The URL heuristic matcher.

use crate::core::error::RuleError;
use crate::core::types::UrlVerdict;
use crate::url::rules::{builtin_rules, UrlRule};

use regex::Regex;

/// A rule compiled for repeated evaluation.
#[derive(Debug, Clone)]
enum CompiledRule {
    Pattern { id: String, regex: Regex },
    PrefixWithoutSuffix {
        id: String,
        prefix: String,
        allowed: Regex,
    },
}

impl CompiledRule {
    fn id(&self) -> &str {
        match self {
            Self::Pattern { id, .. } | Self::PrefixWithoutSuffix { id, .. } => id,
        }
    }

    /// Evaluates against an already-lowercased URL.
    fn matches(&self, url: &str) -> bool {
        match self {
            Self::Pattern { regex, .. } => regex.is_match(url),
            Self::PrefixWithoutSuffix {
                prefix, allowed, ..
            } => {
                // Any occurrence of the prefix whose trailing text fails
                // the allowed-suffix expression makes the rule match.
                url.match_indices(prefix.as_str())
                    .any(|(i, _)| !allowed.is_match(&url[i + prefix.len()..]))
            }
        }
    }
}

/// Evaluates URLs against an ordered heuristic rule set.
///
/// All rules are compiled exactly once, at construction. Evaluation
/// lowercases the input (no other sanitization, no scheme or host
/// parsing), walks the rules in order, and short-circuits on the first
/// match. The matcher performs no I/O and holds no mutable state, so
/// repeated calls with the same input always yield the same verdict.
///
/// # Examples
///
/// ```rust
/// use safescan::url::UrlMatcher;
///
/// let matcher = UrlMatcher::with_builtin_rules();
/// assert!(matcher.is_suspicious("http://bit.ly/abc123"));
/// assert!(!matcher.is_suspicious("https://example.com/about"));
/// ```
#[derive(Debug, Clone)]
pub struct UrlMatcher {
    rules: Vec<CompiledRule>,
}

impl UrlMatcher {
    /// Compiles a rule set into a matcher.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::InvalidPattern`] if any rule's regular
    /// expression fails to compile.
    pub fn new(rules: Vec<UrlRule>) -> Result<Self, RuleError> {
        let rules = rules
            .into_iter()
            .map(|rule| match rule {
                UrlRule::Pattern { id, pattern } => {
                    let regex = Regex::new(&pattern)
                        .map_err(|e| RuleError::invalid_pattern(&id, e))?;
                    Ok(CompiledRule::Pattern { id, regex })
                }
                UrlRule::PrefixWithoutSuffix {
                    id,
                    prefix,
                    allowed_suffix,
                } => {
                    // Anchor so the suffix is tested from the character
                    // right after the prefix.
                    let allowed = Regex::new(&format!("^(?:{allowed_suffix})"))
                        .map_err(|e| RuleError::invalid_pattern(&id, e))?;
                    Ok(CompiledRule::PrefixWithoutSuffix {
                        id,
                        prefix,
                        allowed,
                    })
                }
            })
            .collect::<Result<Vec<_>, RuleError>>()?;

        Ok(Self { rules })
    }

    /// Creates a matcher over the built-in five-family rule set.
    pub fn with_builtin_rules() -> Self {
        Self::new(builtin_rules()).expect("built-in rule patterns compile")
    }

    /// Returns the number of rules in the set.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the rule ids in evaluation order.
    pub fn rule_ids(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    /// Returns `true` if any rule matches the URL.
    ///
    /// Malformed or empty input simply matches no rule and returns `false`.
    pub fn is_suspicious(&self, url: &str) -> bool {
        self.first_match(url).is_some()
    }

    /// Evaluates the URL, reporting the first matching rule id.
    pub fn evaluate(&self, url: &str) -> UrlVerdict {
        match self.first_match(url) {
            Some(rule_id) => {
                tracing::debug!(rule_id = %rule_id, url = %url, "URL rule matched");
                UrlVerdict::Suspicious {
                    rule_id: rule_id.to_string(),
                }
            }
            None => UrlVerdict::Safe,
        }
    }

    fn first_match(&self, url: &str) -> Option<&str> {
        let normalized = url.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&normalized))
            .map(|rule| rule.id())
    }
}

impl Default for UrlMatcher {
    fn default() -> Self {
        Self::with_builtin_rules()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bait_keywords() {
        let matcher = UrlMatcher::with_builtin_rules();
        assert!(matcher.is_suspicious("http://example.com/free-gift"));
        assert!(matcher.is_suspicious("http://winnow.example.com"));
        assert!(!matcher.is_suspicious("http://example.com/freedom"));
    }

    #[test]
    fn test_fake_login_subdomain() {
        let matcher = UrlMatcher::with_builtin_rules();
        assert!(matcher.is_suspicious("http://login.example-bank.ru/session"));
        assert!(matcher.is_suspicious("https://login.cm/auth"));
        assert!(!matcher.is_suspicious("https://login.example.com/auth"));
        assert!(!matcher.is_suspicious("https://login.mycorp.org"));
    }

    #[test]
    fn test_account_alert() {
        let matcher = UrlMatcher::with_builtin_rules();
        assert!(matcher.is_suspicious("http://bank-alert.example.com"));
        assert!(matcher.is_suspicious("http://evil.test/security_warning"));
    }

    #[test]
    fn test_url_shortener() {
        let matcher = UrlMatcher::with_builtin_rules();
        assert!(matcher.is_suspicious("http://bit.ly/abc123"));
        assert!(matcher.is_suspicious("https://tinyurl.com/xyz"));
    }

    #[test]
    fn test_abuse_tld() {
        let matcher = UrlMatcher::with_builtin_rules();
        assert!(matcher.is_suspicious("mailto:victim@mail.ru"));
        assert!(matcher.is_suspicious("prize@lottery.xyz"));
    }

    #[test]
    fn test_benign_url() {
        let matcher = UrlMatcher::with_builtin_rules();
        assert!(!matcher.is_suspicious("https://example.com/about"));
    }

    #[test]
    fn test_case_insensitive() {
        let matcher = UrlMatcher::with_builtin_rules();
        assert!(matcher.is_suspicious("HTTP://BIT.LY/ABC123"));
        assert!(matcher.is_suspicious("http://example.com/FREE-GIFT"));
    }

    #[test]
    fn test_empty_input_is_safe() {
        let matcher = UrlMatcher::with_builtin_rules();
        assert!(!matcher.is_suspicious(""));
    }

    #[test]
    fn test_evaluate_reports_first_matching_rule() {
        let matcher = UrlMatcher::with_builtin_rules();
        let verdict = matcher.evaluate("http://bit.ly/abc123");
        assert_eq!(verdict.rule_id(), Some("url-shortener"));

        assert!(matcher.evaluate("https://example.com/about").is_safe());
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let matcher = UrlMatcher::with_builtin_rules();
        let first = matcher.evaluate("http://bit.ly/abc123");
        let second = matcher.evaluate("http://bit.ly/abc123");
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_pattern_is_a_construction_error() {
        let err = UrlMatcher::new(vec![UrlRule::pattern("broken", "(unclosed")]).unwrap_err();
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn test_custom_rule_order_wins() {
        let matcher = UrlMatcher::new(vec![
            UrlRule::pattern("first", "abc"),
            UrlRule::pattern("second", "abc"),
        ])
        .unwrap();
        assert_eq!(matcher.evaluate("xxabcxx").rule_id(), Some("first"));
    }
}
