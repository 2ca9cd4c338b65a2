//! Secret key matching.
//!
//! This module decides which `.env` keys hold sensitive values by matching
//! their names against patterns.

use regex::Regex;

/// A pattern that identifies secret keys.
#[derive(Debug, Clone)]
pub struct SecretPattern {
    /// Name of this pattern (for debugging).
    pub name: String,
    /// Regex pattern to match key names.
    pub key_pattern: Regex,
}

/// Built-in patterns for common secrets.
///
/// Each tuple contains (name, regex_pattern).
pub const BUILTIN_PATTERNS: &[(&str, &str)] = &[
    ("api_key", r"(?i)^.*_?(API_?KEY|APIKEY)$"),
    ("secret", r"(?i)^.*_?(SECRET|SECRET_KEY)$"),
    ("token", r"(?i)^.*_?(TOKEN|ACCESS_TOKEN|AUTH_TOKEN)$"),
    ("password", r"(?i)^.*_?(PASSWORD|PASSWD|PASS|PWD)$"),
    ("credential", r"(?i)^.*_?CREDENTIALS?$"),
    ("private_key", r"(?i)^.*_?PRIVATE_?(KEY)?(_PATH)?$"),
];

/// Matches `.env` key names against secret patterns.
///
/// # Example
///
/// ```
/// use envstamp::secrets::SecretMatcher;
///
/// let matcher = SecretMatcher::with_builtins();
///
/// assert!(matcher.is_secret("msmtp_password"));
/// assert!(matcher.is_secret("host_ssh_key_private_path"));
/// assert!(!matcher.is_secret("host_port"));
/// ```
#[derive(Debug, Clone)]
pub struct SecretMatcher {
    patterns: Vec<SecretPattern>,
}

impl SecretMatcher {
    /// Create a matcher with built-in patterns.
    pub fn with_builtins() -> Self {
        let patterns = BUILTIN_PATTERNS
            .iter()
            .filter_map(|(name, pattern)| {
                Regex::new(pattern).ok().map(|key_pattern| SecretPattern {
                    name: name.to_string(),
                    key_pattern,
                })
            })
            .collect();

        Self { patterns }
    }

    /// Create a matcher with built-in patterns plus custom exact matches.
    ///
    /// # Example
    ///
    /// ```
    /// use envstamp::secrets::SecretMatcher;
    ///
    /// let custom = vec!["host_ip".to_string()];
    /// let matcher = SecretMatcher::with_builtins_and_custom(&custom);
    ///
    /// assert!(matcher.is_secret("host_ip"));
    /// assert!(matcher.is_secret("API_KEY"));
    /// ```
    pub fn with_builtins_and_custom(custom_names: &[String]) -> Self {
        let mut matcher = Self::with_builtins();

        for name in custom_names {
            if let Ok(pattern) = Regex::new(&format!("^{}$", regex::escape(name))) {
                matcher.patterns.push(SecretPattern {
                    name: format!("custom:{}", name),
                    key_pattern: pattern,
                });
            }
        }

        matcher
    }

    /// Check if a key name matches any secret pattern.
    pub fn is_secret(&self, key: &str) -> bool {
        self.patterns.iter().any(|p| p.key_pattern.is_match(key))
    }

    /// Get the number of patterns.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }
}

impl Default for SecretMatcher {
    fn default() -> Self {
        Self::with_builtins()
    }
}
