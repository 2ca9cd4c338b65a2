//! Secret masking for rendered previews.
//!
//! Masking happens on the environment mapping, not on rendered text. A
//! secret key's value is swapped for the mask before rendering, so only
//! the slots that key fills are hidden and every other byte of the
//! preview matches what a real run writes.

use crate::config::EnvMap;

use super::SecretMatcher;

/// Default replacement for secret values.
pub const DEFAULT_MASK: &str = "[REDACTED]";

/// Replaces the values of secret keys in an environment mapping.
///
/// # Example
///
/// ```
/// use envstamp::config::EnvMap;
/// use envstamp::secrets::{OutputMasker, SecretMatcher};
///
/// let mut env = EnvMap::new();
/// env.insert("msmtp_password".into(), "hunter2".into());
/// env.insert("host_port".into(), "22".into());
///
/// let masked = OutputMasker::new(SecretMatcher::with_builtins()).mask_env(&env);
///
/// assert_eq!(masked["msmtp_password"], "[REDACTED]");
/// assert_eq!(masked["host_port"], "22");
/// ```
#[derive(Debug, Clone)]
pub struct OutputMasker {
    matcher: SecretMatcher,
    mask: String,
}

impl OutputMasker {
    /// Create a masker with the default mask string.
    pub fn new(matcher: SecretMatcher) -> Self {
        Self::with_mask(matcher, DEFAULT_MASK)
    }

    /// Create a masker with a custom mask string.
    pub fn with_mask(matcher: SecretMatcher, mask: impl Into<String>) -> Self {
        Self {
            matcher,
            mask: mask.into(),
        }
    }

    /// Check whether a key's value is masked.
    pub fn is_masked(&self, key: &str) -> bool {
        self.matcher.is_secret(key)
    }

    /// Copy `env` with every non-empty secret value replaced by the mask.
    ///
    /// Empty values stay empty so lines they would drop are still dropped.
    pub fn mask_env(&self, env: &EnvMap) -> EnvMap {
        env.iter()
            .map(|(key, value)| {
                let value = if !value.is_empty() && self.is_masked(key) {
                    self.mask.clone()
                } else {
                    value.clone()
                };
                (key.clone(), value)
            })
            .collect()
    }

    /// Count the keys in `env` whose values would be masked.
    pub fn masked_count(&self, env: &EnvMap) -> usize {
        env.iter()
            .filter(|(key, value)| !value.is_empty() && self.is_masked(key))
            .count()
    }
}

impl Default for OutputMasker {
    fn default() -> Self {
        Self::new(SecretMatcher::default())
    }
}
