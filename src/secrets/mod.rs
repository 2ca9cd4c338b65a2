//! Secret detection and masking.
//!
//! Previews print rendered target files to the terminal; this module keeps
//! sensitive `.env` values out of that output:
//!
//! - [`SecretMatcher`] - decides which keys hold secrets
//! - [`OutputMasker`] - replaces their values before rendering
//!
//! # Example
//!
//! ```
//! use envstamp::config::EnvMap;
//! use envstamp::secrets::{OutputMasker, SecretMatcher};
//!
//! let mut env = EnvMap::new();
//! env.insert("msmtp_password".into(), "hunter2".into());
//!
//! let masker = OutputMasker::new(SecretMatcher::with_builtins());
//! assert_eq!(masker.mask_env(&env)["msmtp_password"], "[REDACTED]");
//! ```

pub mod mask;
pub mod pattern;

pub use mask::{OutputMasker, DEFAULT_MASK};
pub use pattern::{SecretMatcher, SecretPattern, BUILTIN_PATTERNS};
