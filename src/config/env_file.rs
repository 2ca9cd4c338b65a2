//! .env file parsing.
//!
//! This module turns the environment-definition file into an [`EnvMap`].
//! Two dialects are supported; see [`Dialect`].

use std::collections::BTreeMap;

use crate::config::schema::Dialect;

/// Parsed key → value table from the environment-definition file.
pub type EnvMap = BTreeMap<String, String>;

/// Parses .env files into a map of environment variables.
///
/// # Standard dialect
///
/// - Simple: `KEY=value`
/// - Whitespace around equals: `KEY = value`
/// - Values with equals signs: `URL=https://example.com?foo=bar`
/// - Comments (`# ...`) and blank lines are skipped
/// - Lines with an empty key or value are skipped
///
/// # Legacy dialect
///
/// Every line is split on `=` without trimming or comment handling. The
/// key is the first segment and the value is the second; anything after a
/// second `=` is discarded. A line with no `=` carries no value and is
/// dropped, which renders the same as an absent key.
///
/// In both dialects the last occurrence of a key wins.
///
/// # Example
///
/// ```
/// use envstamp::config::{Dialect, EnvFileParser};
///
/// let content = "# vps\nhost_ip = 10.0.0.1\nhost_port=22\n";
///
/// let vars = EnvFileParser::parse(content, Dialect::Standard);
/// assert_eq!(vars.get("host_ip"), Some(&"10.0.0.1".to_string()));
/// assert_eq!(vars.len(), 2);
/// ```
pub struct EnvFileParser;

impl EnvFileParser {
    /// Parse an env file content string into a map of variables.
    pub fn parse(content: &str, dialect: Dialect) -> EnvMap {
        match dialect {
            Dialect::Standard => Self::parse_standard(content),
            Dialect::Legacy => Self::parse_legacy(content),
        }
    }

    fn parse_standard(content: &str) -> EnvMap {
        let mut vars = EnvMap::new();

        for line in content.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = Self::parse_line(line) {
                vars.insert(key, value);
            }
        }

        vars
    }

    /// Parse a single trimmed line.
    fn parse_line(line: &str) -> Option<(String, String)> {
        let (key, value) = line.split_once('=')?;
        let key = key.trim();
        let value = value.trim();

        if key.is_empty() || value.is_empty() {
            return None;
        }

        Some((key.to_string(), value.to_string()))
    }

    fn parse_legacy(content: &str) -> EnvMap {
        content
            .split('\n')
            .filter_map(|line| {
                let mut parts = line.split('=');
                let key = parts.next()?;
                let value = parts.next()?;
                Some((key.to_string(), value.to_string()))
            })
            .collect()
    }
}
