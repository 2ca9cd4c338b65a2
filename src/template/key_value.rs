//! Line-oriented `key: value` rewriting.

use crate::config::{Dialect, EnvMap};

/// Rewrite a `key: value` file from the environment mapping.
///
/// Each line's key is the text before its first `:` (trimmed in the
/// standard dialect). Lines whose key maps to a non-empty value become
/// `key: value`; every other line is dropped. A newline follows each
/// emitted line except one at the last original line position, so a file
/// that ended with `\n` keeps its trailing newline.
///
/// # Example
///
/// ```
/// use envstamp::config::{Dialect, EnvMap};
/// use envstamp::template::rewrite_key_value;
///
/// let mut env = EnvMap::new();
/// env.insert("foo".into(), "X".into());
///
/// assert_eq!(rewrite_key_value("foo: 1\nbar: 2", &env, Dialect::Standard), "foo: X\n");
/// ```
pub fn rewrite_key_value(content: &str, env: &EnvMap, dialect: Dialect) -> String {
    let lines: Vec<&str> = content.split('\n').collect();
    let last = lines.len() - 1;
    let mut out = String::with_capacity(content.len());

    for (index, line) in lines.iter().enumerate() {
        let key = line_key(line, dialect);

        let Some(value) = env.get(key).filter(|v| !v.is_empty()) else {
            continue;
        };

        out.push_str(key);
        out.push_str(": ");
        out.push_str(value);
        if index != last {
            out.push('\n');
        }
    }

    out
}

fn line_key(line: &str, dialect: Dialect) -> &str {
    let key = line.split_once(':').map_or(line, |(key, _)| key);
    match dialect {
        Dialect::Standard => key.trim(),
        Dialect::Legacy => key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> EnvMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn drops_unmatched_lines() {
        let out = rewrite_key_value("foo: 1\nbar: 2", &env(&[("foo", "X")]), Dialect::Standard);
        assert_eq!(out, "foo: X\n");
    }

    #[test]
    fn replaces_matching_values() {
        let content = "fail2ban_bantime: 600\nfail2ban_maxretry: 3\n";
        let env = env(&[("fail2ban_bantime", "3600"), ("fail2ban_maxretry", "5")]);

        let out = rewrite_key_value(content, &env, Dialect::Standard);

        assert_eq!(out, "fail2ban_bantime: 3600\nfail2ban_maxretry: 5\n");
    }

    #[test]
    fn last_line_gets_no_newline() {
        let out = rewrite_key_value("a: 1\nb: 2", &env(&[("a", "x"), ("b", "y")]), Dialect::Standard);
        assert_eq!(out, "a: x\nb: y");
    }

    #[test]
    fn emptied_file_stays_empty() {
        let out = rewrite_key_value("a: 1\nb: 2\n", &EnvMap::new(), Dialect::Standard);
        assert_eq!(out, "");
    }

    #[test]
    fn standard_trims_keys() {
        let out = rewrite_key_value("  ssh_port : 22\n", &env(&[("ssh_port", "2222")]), Dialect::Standard);
        assert_eq!(out, "ssh_port: 2222\n");
    }

    #[test]
    fn legacy_keeps_raw_keys() {
        let env = env(&[("ssh_port", "2222")]);

        assert_eq!(
            rewrite_key_value("  ssh_port: 22\nssh_port: 22", &env, Dialect::Legacy),
            "ssh_port: 2222"
        );
    }

    #[test]
    fn value_with_colons_is_replaced_whole() {
        let out = rewrite_key_value(
            "msmtp_host: smtp.example.com:587\n",
            &env(&[("msmtp_host", "mail.internal:2525")]),
            Dialect::Standard,
        );
        assert_eq!(out, "msmtp_host: mail.internal:2525\n");
    }

    #[test]
    fn line_without_colon_matches_whole_line() {
        let out = rewrite_key_value("enabled\n", &env(&[("enabled", "true")]), Dialect::Standard);
        assert_eq!(out, "enabled: true\n");
    }

    #[test]
    fn empty_values_drop_the_line() {
        let out = rewrite_key_value("a: 1\n", &env(&[("a", "")]), Dialect::Legacy);
        assert_eq!(out, "");
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(rewrite_key_value("", &env(&[("a", "1")]), Dialect::Standard), "");
    }
}
