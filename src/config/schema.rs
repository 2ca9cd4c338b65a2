//! Configuration schema definitions for envstamp.
//!
//! This module contains the struct definitions that map to the optional
//! `.envstamp.yml` file. Every field has a default, so an absent file
//! yields the stock Ansible layout.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for `.envstamp.yml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StampConfig {
    /// Environment-definition file holding the secrets.
    #[serde(default = "default_env_file")]
    pub env_file: PathBuf,

    /// Git exclusion file toggled around a run.
    #[serde(default = "default_marker_file")]
    pub marker_file: PathBuf,

    /// Parsing and rewriting rules.
    pub dialect: Dialect,

    /// Output mode used when no `--verbose`/`--quiet` flag is given.
    pub default_output: OutputMode,

    /// Extra env keys whose values are redacted in previews.
    #[serde(default = "default_redact_keys", skip_serializing_if = "Vec::is_empty")]
    pub redact_keys: Vec<String>,

    /// Files to substitute, in processing order.
    #[serde(default = "default_targets")]
    pub targets: Vec<TargetSpec>,
}

impl Default for StampConfig {
    fn default() -> Self {
        Self {
            env_file: default_env_file(),
            marker_file: default_marker_file(),
            dialect: Dialect::default(),
            default_output: OutputMode::default(),
            redact_keys: default_redact_keys(),
            targets: default_targets(),
        }
    }
}

impl StampConfig {
    /// Content written to the marker file while the secrets file is hidden.
    pub fn marker_content(&self) -> String {
        self.env_file.to_string_lossy().into_owned()
    }

    /// Paths `git status` output is matched against: every target plus the
    /// env file itself.
    pub fn candidate_paths(&self) -> Vec<&Path> {
        self.targets
            .iter()
            .map(|t| t.path.as_path())
            .chain(std::iter::once(self.env_file.as_path()))
            .collect()
    }

    /// Look up the target configured for a path.
    pub fn target_for(&self, path: &Path) -> Option<&TargetSpec> {
        self.targets.iter().find(|t| t.path == path)
    }
}

/// A file eligible for substitution and the strategy that rewrites it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSpec {
    /// Path relative to the project root.
    pub path: PathBuf,

    /// How the file is rewritten.
    pub strategy: Strategy,
}

impl TargetSpec {
    pub fn new(path: impl Into<PathBuf>, strategy: Strategy) -> Self {
        Self {
            path: path.into(),
            strategy,
        }
    }
}

/// Substitution strategy for a target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Replace the whole file with the fixed Ansible inventory template.
    Inventory,
    /// Rewrite `key: value` lines from the environment mapping.
    KeyValue,
}

/// Rule set for reading `.env` and rewriting key/value files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Trimmed keys and values, comments and blank lines skipped.
    #[default]
    Standard,
    /// Untrimmed `key=value` split keeping only the second segment, every
    /// line taken literally.
    Legacy,
}

/// Output verbosity mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    #[default]
    Normal,
    Quiet,
    Silent,
}

fn default_env_file() -> PathBuf {
    PathBuf::from(".env")
}

fn default_marker_file() -> PathBuf {
    PathBuf::from(".gitignore")
}

fn default_redact_keys() -> Vec<String> {
    vec![
        "host_ip".to_string(),
        "host_user".to_string(),
        "host_ssh_key_private_path".to_string(),
    ]
}

fn default_targets() -> Vec<TargetSpec> {
    vec![
        TargetSpec::new("inventory.ini", Strategy::Inventory),
        TargetSpec::new("vars/fail2ban.yml", Strategy::KeyValue),
        TargetSpec::new("vars/msmtp.yml", Strategy::KeyValue),
        TargetSpec::new("vars/rkhunter.yml", Strategy::KeyValue),
        TargetSpec::new("vars/ssh.yml", Strategy::KeyValue),
        TargetSpec::new("vars/unattended-upgrades.yml", Strategy::KeyValue),
    ]
}
