//! Configuration validation rules.
//!
//! This module validates configuration for correctness:
//! - At least one target must be configured
//! - Target paths must be relative and unique
//! - Neither the env file nor the marker file may be a target

use crate::config::schema::StampConfig;
use crate::error::{Result, StampError};
use std::collections::HashSet;

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
        }
    }
}

/// Validate a configuration and return all errors.
///
/// This function collects all validation errors rather than stopping
/// at the first one, allowing users to fix multiple issues at once.
pub fn validate_config(config: &StampConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.targets.is_empty() {
        errors.push(ValidationError::new(
            "no-targets",
            "At least one target must be configured".to_string(),
        ));
    }

    for path in [&config.env_file, &config.marker_file] {
        if path.as_os_str().is_empty() {
            errors.push(ValidationError::new(
                "empty-path",
                "env_file and marker_file must not be empty".to_string(),
            ));
        }
    }

    errors.extend(validate_targets(config));
    errors
}

fn validate_targets(config: &StampConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for target in &config.targets {
        let shown = target.path.display();

        if target.path.is_absolute() {
            errors.push(ValidationError::new(
                "absolute-target",
                format!("Target '{}' must be relative to the project root", shown),
            ));
        }

        if !seen.insert(&target.path) {
            errors.push(ValidationError::new(
                "duplicate-target",
                format!("Target '{}' is listed more than once", shown),
            ));
        }

        if target.path == config.env_file {
            errors.push(ValidationError::new(
                "env-file-target",
                format!("Target '{}' is the env file and cannot be rewritten", shown),
            ));
        }

        if target.path == config.marker_file {
            errors.push(ValidationError::new(
                "marker-file-target",
                format!("Target '{}' is the marker file and cannot be rewritten", shown),
            ));
        }
    }

    errors
}

/// Validate and return Result (for convenience).
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate(config: &StampConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(StampError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
