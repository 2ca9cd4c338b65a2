//! Configuration file discovery and loading.
//!
//! envstamp reads at most one file: an explicit `--config` path, or
//! `.envstamp.yml` in the project root. Without either the built-in
//! defaults apply.

use crate::config::schema::StampConfig;
use crate::config::validator::validate;
use crate::error::{Result, StampError};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project-level configuration file.
pub const CONFIG_FILE_NAME: &str = ".envstamp.yml";

/// Locate the configuration file to use, if any.
///
/// # Errors
///
/// Returns `ConfigNotFound` if `explicit` is given but does not exist.
pub fn find_config(project_root: &Path, explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            project_root.join(path)
        };
        if !path.is_file() {
            return Err(StampError::ConfigNotFound { path });
        }
        return Ok(Some(path));
    }

    let path = project_root.join(CONFIG_FILE_NAME);
    Ok(path.is_file().then_some(path))
}

/// Load a single config file and parse it into [`StampConfig`].
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<StampConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StampError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            StampError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into [`StampConfig`].
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<StampConfig> {
    if content.trim().is_empty() {
        return Ok(StampConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| StampError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Resolve, load and validate the configuration for a project.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<StampConfig> {
    let config = match find_config(project_root, explicit)? {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)?
        }
        None => {
            tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
            StampConfig::default()
        }
    };

    validate(&config)?;
    Ok(config)
}
