//! Configuration loading, parsing, and validation for envstamp.
//!
//! This module handles all aspects of configuration:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//! - `.env` parsing in [`env_file`]
//!
//! # Example
//!
//! ```
//! use envstamp::config::{load_config, Strategy};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(
//!     temp.path().join(".envstamp.yml"),
//!     "targets:\n  - path: hosts.ini\n    strategy: inventory\n",
//! )
//! .unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.targets[0].strategy, Strategy::Inventory);
//! ```

pub mod env_file;
pub mod loader;
pub mod schema;
pub mod validator;

// Schema re-exports
pub use schema::{Dialect, OutputMode, StampConfig, Strategy, TargetSpec};

// Loader re-exports
pub use loader::{find_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};

// Validator re-exports
pub use validator::{validate, validate_config, ValidationError};

// Env file re-exports
pub use env_file::{EnvFileParser, EnvMap};
