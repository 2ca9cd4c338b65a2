//! envstamp - Stamp `.env` values into Ansible inventory and vars files.
//!
//! envstamp reads a `KEY=VALUE` secrets file and rewrites a configured set
//! of target files from it, toggling the git exclusion marker around the
//! run so the secrets file is hidden again afterwards.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration schema, loading, validation and env parsing
//! - [`error`] - Error types and result aliases
//! - [`marker`] - Git exclusion marker toggling
//! - [`pipeline`] - Standard and post-commit orchestration
//! - [`secrets`] - Secret detection and output masking
//! - [`template`] - Inventory and key-value rendering
//! - [`ui`] - Terminal output
//! - [`workspace`] - File system and git effects
//!
//! # Example
//!
//! ```
//! use envstamp::config::StampConfig;
//! use envstamp::pipeline::StampRunner;
//! use envstamp::ui::MockUI;
//! use envstamp::workspace::MemoryWorkspace;
//!
//! let ws = MemoryWorkspace::new()
//!     .with_file(".gitignore", ".env")
//!     .with_file(".env", "ssh_port=2222\n")
//!     .with_file("vars/ssh.yml", "ssh_port: 22\n");
//! let config = StampConfig::default();
//!
//! StampRunner::new(&ws, &config).run(&mut MockUI::new()).unwrap();
//!
//! assert_eq!(ws.file("vars/ssh.yml").as_deref(), Some("ssh_port: 2222\n"));
//! assert_eq!(ws.file(".gitignore").as_deref(), Some(".env"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod marker;
pub mod pipeline;
pub mod secrets;
pub mod template;
pub mod ui;
pub mod workspace;

pub use error::{Result, StampError};
