//! In-memory workspace for testing.
//!
//! `MemoryWorkspace` implements the `Workspace` trait over a map of files
//! and records every write for later assertion. Individual paths can be
//! made to fail, and the `git status` output is configurable.
//!
//! # Example
//!
//! ```
//! use envstamp::workspace::{MemoryWorkspace, Workspace};
//! use std::path::Path;
//!
//! let ws = MemoryWorkspace::new().with_file(".env", "host_ip=10.0.0.1\n");
//! ws.write(Path::new("inventory.ini"), "[vps]").unwrap();
//!
//! assert_eq!(ws.file("inventory.ini").as_deref(), Some("[vps]"));
//! assert_eq!(ws.writes(), vec!["inventory.ini".to_string()]);
//! ```

use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Result, StampError};

use super::git::GIT_STATUS_COMMAND;
use super::Workspace;

/// Mock workspace holding files in memory.
#[derive(Debug, Default)]
pub struct MemoryWorkspace {
    files: RefCell<BTreeMap<PathBuf, String>>,
    writes: RefCell<Vec<PathBuf>>,
    failing_writes: HashSet<PathBuf>,
    git_status: Option<String>,
}

impl MemoryWorkspace {
    /// Create an empty workspace with no git repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file.
    pub fn with_file(self, path: impl Into<PathBuf>, contents: &str) -> Self {
        self.files
            .borrow_mut()
            .insert(path.into(), contents.to_string());
        self
    }

    /// Make every write to `path` fail with a permission error.
    pub fn with_failing_write(mut self, path: impl Into<PathBuf>) -> Self {
        self.failing_writes.insert(path.into());
        self
    }

    /// Set the porcelain output returned by `git_status`.
    pub fn with_git_status(mut self, output: &str) -> Self {
        self.git_status = Some(output.to_string());
        self
    }

    /// Get the current content of a file.
    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    /// Get every successful write, in order.
    pub fn writes(&self) -> Vec<String> {
        self.writes
            .borrow()
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect()
    }

    /// Check whether a path was written at least once.
    pub fn was_written(&self, path: impl AsRef<Path>) -> bool {
        self.writes.borrow().iter().any(|p| p == path.as_ref())
    }
}

impl Workspace for MemoryWorkspace {
    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.file(path).ok_or_else(|| {
            StampError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            ))
        })
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        if self.failing_writes.contains(path) {
            return Err(StampError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{} is read-only", path.display()),
            )));
        }

        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_string());
        self.writes.borrow_mut().push(path.to_path_buf());
        Ok(())
    }

    fn git_status(&self) -> Result<String> {
        self.git_status
            .clone()
            .ok_or_else(|| StampError::CommandFailed {
                command: GIT_STATUS_COMMAND.to_string(),
                code: Some(128),
            })
    }
}
