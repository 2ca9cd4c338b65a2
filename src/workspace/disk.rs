//! Workspace backed by a project directory on disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

use super::{git, Workspace};

/// A project directory on the local file system.
#[derive(Debug, Clone)]
pub struct DiskWorkspace {
    root: PathBuf,
}

impl DiskWorkspace {
    /// Create a workspace rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the project root path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl Workspace for DiskWorkspace {
    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).is_file()
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(self.resolve(path))?)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        fs::write(self.resolve(path), contents)?;
        Ok(())
    }

    fn git_status(&self) -> Result<String> {
        git::git_status(&self.root)
    }
}
