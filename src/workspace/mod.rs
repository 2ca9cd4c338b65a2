//! File system and version-control effects.
//!
//! Everything the pipeline does to the outside world goes through the
//! [`Workspace`] trait:
//! - [`DiskWorkspace`] operates on a real project directory
//! - [`MemoryWorkspace`] keeps files in memory for tests
//!
//! Paths passed to a workspace are relative to its project root.

pub mod disk;
pub mod git;
pub mod memory;

pub use disk::DiskWorkspace;
pub use git::{parse_porcelain, GIT_STATUS_COMMAND};
pub use memory::MemoryWorkspace;

use std::path::Path;

use crate::error::Result;

/// Side effects needed by a run.
///
/// Methods take `&self` so a [`MarkerGuard`](crate::marker::MarkerGuard)
/// and the pipeline can share one workspace.
pub trait Workspace {
    /// Check whether a file exists.
    fn exists(&self, path: &Path) -> bool;

    /// Read a file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Replace a file's entire content.
    fn write(&self, path: &Path, contents: &str) -> Result<()>;

    /// Raw output of `git status --porcelain -uall` for the project.
    fn git_status(&self) -> Result<String>;
}
