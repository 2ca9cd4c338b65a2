//! Git exclusion marker toggling.
//!
//! The marker file (`.gitignore` by default) holds either nothing or the
//! name of the secrets file. A run clears it so the secrets file is
//! visible to git, then writes the name back to hide it again.
//!
//! [`MarkerGuard`] ties the restore to scope: it happens on every exit
//! path, including early returns and `?` propagation.
//!
//! # Example
//!
//! ```
//! use envstamp::marker::MarkerGuard;
//! use envstamp::workspace::MemoryWorkspace;
//!
//! let ws = MemoryWorkspace::new().with_file(".gitignore", ".env");
//! {
//!     let _guard = MarkerGuard::acquire(&ws, ".gitignore", ".env").unwrap();
//!     assert_eq!(ws.file(".gitignore").as_deref(), Some(""));
//! }
//! assert_eq!(ws.file(".gitignore").as_deref(), Some(".env"));
//! ```

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::workspace::Workspace;

/// Overwrite the marker file's entire content.
///
/// With `active` the marker names the secrets file, hiding it from git;
/// otherwise the marker is emptied.
pub fn set_ignore_state<W: Workspace + ?Sized>(
    workspace: &W,
    marker: &Path,
    active: bool,
    secrets_name: &str,
) -> Result<()> {
    let contents = if active { secrets_name } else { "" };
    tracing::debug!(
        "Setting {} to {}",
        marker.display(),
        if active { "hidden" } else { "exposed" }
    );
    workspace.write(marker, contents)
}

/// Keeps the marker cleared for as long as it is alive.
pub struct MarkerGuard<'a, W: Workspace + ?Sized> {
    workspace: &'a W,
    marker: PathBuf,
    secrets_name: String,
    armed: bool,
}

impl<'a, W: Workspace + ?Sized> MarkerGuard<'a, W> {
    /// Clear the marker and return a guard that restores it.
    ///
    /// # Errors
    ///
    /// Returns the write error if the marker cannot be cleared; nothing is
    /// restored in that case.
    pub fn acquire(
        workspace: &'a W,
        marker: impl Into<PathBuf>,
        secrets_name: impl Into<String>,
    ) -> Result<Self> {
        let marker = marker.into();
        let secrets_name = secrets_name.into();

        set_ignore_state(workspace, &marker, false, &secrets_name)?;

        Ok(Self {
            workspace,
            marker,
            secrets_name,
            armed: true,
        })
    }

    /// Restore the marker now and report the outcome.
    pub fn release(mut self) -> Result<()> {
        self.armed = false;
        set_ignore_state(self.workspace, &self.marker, true, &self.secrets_name)
    }
}

impl<W: Workspace + ?Sized> Drop for MarkerGuard<'_, W> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }

        if let Err(e) = set_ignore_state(self.workspace, &self.marker, true, &self.secrets_name) {
            tracing::error!(
                "Failed to restore {}: {}. {} may be tracked by git",
                self.marker.display(),
                e,
                self.secrets_name
            );
        }
    }
}
