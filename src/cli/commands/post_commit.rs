//! Post-commit command implementation.
//!
//! The `envstamp post-commit` command is meant to be called from a git
//! hook. It rewrites only the targets git reports as changed and always
//! exits 0 so it never blocks the hook; failures are reported instead.

use std::path::{Path, PathBuf};

use crate::config::load_config;
use crate::error::Result;
use crate::pipeline::StampRunner;
use crate::ui::{OutputMode, UserInterface};
use crate::workspace::DiskWorkspace;

use super::dispatcher::{Command, CommandResult};

/// The post-commit command implementation.
pub struct PostCommitCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
}

impl PostCommitCommand {
    /// Create a new post-commit command.
    pub fn new(project_root: &Path, config_path: Option<&Path>) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }
}

impl Command for PostCommitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let outcome = load_config(&self.project_root, self.config_path.as_deref())
            .and_then(|config| {
                // Apply config default_output when no CLI flag was explicitly set
                if ui.output_mode() == OutputMode::Normal {
                    ui.set_output_mode(config.default_output.into());
                }

                let workspace = DiskWorkspace::new(&self.project_root);
                StampRunner::new(&workspace, &config).run_post_commit(ui)
            });

        match outcome {
            Ok(report) if report.written.is_empty() => {
                ui.message("No changed target files");
            }
            Ok(report) => {
                ui.success(&format!("Updated {} changed file(s)", report.written.len()));
            }
            Err(e) => {
                tracing::debug!("post-commit failed: {}", e);
                ui.error(&e.to_string());
            }
        }

        Ok(CommandResult::success())
    }
}
