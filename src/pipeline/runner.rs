//! Pipeline orchestration.

use std::path::{Path, PathBuf};

use crate::config::{EnvFileParser, EnvMap, StampConfig, TargetSpec};
use crate::error::{Result, StampError};
use crate::marker::MarkerGuard;
use crate::secrets::OutputMasker;
use crate::ui::UserInterface;
use crate::workspace::{parse_porcelain, Workspace};

use super::report::{Preview, RenderedTarget, RunReport, TargetFailure};
use super::router::{process_file, render_target};

/// Drives a run against one workspace and configuration.
pub struct StampRunner<'a, W: Workspace + ?Sized> {
    workspace: &'a W,
    config: &'a StampConfig,
}

impl<'a, W: Workspace + ?Sized> StampRunner<'a, W> {
    /// Create a new runner.
    pub fn new(workspace: &'a W, config: &'a StampConfig) -> Self {
        Self { workspace, config }
    }

    /// Run the standard pipeline.
    ///
    /// Targets that exist on disk are rewritten one by one; a failing
    /// target is recorded in the report and the rest still run. The marker
    /// is restored on every path out of this function.
    ///
    /// # Errors
    ///
    /// - `MissingEnvFile` if the env file does not exist
    /// - `NoTargetFilesFound` if no configured target exists
    /// - any error clearing or restoring the marker
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<RunReport> {
        let guard = self.acquire_marker()?;

        self.require_env_file()?;

        let (present, missing) = self.existing_targets();
        for path in &missing {
            tracing::debug!("Target {} does not exist", path.display());
            ui.warning(&format!("File not found, skipping: {}", path.display()));
        }
        if present.is_empty() {
            return Err(StampError::NoTargetFilesFound {
                checked: self.config.targets.len(),
            });
        }

        let env = self.load_env()?;
        self.describe_env(&env, ui);

        let mut report = RunReport {
            missing,
            ..Default::default()
        };

        for target in present {
            ui.message(&format!("Modifying file: {}", target.path.display()));
            match process_file(self.workspace, target, &env, self.config.dialect) {
                Ok(()) => report.written.push(target.path.clone()),
                Err(e) => {
                    tracing::debug!("{}", e);
                    ui.error(&e.to_string());
                    report.failures.push(TargetFailure {
                        path: target.path.clone(),
                        message: e.to_string(),
                    });
                }
            }
        }

        guard.release()?;
        Ok(report)
    }

    /// Run the post-commit pipeline.
    ///
    /// Only targets reported as changed by `git status` are rewritten. The
    /// first failing target aborts the rest. The marker is restored on
    /// every path out of this function.
    pub fn run_post_commit(&self, ui: &mut dyn UserInterface) -> Result<RunReport> {
        let guard = self.acquire_marker()?;

        let status = self.workspace.git_status()?;
        let changed = self.changed_targets(&status);
        tracing::debug!("{} changed target(s) reported by git", changed.len());

        let env = self.load_env()?;
        self.describe_env(&env, ui);

        let mut report = RunReport::default();
        for target in changed {
            ui.message(&format!("Modifying file: {}", target.path.display()));
            process_file(self.workspace, target, &env, self.config.dialect)?;
            report.written.push(target.path.clone());
        }

        guard.release()?;
        Ok(report)
    }

    /// Render every existing target without touching any file.
    ///
    /// With a masker, secret values are replaced in the mapping before
    /// rendering, so keys and non-secret values appear exactly as a real
    /// run would write them.
    pub fn preview(&self, masker: Option<&OutputMasker>) -> Result<Preview> {
        self.require_env_file()?;

        let (present, missing) = self.existing_targets();
        let env = self.load_env()?;
        let (env, masked) = match masker {
            Some(masker) => (masker.mask_env(&env), masker.masked_count(&env)),
            None => (env, 0),
        };

        let rendered = present
            .into_iter()
            .map(|target| {
                Ok(RenderedTarget {
                    path: target.path.clone(),
                    strategy: target.strategy,
                    content: render_target(self.workspace, target, &env, self.config.dialect)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Preview {
            env,
            rendered,
            missing,
            masked,
        })
    }

    fn acquire_marker(&self) -> Result<MarkerGuard<'a, W>> {
        MarkerGuard::acquire(
            self.workspace,
            self.config.marker_file.clone(),
            self.config.marker_content(),
        )
    }

    fn require_env_file(&self) -> Result<()> {
        if self.workspace.exists(&self.config.env_file) {
            Ok(())
        } else {
            Err(StampError::MissingEnvFile {
                path: self.config.env_file.clone(),
            })
        }
    }

    /// Split the configured targets into existing ones and missing paths.
    fn existing_targets(&self) -> (Vec<&'a TargetSpec>, Vec<PathBuf>) {
        let mut present = Vec::new();
        let mut missing = Vec::new();

        for target in &self.config.targets {
            if self.workspace.exists(&target.path) {
                present.push(target);
            } else {
                missing.push(target.path.clone());
            }
        }

        (present, missing)
    }

    /// Targets named in porcelain output, in the order git reported them.
    fn changed_targets(&self, status: &str) -> Vec<&'a TargetSpec> {
        let candidates = self.config.candidate_paths();
        let mut changed: Vec<&'a TargetSpec> = Vec::new();

        for reported in parse_porcelain(status) {
            let reported = Path::new(reported);
            if !candidates.contains(&reported) || reported == self.config.env_file {
                continue;
            }
            if let Some(target) = self.config.target_for(reported) {
                if !changed.iter().any(|t| t.path == target.path) {
                    changed.push(target);
                }
            }
        }

        changed
    }

    fn load_env(&self) -> Result<EnvMap> {
        let path = &self.config.env_file;
        let content = self.workspace.read_to_string(path).map_err(|e| match e {
            StampError::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
                StampError::MissingEnvFile { path: path.clone() }
            }
            other => other,
        })?;

        Ok(EnvFileParser::parse(&content, self.config.dialect))
    }

    fn describe_env(&self, env: &EnvMap, ui: &mut dyn UserInterface) {
        tracing::debug!(
            "Loaded {} key(s) from {}",
            env.len(),
            self.config.env_file.display()
        );
        if ui.output_mode().shows_details() {
            let keys: Vec<&str> = env.keys().map(String::as_str).collect();
            ui.message(&format!(
                "Loaded {} from {}: {}",
                keys.len(),
                self.config.env_file.display(),
                keys.join(", ")
            ));
        }
    }
}
