//! Run command implementation.
//!
//! The `envstamp run` command rewrites every existing target, or previews
//! the rewrite with `--dry-run`.

use std::path::{Path, PathBuf};

use crate::cli::args::RunArgs;
use crate::config::{load_config, StampConfig};
use crate::error::{Result, StampError};
use crate::pipeline::StampRunner;
use crate::secrets::{OutputMasker, SecretMatcher};
use crate::ui::{OutputMode, UserInterface};
use crate::workspace::DiskWorkspace;

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: RunArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &RunArgs {
        &self.args
    }

    fn stamp(
        &self,
        workspace: &DiskWorkspace,
        config: &StampConfig,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let report = match StampRunner::new(workspace, config).run(ui) {
            Ok(report) => report,
            Err(e) => return precondition_failure(e, ui),
        };

        let total = report.written.len() + report.failures.len();
        if report.is_clean() {
            ui.success(&format!("Updated {} file(s)", report.written.len()));
        } else {
            ui.warning(&format!(
                "Updated {} of {} file(s)",
                report.written.len(),
                total
            ));
        }

        Ok(CommandResult::success())
    }

    fn dry_run(
        &self,
        workspace: &DiskWorkspace,
        config: &StampConfig,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let masker = (!self.args.show_secrets).then(|| {
            OutputMasker::new(SecretMatcher::with_builtins_and_custom(&config.redact_keys))
        });

        let preview = match StampRunner::new(workspace, config).preview(masker.as_ref()) {
            Ok(preview) => preview,
            Err(e) => return precondition_failure(e, ui),
        };

        ui.message("Running in dry-run mode - no files will be written");
        if preview.masked > 0 {
            ui.message(&format!(
                "{} secret value(s) redacted, pass --show-secrets to reveal",
                preview.masked
            ));
        }

        for path in &preview.missing {
            ui.warning(&format!("File not found, skipping: {}", path.display()));
        }

        for target in &preview.rendered {
            ui.show_header(&format!("{} ({:?})", target.path.display(), target.strategy));
            ui.message(&target.content);
        }

        if preview.rendered.is_empty() {
            ui.error(&StampError::NoTargetFilesFound {
                checked: config.targets.len(),
            }
            .to_string());
            return Ok(CommandResult::failure(1));
        }

        Ok(CommandResult::success())
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.config_path.as_deref())?;

        // Apply config default_output when no CLI flag was explicitly set
        if ui.output_mode() == OutputMode::Normal {
            ui.set_output_mode(config.default_output.into());
        }

        let workspace = DiskWorkspace::new(&self.project_root);

        if self.args.dry_run {
            self.dry_run(&workspace, &config, ui)
        } else {
            self.stamp(&workspace, &config, ui)
        }
    }
}

/// Report a fatal precondition as exit code 1; anything else propagates.
fn precondition_failure(err: StampError, ui: &mut dyn UserInterface) -> Result<CommandResult> {
    match err {
        StampError::MissingEnvFile { .. } | StampError::NoTargetFilesFound { .. } => {
            ui.error(&err.to_string());
            Ok(CommandResult::failure(1))
        }
        other => Err(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    const ENV: &str = "host_ip=10.1.2.3\nhost_user=deploy\nhost_port=2200\n\
                       host_ssh_key_private_path=~/.ssh/id_vps\nmsmtp_password=hunter2\n";

    fn setup_project(env: Option<&str>) -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".gitignore"), ".env").unwrap();
        if let Some(env) = env {
            fs::write(temp.path().join(".env"), env).unwrap();
        }
        fs::write(temp.path().join("inventory.ini"), "[vps]\n").unwrap();
        fs::create_dir_all(temp.path().join("vars")).unwrap();
        fs::write(
            temp.path().join("vars/msmtp.yml"),
            "msmtp_password: old\nmsmtp_host: smtp\n",
        )
        .unwrap();
        temp
    }

    fn read(temp: &TempDir, path: &str) -> String {
        fs::read_to_string(temp.path().join(path)).unwrap()
    }

    #[test]
    fn run_rewrites_targets_and_restores_marker() {
        let temp = setup_project(Some(ENV));
        let cmd = RunCommand::new(temp.path(), None, RunArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(read(&temp, "inventory.ini").contains("10.1.2.3 ansible_user=deploy"));
        assert_eq!(read(&temp, "vars/msmtp.yml"), "msmtp_password: hunter2\n");
        assert_eq!(read(&temp, ".gitignore"), ".env");
        assert!(ui.has_success("Updated 2 file(s)"));
    }

    #[test]
    fn run_without_env_exits_one() {
        let temp = setup_project(None);
        let cmd = RunCommand::new(temp.path(), None, RunArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert_eq!(read(&temp, "inventory.ini"), "[vps]\n");
        assert_eq!(read(&temp, ".gitignore"), ".env");
        assert!(ui.has_error("Environment file not found"));
    }

    #[test]
    fn run_without_targets_exits_one() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".env"), ENV).unwrap();
        let cmd = RunCommand::new(temp.path(), None, RunArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("No target files found"));
    }

    #[test]
    fn dry_run_redacts_and_writes_nothing() {
        let temp = setup_project(Some(ENV));
        let args = RunArgs {
            dry_run: true,
            ..Default::default()
        };
        let cmd = RunCommand::new(temp.path(), None, args);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(!ui.printed("hunter2"));
        assert!(!ui.printed("10.1.2.3"));
        assert!(ui.has_message("msmtp_password: [REDACTED]"));
        assert_eq!(read(&temp, "inventory.ini"), "[vps]\n");
        assert_eq!(read(&temp, ".gitignore"), ".env");
    }

    #[test]
    fn dry_run_leaves_keys_sharing_a_secret_value_intact() {
        let temp = setup_project(Some("host_user=root\nssh_permit_root_login=no\n"));
        fs::write(
            temp.path().join("vars/ssh.yml"),
            "ssh_permit_root_login: yes\n",
        )
        .unwrap();
        let args = RunArgs {
            dry_run: true,
            ..Default::default()
        };
        let mut ui = MockUI::new();

        RunCommand::new(temp.path(), None, args)
            .execute(&mut ui)
            .unwrap();
        RunCommand::new(temp.path(), None, RunArgs::default())
            .execute(&mut MockUI::new())
            .unwrap();

        let written = read(&temp, "vars/ssh.yml");
        assert_eq!(written, "ssh_permit_root_login: no\n");
        assert!(ui.messages().contains(&written));
        assert!(ui.has_message("ansible_user=[REDACTED]"));
        assert!(!ui.printed("ssh_permit_[REDACTED]"));
    }

    #[test]
    fn dry_run_show_secrets_prints_values() {
        let temp = setup_project(Some(ENV));
        let args = RunArgs {
            dry_run: true,
            show_secrets: true,
        };
        let cmd = RunCommand::new(temp.path(), None, args);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_message("msmtp_password: hunter2"));
    }

    #[test]
    fn dry_run_without_env_exits_one() {
        let temp = setup_project(None);
        let args = RunArgs {
            dry_run: true,
            ..Default::default()
        };
        let cmd = RunCommand::new(temp.path(), None, args);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn config_default_output_applies_without_flag() {
        let temp = setup_project(Some(ENV));
        fs::write(temp.path().join(".envstamp.yml"), "default_output: silent\n").unwrap();
        let cmd = RunCommand::new(temp.path(), None, RunArgs::default());
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.output_mode(), OutputMode::Silent);
    }

    #[test]
    fn explicit_output_flag_wins_over_config() {
        let temp = setup_project(Some(ENV));
        fs::write(temp.path().join(".envstamp.yml"), "default_output: silent\n").unwrap();
        let cmd = RunCommand::new(temp.path(), None, RunArgs::default());
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }

    #[test]
    fn invalid_config_is_an_error() {
        let temp = setup_project(Some(ENV));
        fs::write(temp.path().join(".envstamp.yml"), "targets: []\n").unwrap();
        let cmd = RunCommand::new(temp.path(), None, RunArgs::default());

        let err = cmd.execute(&mut MockUI::new()).unwrap_err();

        assert!(matches!(err, StampError::ConfigValidationError { .. }));
    }
}
