//! End-to-end tests for the envstamp binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const ENV: &str = "\
# vps access
host_ip=203.0.113.7
host_user=deploy
host_port=2222
host_ssh_key_private_path=~/.ssh/vps

ssh_port=2222
msmtp_password=hunter2
";

const EXPECTED_INVENTORY: &str = "[vps] \n    203.0.113.7 ansible_user=deploy ansible_port=2222 \
ansible_ssh_private_key_file=~/.ssh/vps ansible_ssh_common_args='-o IdentitiesOnly=yes'\n";

fn setup_project(env: Option<&str>) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".gitignore"), ".env").unwrap();
    if let Some(env) = env {
        fs::write(temp.path().join(".env"), env).unwrap();
    }
    fs::write(temp.path().join("inventory.ini"), "[vps]\n").unwrap();
    fs::create_dir_all(temp.path().join("vars")).unwrap();
    fs::write(
        temp.path().join("vars/ssh.yml"),
        "ssh_port: 22\nssh_permit_root_login: no\n",
    )
    .unwrap();
    fs::write(
        temp.path().join("vars/msmtp.yml"),
        "msmtp_password: changeme\n",
    )
    .unwrap();
    temp
}

fn read(dir: &Path, path: &str) -> String {
    fs::read_to_string(dir.join(path)).unwrap()
}

fn git(dir: &Path, args: &[&str]) {
    let status = std::process::Command::new("git")
        .args([
            "-c",
            "user.name=envstamp",
            "-c",
            "user.email=envstamp@example.com",
            "-c",
            "commit.gpgsign=false",
        ])
        .args(args)
        .current_dir(dir)
        .status()
        .unwrap();
    assert!(status.success(), "git {:?} failed", args);
}

fn envstamp(dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("envstamp"));
    cmd.current_dir(dir).env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("envstamp"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("post-commit"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("envstamp"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_no_args_stamps_targets() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(Some(ENV));

    envstamp(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Modifying file: inventory.ini"));

    assert_eq!(read(temp.path(), "inventory.ini"), EXPECTED_INVENTORY);
    assert_eq!(read(temp.path(), "vars/ssh.yml"), "ssh_port: 2222\n");
    assert_eq!(read(temp.path(), "vars/msmtp.yml"), "msmtp_password: hunter2\n");
    assert_eq!(read(temp.path(), ".gitignore"), ".env");
    Ok(())
}

#[test]
fn cli_run_warns_about_missing_targets() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(Some(ENV));

    envstamp(temp.path())
        .arg("run")
        .assert()
        .success()
        .stderr(predicate::str::contains("vars/fail2ban.yml"));
    Ok(())
}

#[test]
fn cli_run_without_env_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(None);

    envstamp(temp.path())
        .arg("run")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Environment file not found"));

    assert_eq!(read(temp.path(), "inventory.ini"), "[vps]\n");
    assert_eq!(read(temp.path(), ".gitignore"), ".env");
    Ok(())
}

#[test]
fn cli_run_without_targets_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join(".env"), ENV)?;

    envstamp(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No target files found"));
    Ok(())
}

#[test]
fn cli_run_with_project_flag() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(Some(ENV));
    let elsewhere = TempDir::new()?;

    envstamp(elsewhere.path())
        .arg("--project")
        .arg(temp.path())
        .assert()
        .success();

    assert_eq!(read(temp.path(), "vars/ssh.yml"), "ssh_port: 2222\n");
    Ok(())
}

#[test]
fn cli_dry_run_redacts_secrets() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(Some(ENV));

    envstamp(temp.path())
        .args(["run", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dry-run mode"))
        .stdout(predicate::str::contains("msmtp_password: [REDACTED]"))
        .stdout(predicate::str::contains("hunter2").not())
        .stdout(predicate::str::contains("203.0.113.7").not());

    assert_eq!(read(temp.path(), "inventory.ini"), "[vps]\n");
    Ok(())
}

#[test]
fn cli_dry_run_show_secrets() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(Some(ENV));

    envstamp(temp.path())
        .args(["run", "--dry-run", "--show-secrets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("msmtp_password: hunter2"));
    Ok(())
}

#[test]
fn cli_custom_config_targets() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("secrets.env"), "host_ip=198.51.100.1\n")?;
    fs::write(temp.path().join("hosts"), "")?;
    fs::write(
        temp.path().join(".envstamp.yml"),
        "env_file: secrets.env\ntargets:\n  - path: hosts\n    strategy: inventory\n",
    )?;

    envstamp(temp.path()).assert().success();

    assert!(read(temp.path(), "hosts").contains("198.51.100.1 ansible_user=undefined"));
    assert_eq!(read(temp.path(), ".gitignore"), "secrets.env");
    Ok(())
}

#[test]
fn cli_invalid_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(Some(ENV));
    fs::write(temp.path().join(".envstamp.yml"), "targets: []\n")?;

    envstamp(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid configuration"));
    Ok(())
}

#[test]
fn cli_post_commit_outside_git_exits_zero() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(Some(ENV));

    envstamp(temp.path()).arg("post-commit").assert().success();

    assert_eq!(read(temp.path(), "inventory.ini"), "[vps]\n");
    assert_eq!(read(temp.path(), ".gitignore"), ".env");
    Ok(())
}

#[test]
fn cli_post_commit_rewrites_only_changed_targets() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(Some(ENV));
    git(temp.path(), &["init", "-q"]);
    git(temp.path(), &["add", "-A"]);
    git(temp.path(), &["commit", "-q", "-m", "initial"]);
    fs::write(
        temp.path().join("vars/ssh.yml"),
        "ssh_port: 2200\nssh_permit_root_login: no\n",
    )?;

    envstamp(temp.path())
        .arg("post-commit")
        .assert()
        .success()
        .stdout(predicate::str::contains("Modifying file: vars/ssh.yml"))
        .stdout(predicate::str::contains("Modifying file: inventory.ini").not());

    assert_eq!(read(temp.path(), "vars/ssh.yml"), "ssh_port: 2222\n");
    assert_eq!(read(temp.path(), "inventory.ini"), "[vps]\n");
    assert_eq!(read(temp.path(), "vars/msmtp.yml"), "msmtp_password: changeme\n");
    assert_eq!(read(temp.path(), ".env"), ENV);
    assert_eq!(read(temp.path(), ".gitignore"), ".env");
    Ok(())
}

#[test]
fn cli_config_shows_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    envstamp(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("env_file: .env"))
        .stdout(predicate::str::contains("inventory.ini"));
    Ok(())
}

#[test]
fn cli_config_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    envstamp(temp.path())
        .args(["config", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"marker_file\": \".gitignore\""));
    Ok(())
}

#[test]
fn cli_completions_bash() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("envstamp"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("envstamp"));
    Ok(())
}
