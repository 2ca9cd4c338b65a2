//! Git status querying.

use std::path::Path;
use std::process::Command;

use crate::error::{Result, StampError};

/// Command used to discover changed files.
pub const GIT_STATUS_COMMAND: &str = "git status --porcelain -uall";

/// Width of the `XY ` status prefix on each porcelain line.
const STATUS_PREFIX_LEN: usize = 3;

/// Run [`GIT_STATUS_COMMAND`] in `root` and return its stdout.
pub fn git_status(root: &Path) -> Result<String> {
    let output = Command::new("git")
        .args(["status", "--porcelain", "-uall"])
        .current_dir(root)
        .output()
        .map_err(|e| {
            tracing::debug!("Failed to spawn git: {}", e);
            StampError::CommandFailed {
                command: GIT_STATUS_COMMAND.to_string(),
                code: None,
            }
        })?;

    if !output.status.success() {
        tracing::debug!(
            "git status stderr: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
        return Err(StampError::CommandFailed {
            command: GIT_STATUS_COMMAND.to_string(),
            code: output.status.code(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Extract the reported paths from porcelain v1 output.
///
/// Each line is `XY path`; the path starts at a fixed offset. Blank lines
/// are skipped.
///
/// # Example
///
/// ```
/// use envstamp::workspace::parse_porcelain;
///
/// let paths = parse_porcelain(" M inventory.ini\n?? .env\n");
/// assert_eq!(paths, vec!["inventory.ini", ".env"]);
/// ```
pub fn parse_porcelain(output: &str) -> Vec<&str> {
    output
        .split('\n')
        .filter(|line| !line.is_empty())
        .map(|line| line.get(STATUS_PREFIX_LEN..).unwrap_or(""))
        .collect()
}
