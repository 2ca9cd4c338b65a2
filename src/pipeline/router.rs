//! Per-target dispatch.

use crate::config::{Dialect, EnvMap, TargetSpec};
use crate::error::{Result, StampError};
use crate::template::{needs_current_content, render};
use crate::workspace::Workspace;

/// Render the new content for one target without writing it.
pub fn render_target<W: Workspace + ?Sized>(
    workspace: &W,
    target: &TargetSpec,
    env: &EnvMap,
    dialect: Dialect,
) -> Result<String> {
    let current = if needs_current_content(target.strategy) {
        workspace.read_to_string(&target.path)?
    } else {
        String::new()
    };

    Ok(render(target.strategy, &current, env, dialect))
}

/// Rewrite one target in place.
///
/// Any failure is reported as `TargetWriteFailed` naming the target.
pub fn process_file<W: Workspace + ?Sized>(
    workspace: &W,
    target: &TargetSpec,
    env: &EnvMap,
    dialect: Dialect,
) -> Result<()> {
    tracing::debug!(
        "Rewriting {} with {:?} strategy",
        target.path.display(),
        target.strategy
    );

    render_target(workspace, target, env, dialect)
        .and_then(|content| workspace.write(&target.path, &content))
        .map_err(|e| StampError::TargetWriteFailed {
            path: target.path.clone(),
            message: e.to_string(),
        })
}
