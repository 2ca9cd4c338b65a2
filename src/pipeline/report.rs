//! Run outcomes.

use std::path::PathBuf;

use crate::config::{EnvMap, Strategy};

/// Result of a pipeline run that got past its preconditions.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Targets rewritten, in processing order.
    pub written: Vec<PathBuf>,
    /// Configured targets that did not exist.
    pub missing: Vec<PathBuf>,
    /// Targets that failed; the rest were still processed.
    pub failures: Vec<TargetFailure>,
}

impl RunReport {
    /// Whether every discovered target was rewritten.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A target that could not be rewritten.
#[derive(Debug, Clone)]
pub struct TargetFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Rendered content for one target, produced without writing.
#[derive(Debug, Clone)]
pub struct RenderedTarget {
    pub path: PathBuf,
    pub strategy: Strategy,
    pub content: String,
}

/// Everything a dry run would write.
#[derive(Debug, Default)]
pub struct Preview {
    /// Environment the targets were rendered with, masked if requested.
    pub env: EnvMap,
    /// Targets that exist, rendered in processing order.
    pub rendered: Vec<RenderedTarget>,
    /// Configured targets that did not exist.
    pub missing: Vec<PathBuf>,
    /// Number of env values replaced by the mask.
    pub masked: usize,
}
