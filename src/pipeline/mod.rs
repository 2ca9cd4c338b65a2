//! The stamping pipeline.
//!
//! A run clears the exclusion marker, parses the env file, rewrites each
//! target with its strategy, then restores the marker:
//!
//! - [`router`] - renders and writes a single target
//! - [`runner`] - [`StampRunner`], the standard and post-commit flows
//! - [`report`] - run outcomes and dry-run previews

pub mod report;
pub mod router;
pub mod runner;

pub use report::{Preview, RenderedTarget, RunReport, TargetFailure};
pub use router::{process_file, render_target};
pub use runner::StampRunner;
