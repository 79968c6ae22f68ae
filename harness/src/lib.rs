//! Conformance suite for the colormap/SLD conversion tools.
//!
//! Invokes the four external converters — colormap→HTML (versions 1.0 and
//! 1.3), colormap→SLD, and SLD→colormap — against fixture files and asserts
//! that each program's stdout exactly matches a pre-recorded golden file
//! while its stderr stays empty. Results aggregate into a [`SuiteReport`]
//! that can be printed, serialized as JSON, or written as a JUnit XML test
//! report.
//!
//! # Entry Point
//!
//! ```no_run
//! use colormap_harness::{run_all, SuitePaths, ToolPaths};
//! use std::path::PathBuf;
//!
//! let paths = SuitePaths::resolve(PathBuf::from("colormap_html_sld_test_data"));
//! let tools = ToolPaths::default();
//! let report = run_all(&paths, &tools).expect("failed to run suite");
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod fixtures;
pub mod golden;
pub mod invoke;
pub mod junit;
pub mod report;
pub mod scenarios;
pub mod tools;
pub mod transforms;

pub use error::ScenarioError;
pub use fixtures::SuitePaths;
pub use report::{ScenarioResult, Severity, SuiteReport};
pub use tools::ToolPaths;

/// Runs every declared conversion scenario and returns the aggregated report.
///
/// Scenarios run sequentially, in this order:
/// 1. colormap→HTML, converter versions 1.0 and 1.3
/// 2. colormap→SLD at spec versions 1.0.0 and 1.1.0 (the latter with the
///    "No Data" entry first and last, sharing one golden file)
/// 3. SLD→colormap: base, identity (`-o 0 -f 1`, sharing the base golden),
///    offset/factor, precision, and densify
///
/// A failing scenario is recorded and the suite continues; only missing
/// golden files or unspawnable converters abort the run.
///
/// # Errors
///
/// Returns an error if a golden file cannot be read or a converter cannot
/// be spawned.
pub fn run_all(paths: &SuitePaths, tools: &ToolPaths) -> anyhow::Result<SuiteReport> {
    let mut report = SuiteReport::new();

    report.extend(scenarios::html::run(paths, tools)?);
    report.extend(scenarios::sld::run(paths, tools)?);
    report.extend(scenarios::colormap::run(paths, tools)?);

    Ok(report)
}
