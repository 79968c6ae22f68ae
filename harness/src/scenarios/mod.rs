//! Declared conversion scenarios, one module per converter family.
//!
//! Each module exposes `run(paths, tools)` returning the family's results.
//! A scenario failure never aborts the suite; remaining scenarios still run.

pub mod colormap;
pub mod html;
pub mod sld;

use std::path::PathBuf;

use anyhow::Result;

use crate::error::ScenarioError;
use crate::golden;
use crate::invoke::Invocation;
use crate::report::{ScenarioResult, SuiteReport};

/// One declared scenario: a converter, its argument list, and the golden
/// file its stdout must match.
#[derive(Debug, Clone)]
pub(crate) struct Scenario {
    /// Short identifier used in reports.
    pub name: &'static str,
    /// Path of the converter program.
    pub tool: PathBuf,
    /// Ordered command-line arguments.
    pub args: Vec<String>,
    /// Path of the golden expected-output file.
    pub expected: PathBuf,
}

impl Scenario {
    /// Executes the scenario and records its outcome into `report`.
    ///
    /// Checks are ordered per the runner contract: non-empty stderr fails the
    /// scenario unconditionally (even with exit code 0), then stdout must
    /// exactly equal the golden file's contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the golden file cannot be read or the converter
    /// cannot be spawned; converter misbehavior is recorded as a failure
    /// result, not an error.
    pub fn execute(&self, report: &mut SuiteReport) -> Result<()> {
        let expected = golden::load(&self.expected)?;
        let capture = Invocation::new(&self.tool, self.args.clone()).run()?;
        let tool = self.tool.display().to_string();

        if !capture.stderr.is_empty() {
            let error = ScenarioError::Execution {
                tool: tool.clone(),
                stderr: capture.stderr,
            };
            report.push(ScenarioResult::fail(self.name, tool, error.to_string()));
            return Ok(());
        }

        if capture.stdout != expected {
            let diff = golden::diff_lines(&expected, &capture.stdout);
            let error = ScenarioError::Mismatch {
                tool: tool.clone(),
                generated: capture.stdout,
            };
            report.push(ScenarioResult::fail_with_details(
                self.name,
                tool,
                error.to_string(),
                diff,
            ));
            return Ok(());
        }

        report.push(ScenarioResult::pass(
            self.name,
            tool,
            format!("output matches {}", self.expected.display()),
        ));
        Ok(())
    }
}
