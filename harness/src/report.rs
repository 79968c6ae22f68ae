//! Suite report types: results, severity levels, and report aggregation.

use serde::Serialize;

/// Severity level of a scenario result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Severity {
    /// The scenario passed.
    Pass,
    /// The scenario produced a warning (non-blocking).
    Warning,
    /// The scenario failed (blocks conformance).
    Failure,
}

/// A single scenario result.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    /// Short identifier of the scenario that produced this result.
    pub scenario: String,
    /// Path of the converter program the scenario invoked.
    pub tool: String,
    /// Human-readable message describing the outcome.
    pub message: String,
    /// Severity of the result.
    pub severity: Severity,
    /// Optional additional detail lines (diff output, captured content).
    pub details: Vec<String>,
}

impl ScenarioResult {
    /// Creates a passing result.
    pub fn pass(
        scenario: impl Into<String>,
        tool: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            scenario: scenario.into(),
            tool: tool.into(),
            message: message.into(),
            severity: Severity::Pass,
            details: Vec::new(),
        }
    }

    /// Creates a failure result.
    pub fn fail(
        scenario: impl Into<String>,
        tool: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            scenario: scenario.into(),
            tool: tool.into(),
            message: message.into(),
            severity: Severity::Failure,
            details: Vec::new(),
        }
    }

    /// Creates a failure result with additional detail lines.
    pub fn fail_with_details(
        scenario: impl Into<String>,
        tool: impl Into<String>,
        message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        Self {
            scenario: scenario.into(),
            tool: tool.into(),
            message: message.into(),
            severity: Severity::Failure,
            details,
        }
    }

    /// Creates a warning result.
    pub fn warn(
        scenario: impl Into<String>,
        tool: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            scenario: scenario.into(),
            tool: tool.into(),
            message: message.into(),
            severity: Severity::Warning,
            details: Vec::new(),
        }
    }

    /// Returns true if this result represents a failure.
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }
}

/// Aggregated report from all scenarios.
#[derive(Debug, Serialize)]
pub struct SuiteReport {
    /// All individual scenario results, in execution order.
    pub results: Vec<ScenarioResult>,
}

impl SuiteReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self {
            results: Vec::new(),
        }
    }

    /// Appends a result to this report.
    pub fn push(&mut self, result: ScenarioResult) {
        self.results.push(result);
    }

    /// Extends this report with results from another report.
    pub fn extend(&mut self, other: SuiteReport) {
        self.results.extend(other.results);
    }

    /// Returns the count of failed scenarios.
    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_failure()).count()
    }

    /// Returns true if all scenarios passed (no failures).
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }

    /// Serializes the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for SuiteReport {
    fn default() -> Self {
        Self::new()
    }
}
