//! JUnit XML report writer.
//!
//! Serializes a suite report into the JUnit XML dialect most CI systems and
//! the historical runner's consumers understand: one test suite, one test
//! case per scenario. Failures carry the scenario message and the diff
//! detail lines as the case description.

use std::io::Write;

use anyhow::Result;
use quick_junit::{NonSuccessKind, Report, TestCase, TestCaseStatus, TestSuite, XmlString};

use crate::report::{Severity, SuiteReport};

/// Name of the single test suite in the emitted report.
const SUITE_NAME: &str = "colormap_html_sld";

/// Default file name for the emitted report.
pub const DEFAULT_REPORT_FILE: &str = "test_colormap_html_sld_results.xml";

/// Serializes `report` as JUnit XML into `writer`.
///
/// # Errors
///
/// Returns an error if serialization or the underlying write fails.
pub fn write(report: &SuiteReport, writer: &mut dyn Write) -> Result<()> {
    let mut junit = Report::new(SUITE_NAME);
    let mut suite = TestSuite::new(SUITE_NAME);

    for result in &report.results {
        let status = match result.severity {
            Severity::Pass => TestCaseStatus::success(),
            Severity::Warning => {
                let mut status = TestCaseStatus::skipped();
                status.set_message(result.message.as_str());
                status
            }
            Severity::Failure => {
                let mut status = TestCaseStatus::non_success(NonSuccessKind::Failure);
                status.set_message(result.message.as_str());
                status.set_description(result.details.join("\n"));
                status
            }
        };
        let mut case = TestCase::new(result.scenario.as_str(), status);
        case.set_classname(SUITE_NAME);
        case.extra.insert(
            XmlString::new("tool"),
            XmlString::new(result.tool.as_str()),
        );
        suite.add_test_case(case);
    }

    junit.add_test_suite(suite);
    junit.serialize(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::report::ScenarioResult;

    fn render(report: &SuiteReport) -> String {
        let mut buffer = Vec::new();
        write(report, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn passing_report_serializes_cases() {
        let mut report = SuiteReport::new();
        report.push(ScenarioResult::pass(
            "colorMaptoHTML_v1_0",
            "/usr/bin/colorMaptoHTML_v1.0.py",
            "output matches",
        ));
        let xml = render(&report);
        assert!(xml.contains("<testsuite"));
        assert!(xml.contains("colormap_html_sld"));
        assert!(xml.contains("colorMaptoHTML_v1_0"));
        assert!(!xml.contains("<failure"));
    }

    #[test]
    fn failure_carries_message_and_details() {
        let mut report = SuiteReport::new();
        report.push(ScenarioResult::fail_with_details(
            "colorMaptoSLD_v1_1_0",
            "/usr/bin/colorMaptoSLD.py",
            "output does not match expected",
            vec!["-<old/>".to_string(), "+<new/>".to_string()],
        ));
        let xml = render(&report);
        assert!(xml.contains("<failure"));
        assert!(xml.contains("output does not match expected"));
        assert!(xml.contains("+&lt;new/&gt;"));
    }

    #[test]
    fn tool_path_appears_as_case_metadata() {
        let mut report = SuiteReport::new();
        report.push(ScenarioResult::pass(
            "SLDtoColorMap",
            "/usr/bin/SLDtoColorMap.py",
            "ok",
        ));
        let xml = render(&report);
        assert!(xml.contains("/usr/bin/SLDtoColorMap.py"));
    }
}
