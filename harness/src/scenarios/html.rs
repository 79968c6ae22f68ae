//! Colormap→HTML scenarios, converter versions 1.0 and 1.3.
//!
//! Both versions consume the same sample colormap. The two versions differ
//! only in output formatting; each version's golden file is the sole source
//! of truth for what that version must produce.

use anyhow::Result;

use crate::fixtures::{self, SuitePaths};
use crate::report::SuiteReport;
use crate::scenarios::Scenario;
use crate::tools::ToolPaths;

/// Runs both colormap→HTML scenarios.
///
/// # Errors
///
/// Returns an error if a golden file cannot be read or a converter cannot
/// be spawned.
pub fn run(paths: &SuitePaths, tools: &ToolPaths) -> Result<SuiteReport> {
    let mut report = SuiteReport::new();
    let fixture = paths.fixture(fixtures::COLORMAP_SAMPLE);

    let versions = [
        (
            "colorMaptoHTML_v1_0",
            &tools.colormap_to_html_v1_0,
            fixtures::GOLDEN_HTML_V1_0,
        ),
        (
            "colorMaptoHTML_v1_3",
            &tools.colormap_to_html_v1_3,
            fixtures::GOLDEN_HTML_V1_3,
        ),
    ];

    for (name, tool, golden) in versions {
        Scenario {
            name,
            tool: tool.clone(),
            args: vec!["-c".to_string(), fixture.display().to_string()],
            expected: paths.expected(golden),
        }
        .execute(&mut report)?;
    }

    Ok(report)
}
