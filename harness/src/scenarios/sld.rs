//! Colormap→SLD scenarios across both SLD spec versions.
//!
//! Spec version 1.0.0 has no "No Data" support, so its fixture omits that
//! entry by construction. The two 1.1.0 scenarios feed colormaps with the
//! "No Data" entry first and last, and compare both against a single golden
//! file: output must not depend on where the entry appears in the source.

use std::path::Path;

use anyhow::Result;

use crate::fixtures::{self, SuitePaths};
use crate::report::SuiteReport;
use crate::scenarios::Scenario;
use crate::tools::ToolPaths;

/// Layer name passed to every colormap→SLD invocation.
const LAYER: &str = "test_layer";

fn sld_args(fixture: &Path, spec_version: &str) -> Vec<String> {
    vec![
        "-c".to_string(),
        fixture.display().to_string(),
        "-l".to_string(),
        LAYER.to_string(),
        "-r".to_string(),
        "RGBA".to_string(),
        "-s".to_string(),
        spec_version.to_string(),
    ]
}

/// Runs the three colormap→SLD scenarios.
///
/// # Errors
///
/// Returns an error if a golden file cannot be read or the converter cannot
/// be spawned.
pub fn run(paths: &SuitePaths, tools: &ToolPaths) -> Result<SuiteReport> {
    let mut report = SuiteReport::new();

    let scenarios = [
        (
            "colorMaptoSLD_v1_0_0",
            fixtures::COLORMAP_CONTINUOUS_LINEAR_V1_0_0,
            "1.0.0",
            fixtures::GOLDEN_SLD_V1_0_0,
        ),
        (
            "colorMaptoSLD_v1_1_0",
            fixtures::COLORMAP_CONTINUOUS_LINEAR,
            "1.1.0",
            fixtures::GOLDEN_SLD_V1_1_0,
        ),
        (
            "colorMaptoSLD_v1_1_0_nodata_last",
            fixtures::COLORMAP_CONTINUOUS_LINEAR_NODATA_LAST,
            "1.1.0",
            fixtures::GOLDEN_SLD_V1_1_0,
        ),
    ];

    for (name, fixture, spec_version, golden) in scenarios {
        Scenario {
            name,
            tool: tools.colormap_to_sld.clone(),
            args: sld_args(&paths.fixture(fixture), spec_version),
            expected: paths.expected(golden),
        }
        .execute(&mut report)?;
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_follow_documented_flag_order() {
        let args = sld_args(Path::new("/data/SampleColorMap.xml"), "1.1.0");
        assert_eq!(
            args,
            vec![
                "-c",
                "/data/SampleColorMap.xml",
                "-l",
                "test_layer",
                "-r",
                "RGBA",
                "-s",
                "1.1.0"
            ]
        );
    }
}
