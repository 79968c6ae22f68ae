//! Fixture-directory layout: input fixtures and golden expected outputs.
//!
//! Every scenario reads its input fixture from the testdata directory and its
//! golden file from the `expected_outputs/` subdirectory. The layout check
//! backs the runner's `--start_server` bootstrap path: the external test
//! server serves the testdata directory as-is, so a complete layout is all
//! the bootstrap needs to confirm.

use std::path::PathBuf;

use anyhow::Result;
use walkdir::WalkDir;

use crate::report::{ScenarioResult, SuiteReport};

/// Default fixture directory, relative to the working directory.
pub const DEFAULT_TESTDATA_DIR: &str = "colormap_html_sld_test_data";

/// Subdirectory of the testdata directory holding golden files.
pub const EXPECTED_OUTPUTS_DIR: &str = "expected_outputs";

/// Sample colormap consumed by both HTML scenarios.
pub const COLORMAP_SAMPLE: &str = "ColorMap_v1.2_Sample.xml";
/// Continuous-linear colormap with the "No Data" entry listed first.
pub const COLORMAP_CONTINUOUS_LINEAR: &str = "SampleColorMap_v1.2_ContinuousLinear.xml";
/// Continuous-linear colormap with the "No Data" entry listed last.
pub const COLORMAP_CONTINUOUS_LINEAR_NODATA_LAST: &str =
    "SampleColorMap_v1.2_ContinuousLinear_nodata_last.xml";
/// Continuous-linear colormap with no "No Data" entry at all; the only
/// fixture the SLD 1.0.0 scenario may use, as that spec version has no
/// "No Data" support.
pub const COLORMAP_CONTINUOUS_LINEAR_V1_0_0: &str =
    "SampleColorMap_v1.2_ContinuousLinear_v1.0.0.xml";
/// Sample SLD consumed by every SLD→colormap scenario.
pub const SLD_SAMPLE: &str = "SampleSLD_v1.1.0.xml";

/// Golden file for the HTML v1.0 scenario.
pub const GOLDEN_HTML_V1_0: &str = "test_colorMaptoHTML_v1_0_expected.html";
/// Golden file for the HTML v1.3 scenario.
pub const GOLDEN_HTML_V1_3: &str = "test_colorMaptoHTML_v1_3_expected.html";
/// Golden file for the colormap→SLD 1.0.0 scenario.
pub const GOLDEN_SLD_V1_0_0: &str = "test_colorMaptoSLD_v1_0_0_expected.sld";
/// Golden file shared by both colormap→SLD 1.1.0 scenarios ("No Data" first
/// and last must produce identical output).
pub const GOLDEN_SLD_V1_1_0: &str = "test_colorMaptoSLD_v1_1_0_expected.xml";
/// Golden file shared by the base and identity SLD→colormap scenarios.
pub const GOLDEN_COLORMAP: &str = "test_SLDtoColorMap_expected.xml";
/// Golden file for the SLD→colormap offset/factor scenario.
pub const GOLDEN_COLORMAP_OFFSET_FACTOR: &str = "test_SLDtoColorMap_offset_factor_expected.xml";
/// Golden file for the SLD→colormap precision scenario.
pub const GOLDEN_COLORMAP_PRECISION: &str = "test_SLDtoColorMap_precision_expected.xml";
/// Golden file for the SLD→colormap densify scenario.
pub const GOLDEN_COLORMAP_DENSIFY: &str = "test_SLDtoColorMap_densify_expected.xml";

/// Input fixtures every suite run requires.
pub const REQUIRED_FIXTURES: &[&str] = &[
    COLORMAP_SAMPLE,
    COLORMAP_CONTINUOUS_LINEAR,
    COLORMAP_CONTINUOUS_LINEAR_NODATA_LAST,
    COLORMAP_CONTINUOUS_LINEAR_V1_0_0,
    SLD_SAMPLE,
];

/// Golden files every suite run requires.
pub const REQUIRED_GOLDENS: &[&str] = &[
    GOLDEN_HTML_V1_0,
    GOLDEN_HTML_V1_3,
    GOLDEN_SLD_V1_0_0,
    GOLDEN_SLD_V1_1_0,
    GOLDEN_COLORMAP,
    GOLDEN_COLORMAP_OFFSET_FACTOR,
    GOLDEN_COLORMAP_PRECISION,
    GOLDEN_COLORMAP_DENSIFY,
];

/// Paths to the fixture tree used by every scenario.
#[derive(Debug, Clone)]
pub struct SuitePaths {
    /// Directory holding the input colormap/SLD fixtures.
    pub testdata: PathBuf,
    /// Directory holding the golden expected-output files.
    pub expected_outputs: PathBuf,
}

impl SuitePaths {
    /// Resolves the standard layout under `testdata`: goldens live in its
    /// `expected_outputs/` subdirectory.
    pub fn resolve(testdata: PathBuf) -> Self {
        let expected_outputs = testdata.join(EXPECTED_OUTPUTS_DIR);
        Self {
            testdata,
            expected_outputs,
        }
    }

    /// Path of an input fixture by file name.
    pub fn fixture(&self, name: &str) -> PathBuf {
        self.testdata.join(name)
    }

    /// Path of a golden file by file name.
    pub fn expected(&self, name: &str) -> PathBuf {
        self.expected_outputs.join(name)
    }

    /// Verifies that the fixture layout is complete: both directories exist
    /// and every declared fixture and golden file is present.
    ///
    /// # Errors
    ///
    /// Returns an error only if a directory walk fails for reasons other
    /// than missing entries (which are reported as failures instead).
    pub fn verify(&self) -> Result<SuiteReport> {
        let mut report = SuiteReport::new();

        let mut missing: Vec<String> = Vec::new();
        for name in REQUIRED_FIXTURES {
            if !self.fixture(name).is_file() {
                missing.push(format!("missing fixture: {}", self.fixture(name).display()));
            }
        }
        for name in REQUIRED_GOLDENS {
            if !self.expected(name).is_file() {
                missing.push(format!("missing golden: {}", self.expected(name).display()));
            }
        }

        let label = self.testdata.display().to_string();
        if missing.is_empty() {
            let file_count = WalkDir::new(&self.testdata)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
                .count();
            report.push(ScenarioResult::pass(
                "fixtures/layout",
                &label,
                format!(
                    "all {} fixtures and {} goldens present ({} files total)",
                    REQUIRED_FIXTURES.len(),
                    REQUIRED_GOLDENS.len(),
                    file_count
                ),
            ));
        } else {
            report.push(ScenarioResult::fail_with_details(
                "fixtures/layout",
                &label,
                format!("{} required file(s) missing", missing.len()),
                missing,
            ));
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use std::fs;

    fn populate(testdata: &std::path::Path) {
        let expected = testdata.join(EXPECTED_OUTPUTS_DIR);
        fs::create_dir_all(&expected).unwrap();
        for name in REQUIRED_FIXTURES {
            fs::write(testdata.join(name), "<ColorMap/>\n").unwrap();
        }
        for name in REQUIRED_GOLDENS {
            fs::write(expected.join(name), "output\n").unwrap();
        }
    }

    #[test]
    fn resolve_joins_expected_outputs() {
        let paths = SuitePaths::resolve(PathBuf::from("/data/testdata"));
        assert_eq!(
            paths.expected_outputs,
            PathBuf::from("/data/testdata/expected_outputs")
        );
        assert_eq!(
            paths.fixture(COLORMAP_SAMPLE),
            PathBuf::from("/data/testdata/ColorMap_v1.2_Sample.xml")
        );
        assert_eq!(
            paths.expected(GOLDEN_HTML_V1_0),
            PathBuf::from("/data/testdata/expected_outputs/test_colorMaptoHTML_v1_0_expected.html")
        );
    }

    #[test]
    fn verify_passes_on_complete_layout() {
        let dir = tempfile::tempdir().unwrap();
        populate(dir.path());
        let report = SuitePaths::resolve(dir.path().to_path_buf())
            .verify()
            .unwrap();
        assert!(report.all_passed());
        assert_eq!(report.results.len(), 1);
    }

    #[test]
    fn verify_lists_every_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        populate(dir.path());
        fs::remove_file(dir.path().join(SLD_SAMPLE)).unwrap();
        fs::remove_file(
            dir.path()
                .join(EXPECTED_OUTPUTS_DIR)
                .join(GOLDEN_COLORMAP_DENSIFY),
        )
        .unwrap();

        let report = SuitePaths::resolve(dir.path().to_path_buf())
            .verify()
            .unwrap();
        assert_eq!(report.failure_count(), 1);
        let failure = &report.results[0];
        assert_eq!(failure.details.len(), 2);
        assert!(failure.details.iter().any(|d| d.contains(SLD_SAMPLE)));
        assert!(failure
            .details
            .iter()
            .any(|d| d.contains(GOLDEN_COLORMAP_DENSIFY)));
    }
}
