//! SLD→colormap scenarios, including the numeric transform options.
//!
//! All five scenarios convert the same sample SLD. The base scenario and the
//! identity scenario (`-o 0 -f 1`) share one golden file: a zero offset with
//! a unit factor must not change the output. The offset/factor, precision,
//! and densify scenarios each have their own golden.

use std::path::Path;

use anyhow::Result;

use crate::fixtures::{self, SuitePaths};
use crate::report::SuiteReport;
use crate::scenarios::Scenario;
use crate::tools::ToolPaths;
use crate::transforms::{Densify, Precision, Transforms};

/// Layer name passed to every SLD→colormap invocation.
const LAYER: &str = "test_layer";

/// Units attribute written into the generated colormap entries.
const UNITS: &str = "K";

fn colormap_args(fixture: &Path, transforms: &Transforms) -> Vec<String> {
    let mut args = vec![
        "-s".to_string(),
        fixture.display().to_string(),
        "-l".to_string(),
        LAYER.to_string(),
        "-r".to_string(),
        "RGBA".to_string(),
        "-u".to_string(),
        UNITS.to_string(),
    ];
    args.extend(transforms.to_args());
    args
}

/// Runs the five SLD→colormap scenarios.
///
/// # Errors
///
/// Returns an error if a golden file cannot be read or the converter cannot
/// be spawned.
pub fn run(paths: &SuitePaths, tools: &ToolPaths) -> Result<SuiteReport> {
    let mut report = SuiteReport::new();
    let fixture = paths.fixture(fixtures::SLD_SAMPLE);

    let scenarios = [
        (
            "SLDtoColorMap",
            Transforms::default(),
            fixtures::GOLDEN_COLORMAP,
        ),
        (
            "SLDtoColorMap_identity",
            Transforms {
                offset: Some(0.0),
                factor: Some(1.0),
                ..Transforms::default()
            },
            fixtures::GOLDEN_COLORMAP,
        ),
        (
            "SLDtoColorMap_offset_factor",
            Transforms {
                offset: Some(100.0),
                factor: Some(0.5),
                ..Transforms::default()
            },
            fixtures::GOLDEN_COLORMAP_OFFSET_FACTOR,
        ),
        (
            "SLDtoColorMap_precision",
            Transforms {
                precision: Some(Precision::new(3)),
                ..Transforms::default()
            },
            fixtures::GOLDEN_COLORMAP_PRECISION,
        ),
        (
            "SLDtoColorMap_densify",
            Transforms {
                densify: Some(Densify::Range(5)),
                ..Transforms::default()
            },
            fixtures::GOLDEN_COLORMAP_DENSIFY,
        ),
    ];

    for (name, transforms, golden) in scenarios {
        Scenario {
            name,
            tool: tools.sld_to_colormap.clone(),
            args: colormap_args(&fixture, &transforms),
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
    fn base_args_follow_documented_flag_order() {
        let args = colormap_args(Path::new("/data/SampleSLD.xml"), &Transforms::default());
        assert_eq!(
            args,
            vec![
                "-s",
                "/data/SampleSLD.xml",
                "-l",
                "test_layer",
                "-r",
                "RGBA",
                "-u",
                "K"
            ]
        );
    }

    #[test]
    fn transform_flags_append_after_required_flags() {
        let transforms = Transforms {
            offset: Some(100.0),
            factor: Some(0.5),
            precision: Some(Precision::new(3)),
            densify: Some(Densify::Range(5)),
        };
        let args = colormap_args(Path::new("/data/SampleSLD.xml"), &transforms);
        assert_eq!(
            &args[8..],
            ["-o", "100", "-f", "0.5", "-p", "3f", "-d", "r5"]
        );
    }
}
