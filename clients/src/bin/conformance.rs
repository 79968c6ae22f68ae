//! `colormap-conformance` — runs the colormap/SLD conversion test suite.
//!
//! Resolves the four external converter programs, executes every declared
//! scenario against the fixture directory, prints a per-scenario summary,
//! and writes a JUnit XML report.
//!
//! **Usage:**
//! ```
//! colormap-conformance [-o <report.xml>] [--testdata <path>] [--tools-dir <path>] [-s]
//! ```
//!
//! Exits non-zero if any scenario fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::fs::File;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use colormap_harness::{junit, run_all, Severity, SuitePaths, SuiteReport, ToolPaths};

/// Run the colormap/SLD conversion conformance suite.
#[derive(Parser)]
#[command(
    name = "colormap-conformance",
    about = "Validate the colormap/SLD converters against golden outputs"
)]
struct Args {
    /// XML report output file.
    #[arg(
        short = 'o',
        long,
        default_value = colormap_harness::junit::DEFAULT_REPORT_FILE
    )]
    output: PathBuf,

    /// Verify the fixture layout for the test server, then exit without
    /// running tests (for debugging).
    #[arg(short = 's', long = "start_server")]
    start_server: bool,

    /// Directory containing the input fixtures (golden files live in its
    /// expected_outputs/ subdirectory).
    #[arg(long, default_value = colormap_harness::fixtures::DEFAULT_TESTDATA_DIR)]
    testdata: PathBuf,

    /// Directory containing the four converter programs.
    #[arg(long, default_value = colormap_harness::tools::DEFAULT_TOOLS_DIR)]
    tools_dir: PathBuf,

    /// Also write a JSON summary of the report.
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let paths = SuitePaths::resolve(args.testdata);
    let tools = ToolPaths::from_dir(&args.tools_dir);

    if args.start_server {
        let layout = paths.verify()?;
        print_results(&layout);
        if !layout.all_passed() {
            eprintln!("Fixture layout verification FAILED.");
            process::exit(1);
        }
        println!("Test configuration has been loaded. No tests run.");
        return Ok(());
    }

    let report = run_all(&paths, &tools)?;

    println!("Colormap/SLD Conversion Conformance Report");
    println!("==========================================");
    println!();

    let (passed, warned, failed) = print_results(&report);

    println!();
    println!(
        "Summary: {} passed, {} warnings, {} failed",
        passed, warned, failed
    );

    println!("Storing test results in \"{}\"", args.output.display());
    let mut output = File::create(&args.output)
        .with_context(|| format!("failed to create report file {}", args.output.display()))?;
    junit::write(&report, &mut output)?;

    if let Some(json_path) = &args.json {
        fs::write(json_path, report.to_json()?)
            .with_context(|| format!("failed to write JSON summary {}", json_path.display()))?;
    }

    if failed > 0 {
        eprintln!("Conformance FAILED: {} scenario(s) did not pass.", failed);
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}

/// Prints one line per result and returns (passed, warned, failed) counts.
fn print_results(report: &SuiteReport) -> (usize, usize, usize) {
    let mut passed = 0usize;
    let mut warned = 0usize;
    let mut failed = 0usize;

    for result in &report.results {
        let status = match result.severity {
            Severity::Pass => {
                passed += 1;
                "PASS"
            }
            Severity::Warning => {
                warned += 1;
                "WARN"
            }
            Severity::Failure => {
                failed += 1;
                "FAIL"
            }
        };
        println!("[{}] {} — {}", status, result.scenario, result.message);
        for detail in &result.details {
            println!("       {}", detail);
        }
    }

    (passed, warned, failed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_cli() {
        let args = Args::parse_from(["colormap-conformance"]);
        assert_eq!(
            args.output,
            PathBuf::from("test_colormap_html_sld_results.xml")
        );
        assert_eq!(args.testdata, PathBuf::from("colormap_html_sld_test_data"));
        assert_eq!(args.tools_dir, PathBuf::from("/usr/bin"));
        assert!(!args.start_server);
        assert!(args.json.is_none());
    }

    #[test]
    fn short_flags_parse() {
        let args = Args::parse_from(["colormap-conformance", "-o", "out.xml", "-s"]);
        assert_eq!(args.output, PathBuf::from("out.xml"));
        assert!(args.start_server);
    }

    #[test]
    fn unknown_flags_are_rejected() {
        assert!(Args::try_parse_from(["colormap-conformance", "--retries", "3"]).is_err());
    }
}
