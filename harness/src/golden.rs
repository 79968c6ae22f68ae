//! Golden-file loading and mismatch diff rendering.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use similar::TextDiff;

/// Reads the golden expected-output file for a scenario.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("failed to read expected output {}", path.display()))
}

/// Renders a unified diff of expected vs. generated text as detail lines.
pub fn diff_lines(expected: &str, generated: &str) -> Vec<String> {
    TextDiff::from_lines(expected, generated)
        .unified_diff()
        .context_radius(3)
        .header("expected", "generated")
        .to_string()
        .lines()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use std::io::Write;

    #[test]
    fn diff_marks_changed_lines() {
        let expected = "<ColorMap>\n<Entry value=\"1\"/>\n</ColorMap>\n";
        let generated = "<ColorMap>\n<Entry value=\"2\"/>\n</ColorMap>\n";
        let lines = diff_lines(expected, generated);
        assert!(lines.iter().any(|l| l == "-<Entry value=\"1\"/>"));
        assert!(lines.iter().any(|l| l == "+<Entry value=\"2\"/>"));
    }

    #[test]
    fn identical_text_produces_no_hunks() {
        let text = "a\nb\n";
        let lines = diff_lines(text, text);
        assert!(!lines.iter().any(|l| l.starts_with("@@")));
    }

    #[test]
    fn load_reads_golden_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("expected.html");
        let mut file = fs::File::create(&path).unwrap();
        write!(file, "<html></html>\n").unwrap();
        assert_eq!(load(&path).unwrap(), "<html></html>\n");
    }

    #[test]
    fn load_missing_golden_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("absent.sld")).unwrap_err();
        assert!(err.to_string().contains("absent.sld"));
    }
}
