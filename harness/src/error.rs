//! Scenario failure taxonomy.
//!
//! Two failure modes exist per scenario: the converter wrote diagnostics to
//! stderr, or its stdout did not match the golden file. Both embed the tool
//! path and the offending content so a failure message is debuggable on its
//! own.

use thiserror::Error;

/// A scenario-level failure raised while checking one converter invocation.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// The converter wrote to stderr. Any diagnostic output is fatal to the
    /// scenario, regardless of exit code.
    #[error("ERROR in {tool}:\n{stderr}")]
    Execution {
        /// Path of the converter program.
        tool: String,
        /// Everything the converter wrote to stderr.
        stderr: String,
    },

    /// The converter's stdout did not exactly match the golden file.
    #[error(
        "output generated by {tool} does not match expected.\n\
         The following output was generated instead:\n{generated}"
    )]
    Mismatch {
        /// Path of the converter program.
        tool: String,
        /// Everything the converter wrote to stdout.
        generated: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execution_message_embeds_tool_and_stderr() {
        let err = ScenarioError::Execution {
            tool: "/usr/bin/colorMaptoSLD.py".to_string(),
            stderr: "Traceback (most recent call last):".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("/usr/bin/colorMaptoSLD.py"));
        assert!(rendered.contains("Traceback"));
    }

    #[test]
    fn mismatch_message_embeds_generated_content() {
        let err = ScenarioError::Mismatch {
            tool: "/usr/bin/SLDtoColorMap.py".to_string(),
            generated: "<ColorMap/>".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("does not match expected"));
        assert!(rendered.contains("<ColorMap/>"));
    }
}
