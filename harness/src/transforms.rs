//! Typed numeric transform options for the SLD→colormap converter.
//!
//! The converter layers optional `offset`, `factor`, `precision`, and
//! `densify` transforms onto the base conversion. The harness validates the
//! option shapes at declaration time and renders them back into command-line
//! flags; the arithmetic itself happens inside the converter.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error parsing a transform option spec.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformParseError {
    /// The precision spec did not match `<digits>f`.
    #[error("invalid precision spec `{0}` (expected a digit count followed by `f`, e.g. \"3f\")")]
    Precision(String),

    /// The densify spec did not match `r<steps>` or `l<steps>`.
    #[error("invalid densify spec `{0}` (expected `r` or `l` followed by a step count, e.g. \"r5\")")]
    Densify(String),
}

/// Output precision spec, e.g. `3f`: format values with three fixed decimal
/// places.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precision {
    digits: u8,
}

impl Precision {
    /// Creates a precision of `digits` fixed decimal places.
    pub fn new(digits: u8) -> Self {
        Self { digits }
    }

    /// Number of fixed decimal places.
    pub fn digits(&self) -> u8 {
        self.digits
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}f", self.digits)
    }
}

impl FromStr for Precision {
    type Err = TransformParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_suffix('f')
            .and_then(|d| d.parse::<u8>().ok())
            .ok_or_else(|| TransformParseError::Precision(s.to_string()))?;
        Ok(Self { digits })
    }
}

/// Densify spec: expand sparse color breakpoints into a denser set by
/// interpolation.
///
/// `r<N>` subdivides each source range into `N` steps; `l<N>` spaces `N`
/// steps linearly across the full span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Densify {
    /// Per-range subdivision (`r5`).
    Range(u32),
    /// Linear spacing across the full span (`l5`).
    Linear(u32),
}

impl fmt::Display for Densify {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Densify::Range(steps) => write!(f, "r{steps}"),
            Densify::Linear(steps) => write!(f, "l{steps}"),
        }
    }
}

impl FromStr for Densify {
    type Err = TransformParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TransformParseError::Densify(s.to_string());
        let (mode, steps) = s.split_at_checked(1).ok_or_else(invalid)?;
        let steps = steps.parse::<u32>().map_err(|_| invalid())?;
        if steps == 0 {
            return Err(invalid());
        }
        match mode {
            "r" => Ok(Densify::Range(steps)),
            "l" => Ok(Densify::Linear(steps)),
            _ => Err(invalid()),
        }
    }
}

/// Optional numeric transforms layered onto an SLD→colormap conversion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transforms {
    /// Value added to every entry (`-o`).
    pub offset: Option<f64>,
    /// Multiplier applied to every entry (`-f`).
    pub factor: Option<f64>,
    /// Decimal precision for formatted values (`-p`).
    pub precision: Option<Precision>,
    /// Densification of sparse breakpoints (`-d`).
    pub densify: Option<Densify>,
}

impl Transforms {
    /// Renders the transforms as converter command-line arguments, in the
    /// converter's documented flag order.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(offset) = self.offset {
            args.push("-o".to_string());
            args.push(format_float(offset));
        }
        if let Some(factor) = self.factor {
            args.push("-f".to_string());
            args.push(format_float(factor));
        }
        if let Some(precision) = &self.precision {
            args.push("-p".to_string());
            args.push(precision.to_string());
        }
        if let Some(densify) = &self.densify {
            args.push("-d".to_string());
            args.push(densify.to_string());
        }
        args
    }
}

/// Formats a float the way an operator would type it on the command line:
/// integral values lose the trailing `.0`.
fn format_float(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
