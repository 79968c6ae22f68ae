//! Converter program locations.
//!
//! The suite exercises four external converters. Their installed names are
//! fixed; only the directory containing them varies between deployments.

use std::path::{Path, PathBuf};

/// File name of the colormap→HTML converter, format version 1.0.
pub const COLORMAP_TO_HTML_V1_0: &str = "colorMaptoHTML_v1.0.py";
/// File name of the colormap→HTML converter, format version 1.3.
pub const COLORMAP_TO_HTML_V1_3: &str = "colorMaptoHTML_v1.3.py";
/// File name of the colormap→SLD converter.
pub const COLORMAP_TO_SLD: &str = "colorMaptoSLD.py";
/// File name of the SLD→colormap converter.
pub const SLD_TO_COLORMAP: &str = "SLDtoColorMap.py";

/// Directory the converters are installed into by default.
pub const DEFAULT_TOOLS_DIR: &str = "/usr/bin";

/// Resolved paths to the four external converter programs.
#[derive(Debug, Clone)]
pub struct ToolPaths {
    /// colormap→HTML, format version 1.0.
    pub colormap_to_html_v1_0: PathBuf,
    /// colormap→HTML, format version 1.3.
    pub colormap_to_html_v1_3: PathBuf,
    /// colormap→SLD.
    pub colormap_to_sld: PathBuf,
    /// SLD→colormap.
    pub sld_to_colormap: PathBuf,
}

impl ToolPaths {
    /// Resolves all four converters inside `dir`.
    pub fn from_dir(dir: &Path) -> Self {
        Self {
            colormap_to_html_v1_0: dir.join(COLORMAP_TO_HTML_V1_0),
            colormap_to_html_v1_3: dir.join(COLORMAP_TO_HTML_V1_3),
            colormap_to_sld: dir.join(COLORMAP_TO_SLD),
            sld_to_colormap: dir.join(SLD_TO_COLORMAP),
        }
    }
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self::from_dir(Path::new(DEFAULT_TOOLS_DIR))
    }
}
