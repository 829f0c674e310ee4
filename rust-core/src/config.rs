//! Workbench configuration

use crate::transform::DEFAULT_DECIMALS;
use std::path::PathBuf;

/// Settings shared by the editor, the listings and the plot renderer
#[derive(Debug, Clone, PartialEq)]
pub struct WorkbenchConfig {
    /// Magnitude above which a bin counts as present (listings for `fr`, `fs`, `fa`)
    pub magnitude_threshold: f64,
    
    /// Real-part magnitude at or below which phase is reported as 0
    pub phase_threshold: f64,
    
    /// Decimal places the forward and inverse transforms round to
    pub decimals: u32,
    
    /// Rendered figure size in pixels (width, height)
    pub figure_size: (u32, u32),
    
    /// Command used to open a rendered figure for display
    pub viewer: Option<String>,
    
    /// TrueType font for plot text; common system fonts are tried when unset
    pub font_path: Option<PathBuf>,
}

impl Default for WorkbenchConfig {
    fn default() -> Self {
        Self {
            magnitude_threshold: 1e-4,
            phase_threshold: 1e-4,
            decimals: DEFAULT_DECIMALS,
            figure_size: (1200, 800),
            viewer: None,
            font_path: None,
        }
    }
}

impl WorkbenchConfig {
    /// Viewer command, falling back to the platform's default opener
    pub fn viewer_command(&self) -> &str {
        match &self.viewer {
            Some(cmd) => cmd.as_str(),
            None if cfg!(target_os = "macos") => "open",
            None if cfg!(target_os = "windows") => "explorer",
            None => "xdg-open",
        }
    }
}
