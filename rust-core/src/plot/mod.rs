//! Four-panel figure of the current spectrum state
//! 
//! A [`Figure`] is a snapshot taken at plot time; rendering and saving work
//! from the snapshot, so later edits do not change an existing figure.

pub mod fonts;
pub mod render;

use crate::config::WorkbenchConfig;
use crate::editor::SpectrumEditor;
use crate::transform::TransformError;
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to render figure: {0}")]
    Render(String),
    
    #[error("Failed to launch viewer '{command}': {source}")]
    Viewer {
        command: String,
        #[source]
        source: std::io::Error,
    },
    
    #[error("Viewer '{command}' exited with {status}")]
    ViewerStatus {
        command: String,
        status: std::process::ExitStatus,
    },
}

/// One stem or line panel
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Snapshot of the four plots
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// Signal name, used for the default file name
    pub name: String,
    
    /// Magnitude by raw bin
    pub magnitude: Panel,
    
    /// Normalized magnitude by frequency
    pub normalized_magnitude: Panel,
    
    /// Phase (degrees) by frequency
    pub phase: Panel,
    
    /// Reconstructed signal by time
    pub reconstructed: Panel,
}

impl Figure {
    /// Snapshot the editor's current views
    pub fn from_editor(editor: &SpectrumEditor) -> Result<Self, TransformError> {
        let views = editor.views()?;
        let frequencies = editor.frequencies().to_vec();
        
        Ok(Self {
            name: editor.signal().name().to_string(),
            magnitude: Panel {
                title: "Magnitude by Bin (DFT)",
                x_label: "Bin",
                y_label: "Magnitude",
                x: editor.bins(),
                y: views.magnitudes.clone(),
            },
            normalized_magnitude: Panel {
                title: "Normalized Magnitude by Frequency (DFT)",
                x_label: "Frequency (Hz)",
                y_label: "Magnitude",
                x: frequencies.clone(),
                y: views.normalized_magnitudes.clone(),
            },
            phase: Panel {
                title: "Phase by Frequency (DFT)",
                x_label: "Frequency (Hz)",
                y_label: "Angle (degrees)",
                x: frequencies,
                y: views.phase_degrees(),
            },
            reconstructed: Panel {
                title: "Reconstructed Signal (IDFT)",
                x_label: "Time (s)",
                y_label: "Amplitude",
                x: editor.time(),
                y: views.reconstructed.clone(),
            },
        })
    }
    
    /// Render the figure as a PNG at `path`
    pub fn render(&self, path: &Path, config: &WorkbenchConfig) -> Result<(), PlotError> {
        let labels = fonts::ensure_fonts(config.font_path.as_deref());
        render::render_png(self, path, config.figure_size, labels)
            .map_err(|e| PlotError::Render(e.to_string()))
    }
    
    /// Render to `filename` (see [`output_filename`]) and return the path written
    pub fn save(&self, filename: &str, config: &WorkbenchConfig) -> Result<PathBuf, PlotError> {
        let path = PathBuf::from(output_filename(filename, &self.name));
        self.render(&path, config)?;
        info!(path = %path.display(), "saved figure");
        Ok(path)
    }
    
    /// Render to a temporary file and open it with the configured viewer
    pub fn show(&self, config: &WorkbenchConfig) -> Result<PathBuf, PlotError> {
        let path = std::env::temp_dir().join(output_filename("", &self.name));
        self.render(&path, config)?;
        
        let command = config.viewer_command();
        let mut parts = command.split_whitespace();
        let program = parts.next().unwrap_or(command);
        
        let status = Command::new(program)
            .args(parts)
            .arg(&path)
            .status()
            .map_err(|source| PlotError::Viewer {
                command: command.to_string(),
                source,
            })?;
        
        if !status.success() {
            return Err(PlotError::ViewerStatus {
                command: command.to_string(),
                status,
            });
        }
        Ok(path)
    }
}

/// File name a figure is saved under
/// 
/// Empty → `<signal name>.png`; a missing `.png` suffix (any case) is appended.
pub fn output_filename(requested: &str, signal_name: &str) -> String {
    let requested = requested.trim();
    let mut name = if requested.is_empty() {
        format!("{signal_name}.png")
    } else {
        requested.to_string()
    };
    
    if !name.to_lowercase().ends_with(".png") {
        name.push_str(".png");
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::Signal;
    
    #[test]
    fn test_output_filename() {
        assert_eq!(output_filename("", "sine"), "sine.png");
        assert_eq!(output_filename("plot", "sine"), "plot.png");
        assert_eq!(output_filename("plot.PNG", "sine"), "plot.PNG");
        assert_eq!(output_filename("  out.png ", "sine"), "out.png");
        assert_eq!(output_filename("a.jpg", "sine"), "a.jpg.png");
    }
    
    #[test]
    fn test_figure_snapshot() {
        let signal = Signal::new("ramp", 4, vec![1.0, 2.0, 3.0, 4.0]);
        let config = WorkbenchConfig::default();
        let mut editor = SpectrumEditor::new(signal, &config).unwrap();
        
        assert!(Figure::from_editor(&editor).is_err());
        
        editor.calculate();
        let figure = Figure::from_editor(&editor).unwrap();
        
        assert_eq!(figure.name, "ramp");
        assert_eq!(figure.magnitude.x, vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(figure.normalized_magnitude.x, vec![0.0, 1.0, 2.0]);
        assert_eq!(figure.phase.y.len(), 3);
        assert_eq!(figure.reconstructed.x.len(), 4);
        
        // Later edits leave the snapshot alone
        editor.remove(&[1.0]).unwrap();
        assert!(figure.normalized_magnitude.y[1] > 0.0);
    }
}
