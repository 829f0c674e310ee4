//! DFT Workbench - Frequency-Domain Signal Editor
//! 
//! Direct DFT/IDFT of a sampled signal, interactive editing of its spectrum,
//! and four-panel magnitude/phase/reconstruction plots.

pub mod cli;
pub mod config;
pub mod editor;
pub mod plot;
pub mod signal;
pub mod spectrum;
pub mod transform;

pub use config::WorkbenchConfig;
pub use editor::SpectrumEditor;
pub use signal::{load_signal, Signal};
pub use spectrum::{DerivedViews, NormalizedSpectrum, Spectrum};
pub use transform::{forward_transform, inverse_transform, normalize, TransformError};
