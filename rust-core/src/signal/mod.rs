//! Sampled input signal and its text file format

pub mod loader;

pub use loader::{load_signal, parse_signal, SignalFileError};

/// Real-valued samples with their sample rate and display name
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    name: String,
    sample_rate: u64,
    samples: Vec<f64>,
}

impl Signal {
    pub fn new(name: impl Into<String>, sample_rate: u64, samples: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            sample_rate,
            samples,
        }
    }
    
    pub fn name(&self) -> &str {
        &self.name
    }
    
    /// Sample rate in Hz
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate as f64
    }
    
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }
    
    /// Number of samples (N)
    pub fn len(&self) -> usize {
        self.samples.len()
    }
    
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
