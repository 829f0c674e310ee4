//! Discrete Fourier transform core
//! 
//! Direct O(N²) DFT/IDFT summations plus half-spectrum normalization

pub mod dft;
pub mod normalize;

pub use dft::{forward_transform, inverse_transform, round_to};
pub use normalize::{mirror, normalize};

use thiserror::Error;

/// Number of decimal places transform outputs are rounded to
pub const DEFAULT_DECIMALS: u32 = 4;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    #[error("DFT not calculated yet; run the initial transform first")]
    NotCalculated,

    #[error("At least 2 samples are required to build a spectrum (got {0})")]
    TooFewSamples(usize),
    
    #[error("Sample rate must be positive (got {0} Hz)")]
    InvalidSampleRate(f64),
}
