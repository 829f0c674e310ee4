//! Frequency-domain data model
//! 
//! Full and normalized spectra, their frequency axes, and the derived views

pub mod axes;
pub mod views;

pub use axes::{bin_axis, frequency_axis, time_axis};
pub use views::DerivedViews;

use num_complex::Complex;

/// Full DFT spectrum: one coefficient per bin, `0..N`
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    pub real: Vec<f64>,
    pub imag: Vec<f64>,
}

impl Spectrum {
    pub fn new(real: Vec<f64>, imag: Vec<f64>) -> Self {
        debug_assert_eq!(real.len(), imag.len());
        Self { real, imag }
    }
    
    /// Number of bins (N)
    pub fn len(&self) -> usize {
        self.real.len()
    }
    
    pub fn is_empty(&self) -> bool {
        self.real.is_empty()
    }
    
    /// Coefficient at bin `k`
    pub fn bin(&self, k: usize) -> Complex<f64> {
        Complex::new(self.real[k], self.imag[k])
    }
    
    /// Index of the negative-frequency partner of bin `k`
    pub fn mirror_index(&self, k: usize) -> usize {
        let n = self.len();
        (n - k % n) % n
    }
    
    /// |X[k]| for every bin
    pub fn magnitudes(&self) -> Vec<f64> {
        (0..self.len()).map(|k| self.bin(k).norm()).collect()
    }
}

/// Non-negative-frequency half of a spectrum, scaled by 1/(N/2)
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSpectrum {
    pub real: Vec<f64>,
    pub imag: Vec<f64>,
    
    /// Length of the full spectrum this half was taken from
    n: usize,
}

impl NormalizedSpectrum {
    pub fn new(real: Vec<f64>, imag: Vec<f64>, n: usize) -> Self {
        debug_assert_eq!(real.len(), n / 2 + 1);
        debug_assert_eq!(imag.len(), n / 2 + 1);
        Self { real, imag, n }
    }
    
    /// Number of bins (N/2 + 1)
    pub fn len(&self) -> usize {
        self.real.len()
    }
    
    pub fn is_empty(&self) -> bool {
        self.real.is_empty()
    }
    
    /// Length of the full spectrum (N)
    pub fn full_len(&self) -> usize {
        self.n
    }
    
    /// Factor relating normalized coefficients to raw ones (N/2)
    pub fn scale(&self) -> f64 {
        (self.n / 2) as f64
    }
    
    /// Index of the highest bin, which has no independent mirror
    pub fn last_index(&self) -> usize {
        self.len() - 1
    }
    
    pub fn bin(&self, k: usize) -> Complex<f64> {
        Complex::new(self.real[k], self.imag[k])
    }
    
    pub fn magnitudes(&self) -> Vec<f64> {
        (0..self.len()).map(|k| self.bin(k).norm()).collect()
    }
    
    /// Phase in radians: `atan2(im, re) + π/2`, or 0 where `|re| <= threshold`
    pub fn phases(&self, threshold: f64) -> Vec<f64> {
        (0..self.len())
            .map(|k| {
                let c = self.bin(k);
                if c.re.abs() > threshold {
                    c.arg() + std::f64::consts::FRAC_PI_2
                } else {
                    0.0
                }
            })
            .collect()
    }
}
