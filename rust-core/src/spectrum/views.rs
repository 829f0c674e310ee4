//! Views derived from the spectrum state
//! 
//! Always recomputed from scratch after the spectrum changes

use super::{NormalizedSpectrum, Spectrum};
use crate::transform::{inverse_transform, mirror};

/// Everything the plots and listings show
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedViews {
    /// |X[k]| of the full spectrum, one per raw bin
    pub magnitudes: Vec<f64>,
    
    /// |X[k]| of the normalized half spectrum
    pub normalized_magnitudes: Vec<f64>,
    
    /// Phase of the normalized half spectrum in radians
    pub phase: Vec<f64>,
    
    /// IDFT of the mirrored half spectrum
    pub reconstructed: Vec<f64>,
}

impl DerivedViews {
    /// Compute all views
    /// 
    /// # Arguments
    /// * `spectrum` - Full spectrum (source of the raw magnitudes)
    /// * `normalized` - Half spectrum (source of everything else)
    /// * `phase_threshold` - Real-part magnitude at or below which phase is 0
    /// * `decimals` - Rounding precision of the reconstruction
    pub fn compute(
        spectrum: &Spectrum,
        normalized: &NormalizedSpectrum,
        phase_threshold: f64,
        decimals: u32,
    ) -> Self {
        let n = normalized.full_len();
        let (real, imag) = mirror(&normalized.real, &normalized.imag, n);
        
        Self {
            magnitudes: spectrum.magnitudes(),
            normalized_magnitudes: normalized.magnitudes(),
            phase: normalized.phases(phase_threshold),
            reconstructed: inverse_transform(&real, &imag, n, decimals),
        }
    }
    
    /// Phase in degrees
    pub fn phase_degrees(&self) -> Vec<f64> {
        self.phase.iter().map(|p| p.to_degrees()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{forward_transform, normalize};
    
    #[test]
    fn test_views_reconstruct_signal() {
        let samples = vec![1.0, 2.0, 3.0, 4.0, 0.0, -1.0];
        let n = samples.len();
        let (real, imag) = forward_transform(&samples, n, 4);
        let (nr, ni) = normalize(&real, &imag, n);
        
        let spectrum = Spectrum::new(real, imag);
        let normalized = NormalizedSpectrum::new(nr, ni, n);
        let views = DerivedViews::compute(&spectrum, &normalized, 1e-4, 4);
        
        assert_eq!(views.magnitudes.len(), 6);
        assert_eq!(views.normalized_magnitudes.len(), 4);
        assert_eq!(views.phase.len(), 4);
        for (a, b) in samples.iter().zip(views.reconstructed.iter()) {
            assert!((a - b).abs() <= 1e-3);
        }
    }
    
    #[test]
    fn test_dc_normalization() {
        let samples = vec![3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
        let n = samples.len();
        let (real, imag) = forward_transform(&samples, n, 4);
        let (nr, ni) = normalize(&real, &imag, n);
        let views = DerivedViews::compute(
            &Spectrum::new(real, imag),
            &NormalizedSpectrum::new(nr, ni, n),
            1e-4,
            4,
        );
        
        assert!((views.normalized_magnitudes[0] - views.magnitudes[0] / 4.0).abs() < 1e-9);
    }
}
