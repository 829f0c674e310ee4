//! Interactive frequency-domain editing
//! 
//! Owns the spectrum state of one signal and applies Remove/Add/Scale edits
//! to both the normalized half spectrum and the full spectrum, then
//! recomputes every derived view.

pub mod bins;

pub use bins::nearest_bin;

use crate::config::WorkbenchConfig;
use crate::signal::Signal;
use crate::spectrum::{bin_axis, frequency_axis, time_axis, DerivedViews, NormalizedSpectrum, Spectrum};
use crate::transform::{forward_transform, normalize, TransformError};
use tracing::debug;

/// Spectrum state produced by the initial transform
#[derive(Debug, Clone)]
struct EditorState {
    spectrum: Spectrum,
    normalized: NormalizedSpectrum,
    views: DerivedViews,
}

/// Editing session over one signal
pub struct SpectrumEditor {
    signal: Signal,
    
    /// Frequency in Hz of each normalized bin
    frequencies: Vec<f64>,
    
    phase_threshold: f64,
    decimals: u32,
    
    state: Option<EditorState>,
}

impl SpectrumEditor {
    /// Create an editor for `signal`
    /// 
    /// The spectrum is not computed until [`calculate`](Self::calculate) runs.
    pub fn new(signal: Signal, config: &WorkbenchConfig) -> Result<Self, TransformError> {
        let n = signal.len();
        if n < 2 {
            return Err(TransformError::TooFewSamples(n));
        }
        let sample_rate = signal.sample_rate();
        if sample_rate <= 0.0 {
            return Err(TransformError::InvalidSampleRate(sample_rate));
        }
        
        let frequencies = frequency_axis(sample_rate, n);
        
        Ok(Self {
            signal,
            frequencies,
            phase_threshold: config.phase_threshold,
            decimals: config.decimals,
            state: None,
        })
    }
    
    /// Run the forward transform and derive all views
    pub fn calculate(&mut self) {
        let n = self.signal.len();
        let (real, imag) = forward_transform(self.signal.samples(), n, self.decimals);
        let (half_real, half_imag) = normalize(&real, &imag, n);
        
        let spectrum = Spectrum::new(real, imag);
        let normalized = NormalizedSpectrum::new(half_real, half_imag, n);
        let views = DerivedViews::compute(&spectrum, &normalized, self.phase_threshold, self.decimals);
        
        self.state = Some(EditorState {
            spectrum,
            normalized,
            views,
        });
    }
    
    /// Recompute derived views from the current spectrum
    pub fn recompute(&mut self) -> Result<(), TransformError> {
        let state = self.state.as_mut().ok_or(TransformError::NotCalculated)?;
        state.views = DerivedViews::compute(
            &state.spectrum,
            &state.normalized,
            self.phase_threshold,
            self.decimals,
        );
        Ok(())
    }
    
    /// Zero the bins nearest to each frequency (and their mirrors)
    /// 
    /// Non-finite frequencies match no bin and are ignored by every edit.
    /// 
    /// # Returns
    /// Matched normalized bin indices, in request order
    pub fn remove(&mut self, frequencies: &[f64]) -> Result<Vec<usize>, TransformError> {
        let indices: Vec<usize> = self.resolve(frequencies.iter().copied())?.into_iter().flatten().collect();
        let state = self.state.as_mut().ok_or(TransformError::NotCalculated)?;
        
        for &idx in &indices {
            state.normalized.real[idx] = 0.0;
            state.normalized.imag[idx] = 0.0;
            
            for k in raw_targets(&state.spectrum, idx) {
                state.spectrum.real[k] = 0.0;
                state.spectrum.imag[k] = 0.0;
            }
        }
        
        self.recompute()?;
        Ok(indices)
    }
    
    /// Set the bins nearest to each frequency to a zero-phase tone
    /// 
    /// # Arguments
    /// * `tones` - `(frequency_hz, magnitude)` pairs; magnitude is in
    ///   normalized units, matching the listed magnitudes
    pub fn add(&mut self, tones: &[(f64, f64)]) -> Result<Vec<usize>, TransformError> {
        let indices = self.resolve(tones.iter().map(|&(f, _)| f))?;
        let state = self.state.as_mut().ok_or(TransformError::NotCalculated)?;
        let scale = state.normalized.scale();
        let mut added = Vec::with_capacity(indices.len());
        
        for (idx, &(_, magnitude)) in indices.into_iter().zip(tones) {
            let Some(idx) = idx else {
                continue;
            };
            
            state.normalized.real[idx] = magnitude;
            state.normalized.imag[idx] = 0.0;
            
            for k in raw_targets(&state.spectrum, idx) {
                state.spectrum.real[k] = magnitude * scale;
                state.spectrum.imag[k] = 0.0;
            }
            added.push(idx);
        }
        
        self.recompute()?;
        Ok(added)
    }
    
    /// Multiply the bins nearest to each frequency by a factor
    /// 
    /// Requests landing on the last normalized bin are skipped.
    /// 
    /// # Returns
    /// The bins that were actually scaled
    pub fn scale(&mut self, factors: &[(f64, f64)]) -> Result<Vec<usize>, TransformError> {
        let indices = self.resolve(factors.iter().map(|&(f, _)| f))?;
        let state = self.state.as_mut().ok_or(TransformError::NotCalculated)?;
        let last = state.normalized.last_index();
        let mut scaled = Vec::with_capacity(indices.len());
        
        for (idx, &(frequency, factor)) in indices.into_iter().zip(factors) {
            let Some(idx) = idx else {
                continue;
            };
            if idx == last {
                debug!(frequency, bin = idx, "scale skipped on edge bin");
                continue;
            }
            
            state.normalized.real[idx] *= factor;
            state.normalized.imag[idx] *= factor;
            
            for k in raw_targets(&state.spectrum, idx) {
                state.spectrum.real[k] *= factor;
                state.spectrum.imag[k] *= factor;
            }
            scaled.push(idx);
        }
        
        self.recompute()?;
        Ok(scaled)
    }
    
    /// Map requested frequencies to normalized bin indices, one entry per request
    fn resolve(&self, frequencies: impl Iterator<Item = f64>) -> Result<Vec<Option<usize>>, TransformError> {
        if self.state.is_none() {
            return Err(TransformError::NotCalculated);
        }
        
        let mut indices = Vec::new();
        for frequency in frequencies {
            let idx = nearest_bin(&self.frequencies, frequency);
            match idx {
                Some(idx) => debug!(frequency, bin = idx, bin_hz = self.frequencies[idx], "matched bin"),
                None => debug!(frequency, "no bin matches frequency"),
            }
            indices.push(idx);
        }
        Ok(indices)
    }
    
    pub fn signal(&self) -> &Signal {
        &self.signal
    }
    
    /// Frequency in Hz of each normalized bin
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }
    
    /// Raw bin indices as plot coordinates
    pub fn bins(&self) -> Vec<f64> {
        bin_axis(self.signal.len())
    }
    
    /// Sample instants of the reconstructed signal
    pub fn time(&self) -> Vec<f64> {
        time_axis(self.signal.sample_rate(), self.signal.len())
    }
    
    pub fn spectrum(&self) -> Result<&Spectrum, TransformError> {
        self.state.as_ref().map(|s| &s.spectrum).ok_or(TransformError::NotCalculated)
    }
    
    pub fn normalized(&self) -> Result<&NormalizedSpectrum, TransformError> {
        self.state.as_ref().map(|s| &s.normalized).ok_or(TransformError::NotCalculated)
    }
    
    pub fn views(&self) -> Result<&DerivedViews, TransformError> {
        self.state.as_ref().map(|s| &s.views).ok_or(TransformError::NotCalculated)
    }
}

/// Raw-spectrum bins touched by an edit of normalized bin `idx`
fn raw_targets(spectrum: &Spectrum, idx: usize) -> impl Iterator<Item = usize> {
    let mirror = spectrum.mirror_index(idx);
    std::iter::once(idx).chain((mirror != idx).then_some(mirror))
}
