//! Textbook DFT and IDFT
//! 
//! Uses the `+sin` kernel: X[i] = Σ x[k]·(cos(2πik/N) + j·sin(2πik/N)).
//! Every per-term product is available as a TRACE event.

use std::f64::consts::PI;
use std::time::Instant;
use tracing::{debug, trace, Level};

/// Round `value` to `decimals` decimal places
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    let rounded = (value * scale).round() / scale;
    // Avoid handing out -0.0
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Compute the forward DFT of a real signal
/// 
/// # Arguments
/// * `samples` - Real input samples (indices at or beyond `n` are ignored)
/// * `n` - Number of output bins
/// * `decimals` - Rounding precision applied to each bin
/// 
/// # Returns
/// `(real, imag)`, both of length `n`
pub fn forward_transform(samples: &[f64], n: usize, decimals: u32) -> (Vec<f64>, Vec<f64>) {
    let start = Instant::now();
    let verbose = tracing::enabled!(Level::TRACE);
    
    let mut real = vec![0.0; n];
    let mut imag = vec![0.0; n];
    
    for i in 0..n {
        let mut real_sum = 0.0;
        let mut imag_sum = 0.0;
        
        for (k, &v) in samples.iter().take(n).enumerate() {
            let angle = 2.0 * PI * (i * k) as f64 / n as f64;
            let re = v * angle.cos();
            let im = v * angle.sin();
            real_sum += re;
            imag_sum += im;
            
            if verbose {
                trace!(bin = i, sample = k, value = v, re, im, "X({i}) += {v} * [cos(2*pi*{i}*{k}/{n}) + sin(2*pi*{i}*{k}/{n})]");
            }
        }
        
        real[i] = round_to(real_sum, decimals);
        imag[i] = round_to(imag_sum, decimals);
        
        if verbose {
            trace!(bin = i, re = real[i], im = imag[i], "X({i}) = {} + {}j", real[i], imag[i]);
        }
    }
    
    debug!(n, elapsed_us = start.elapsed().as_micros() as u64, "forward transform");
    (real, imag)
}

/// Compute the inverse DFT, keeping only the real component
/// 
/// The imaginary component is computed alongside (and traced), but a
/// conjugate-symmetric spectrum yields a real signal, so it is discarded.
/// 
/// # Arguments
/// * `real` - Real parts of all `n` bins
/// * `imag` - Imaginary parts of all `n` bins
/// * `n` - Transform length
/// * `decimals` - Rounding precision applied to each output sample
/// 
/// # Returns
/// Reconstructed time-domain signal of length `n`
pub fn inverse_transform(real: &[f64], imag: &[f64], n: usize, decimals: u32) -> Vec<f64> {
    let start = Instant::now();
    let verbose = tracing::enabled!(Level::TRACE);
    
    let mut signal = vec![0.0; n];
    
    for (k, out) in signal.iter_mut().enumerate() {
        let mut real_sum = 0.0;
        let mut imag_sum = 0.0;
        
        for (i, (&re, &im)) in real.iter().zip(imag.iter()).take(n).enumerate() {
            let angle = 2.0 * PI * (i * k) as f64 / n as f64;
            let (sin, cos) = angle.sin_cos();
            real_sum += re * cos + im * sin;
            imag_sum += im * cos - re * sin;
            
            if verbose {
                trace!(sample = k, bin = i, re, im, "x({k}) += ({re} + {im}j) * [cos(2*pi*{i}*{k}/{n}) - sin(2*pi*{i}*{k}/{n})]");
            }
        }
        
        *out = round_to(real_sum / n as f64, decimals);
        
        if verbose {
            let imag_part = round_to(imag_sum / n as f64, decimals);
            trace!(sample = k, re = *out, im = imag_part, "x({k}) = {} + {}j", *out, imag_part);
        }
    }
    
    debug!(n, elapsed_us = start.elapsed().as_micros() as u64, "inverse transform");
    signal
}
