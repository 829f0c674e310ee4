//! Cross-checks of the direct transforms against rustfft/realfft
//!
//! The workbench DFT uses the `+sin` kernel, so each bin is the complex
//! conjugate of the standard e^{-jωt} FFT output.

use dft_workbench::{forward_transform, inverse_transform, normalize};
use realfft::RealFftPlanner;
use rustfft::num_complex::Complex;
use rustfft::FftPlanner;
use std::f64::consts::PI;

fn test_signal(n: usize) -> Vec<f64> {
    (0..n)
        .map(|k| {
            let t = k as f64 / n as f64;
            1.5 + 2.0 * (2.0 * PI * 3.0 * t).sin() - 0.75 * (2.0 * PI * 5.0 * t + 0.4).cos()
        })
        .collect()
}

#[test]
fn test_forward_matches_rustfft() {
    for &n in &[16usize, 27, 64] {
        let samples = test_signal(n);
        let (real, imag) = forward_transform(&samples, n, 4);
        
        let mut buffer: Vec<Complex<f64>> = samples.iter().map(|&v| Complex::new(v, 0.0)).collect();
        FftPlanner::<f64>::new().plan_fft_forward(n).process(&mut buffer);
        
        for k in 0..n {
            assert!((real[k] - buffer[k].re).abs() < 1e-3, "n={n} bin {k} re");
            assert!((imag[k] + buffer[k].im).abs() < 1e-3, "n={n} bin {k} im");
        }
    }
}

#[test]
fn test_normalized_half_matches_realfft() {
    let n = 32;
    let samples = test_signal(n);
    let (real, imag) = forward_transform(&samples, n, 4);
    let (half_real, half_imag) = normalize(&real, &imag, n);
    
    let r2c = RealFftPlanner::<f64>::new().plan_fft_forward(n);
    let mut input = samples.clone();
    let mut output = r2c.make_output_vec();
    r2c.process(&mut input, &mut output).unwrap();
    
    assert_eq!(half_real.len(), output.len());
    let scale = (n / 2) as f64;
    for (k, c) in output.iter().enumerate() {
        assert!((half_real[k] - c.re / scale).abs() < 1e-4, "bin {k}");
        assert!((half_imag[k] + c.im / scale).abs() < 1e-4, "bin {k}");
    }
    
    // DC of 1.5 reads as 3.0 after the N/2 scaling, the 3-cycle sine as amplitude 2
    assert!((half_real[0] - 3.0).abs() < 1e-3);
    assert!((half_real[3].hypot(half_imag[3]) - 2.0).abs() < 1e-3);
}

#[test]
fn test_inverse_matches_rustfft() {
    let n = 20;
    let samples = test_signal(n);
    let (real, imag) = forward_transform(&samples, n, 4);
    let reconstructed = inverse_transform(&real, &imag, n, 4);
    
    // Undo the conjugation and run the standard inverse
    let mut buffer: Vec<Complex<f64>> = real.iter().zip(&imag).map(|(&re, &im)| Complex::new(re, -im)).collect();
    FftPlanner::<f64>::new().plan_fft_inverse(n).process(&mut buffer);
    
    for k in 0..n {
        let expected = buffer[k].re / n as f64;
        assert!((reconstructed[k] - expected).abs() < 1e-3);
        assert!((reconstructed[k] - samples[k]).abs() < 1e-3);
    }
}
