//! Half-spectrum normalization and Hermitian mirroring

/// Truncate a full spectrum to its non-negative-frequency half and scale it
/// 
/// Keeps bins `0..=n/2` and divides each coefficient by `n/2`.
/// 
/// # Arguments
/// * `real` - Real parts of the full spectrum
/// * `imag` - Imaginary parts of the full spectrum
/// * `n` - Transform length (must be at least 2)
/// 
/// # Returns
/// `(real, imag)`, both of length `n/2 + 1`
pub fn normalize(real: &[f64], imag: &[f64], n: usize) -> (Vec<f64>, Vec<f64>) {
    let half_n = n / 2;
    let scale = half_n as f64;
    
    let normalized_real = real.iter().take(half_n + 1).map(|&re| re / scale).collect();
    let normalized_imag = imag.iter().take(half_n + 1).map(|&im| im / scale).collect();
    
    (normalized_real, normalized_imag)
}

/// Rebuild the full conjugate-symmetric spectrum from a normalized half
/// 
/// Bin `k <= n/2` is taken from the half spectrum, bin `k > n/2` is the
/// conjugate of bin `n - k`. Both are scaled back by `n/2`. For even `n`
/// this is `concat(half, reverse(half[1..n/2]))` with the imaginary tail
/// negated.
/// 
/// # Arguments
/// * `half_real` - Normalized real parts, length `n/2 + 1`
/// * `half_imag` - Normalized imaginary parts, length `n/2 + 1`
/// * `n` - Length of the full spectrum
/// 
/// # Returns
/// `(real, imag)`, both of length `n`
pub fn mirror(half_real: &[f64], half_imag: &[f64], n: usize) -> (Vec<f64>, Vec<f64>) {
    let half_n = n / 2;
    let scale = half_n as f64;
    
    let mut real = Vec::with_capacity(n);
    let mut imag = Vec::with_capacity(n);
    
    for k in 0..n {
        if k <= half_n {
            real.push(half_real[k] * scale);
            imag.push(half_imag[k] * scale);
        } else {
            real.push(half_real[n - k] * scale);
            imag.push(-half_imag[n - k] * scale);
        }
    }
    
    (real, imag)
}
