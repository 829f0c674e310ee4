//! Frequency and time axes for plotting and bin lookup

/// Raw bin indices `0..n` as plot coordinates
pub fn bin_axis(n: usize) -> Vec<f64> {
    (0..n).map(|k| k as f64).collect()
}

/// Frequency in Hz of each normalized bin: `fs·k/n` for `k in 0..=n/2`
pub fn frequency_axis(sample_rate: f64, n: usize) -> Vec<f64> {
    (0..=n / 2)
        .map(|k| sample_rate * k as f64 / n as f64)
        .collect()
}

/// `n` evenly spaced instants from 0 to `n/fs` inclusive
pub fn time_axis(sample_rate: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let stop = n as f64 / sample_rate;
            let step = stop / (n - 1) as f64;
            (0..n).map(|k| k as f64 * step).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_frequency_axis() {
        let freqs = frequency_axis(1000.0, 8);
        
        assert_eq!(freqs.len(), 5);
        assert_eq!(freqs[0], 0.0);
        assert_eq!(freqs[1], 125.0);
        assert_eq!(freqs[4], 500.0);  // Nyquist
    }
    
    #[test]
    fn test_frequency_axis_odd() {
        let freqs = frequency_axis(90.0, 9);
        assert_eq!(freqs, vec![0.0, 10.0, 20.0, 30.0, 40.0]);
    }
    
    #[test]
    fn test_time_axis_includes_endpoint() {
        let t = time_axis(4.0, 5);
        
        assert_eq!(t.len(), 5);
        assert_eq!(t[0], 0.0);
        assert!((t[4] - 1.25).abs() < 1e-12);
    }
}
