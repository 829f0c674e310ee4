//! Frequency to bin lookup

/// Index of the axis entry closest to `frequency`
/// 
/// Linear scan in bin order; on equal distance the lower index wins.
/// Returns `None` for an empty axis or a non-finite frequency.
pub fn nearest_bin(axis: &[f64], frequency: f64) -> Option<usize> {
    if !frequency.is_finite() {
        return None;
    }
    
    let mut best: Option<(usize, f64)> = None;
    
    for (k, &f) in axis.iter().enumerate() {
        let distance = (f - frequency).abs();
        match best {
            Some((_, d)) if distance >= d => {}
            _ => best = Some((k, distance)),
        }
    }
    
    best.map(|(k, _)| k)
}
