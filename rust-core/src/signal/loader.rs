//! Signal file reader
//! 
//! Line-oriented text format:
//! - `# ...` and blank lines are ignored
//! - `"name"` sets the signal name
//! - a line of digits sets the sample rate in Hz
//! - anything else is a comma-separated list of samples

use super::Signal;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum SignalFileError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    
    #[error("File format is incorrect or missing required data (no quoted signal name)")]
    MissingName,
    
    #[error("File format is incorrect or missing required data (no sample rate line)")]
    MissingSampleRate,
    
    #[error("File format is incorrect or missing required data (no samples)")]
    NoSamples,
    
    #[error("File format is incorrect or missing required data (sample rate must be positive)")]
    ZeroSampleRate,
}

/// Read and parse a signal file
pub fn load_signal(path: impl AsRef<Path>) -> Result<Signal, SignalFileError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| SignalFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    
    let signal = parse_signal(&text)?;
    info!(
        path = %path.display(),
        name = signal.name(),
        sample_rate = signal.sample_rate(),
        samples = signal.len(),
        "loaded signal"
    );
    Ok(signal)
}

/// Parse signal file contents
/// 
/// Later name and sample-rate lines override earlier ones; sample lines
/// accumulate in order. A sample line with any unparsable or non-finite
/// value is skipped as a whole with a warning.
pub fn parse_signal(text: &str) -> Result<Signal, SignalFileError> {
    let mut name: Option<String> = None;
    let mut sample_rate: Option<u64> = None;
    let mut samples = Vec::new();
    
    for (number, raw) in text.lines().enumerate() {
        let line = raw.trim();
        
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        
        if line.starts_with('"') && line.ends_with('"') {
            name = Some(line.trim_matches('"').to_string());
        } else if line.bytes().all(|b| b.is_ascii_digit()) {
            match line.parse::<u64>() {
                Ok(rate) => sample_rate = Some(rate),
                Err(e) => warn!(line = number + 1, "Skipping invalid sample rate '{line}': {e}"),
            }
        } else {
            match parse_sample_line(line) {
                Some(values) => samples.extend(values),
                None => warn!(line = number + 1, "Skipping invalid sample data '{line}'"),
            }
        }
    }
    
    let name = name.ok_or(SignalFileError::MissingName)?;
    let sample_rate = sample_rate.ok_or(SignalFileError::MissingSampleRate)?;
    if sample_rate == 0 {
        return Err(SignalFileError::ZeroSampleRate);
    }
    if samples.is_empty() {
        return Err(SignalFileError::NoSamples);
    }
    
    Ok(Signal::new(name, sample_rate, samples))
}

fn parse_sample_line(line: &str) -> Option<Vec<f64>> {
    line.split(',')
        .map(|field| field.trim().parse::<f64>().ok().filter(|v| v.is_finite()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_parse_full_file() {
        let text = "# test signal\n\"square\"\n\n8\n1, 1, 1, 1\n-1,-1,-1,-1\n";
        let signal = parse_signal(text).unwrap();
        
        assert_eq!(signal.name(), "square");
        assert_eq!(signal.sample_rate(), 8.0);
        assert_eq!(signal.samples(), &[1.0, 1.0, 1.0, 1.0, -1.0, -1.0, -1.0, -1.0]);
    }
    
    #[test]
    fn test_malformed_line_skipped() {
        let text = "\"s\"\n100\n1.0, 2.0\n3.0, oops\n4.5\n";
        let signal = parse_signal(text).unwrap();
        
        assert_eq!(signal.samples(), &[1.0, 2.0, 4.5]);
    }
    
    #[test]
    fn test_non_finite_rejected() {
        let signal = parse_signal("\"s\"\n10\nnan, 1\n2.5, 3\n").unwrap();
        assert_eq!(signal.samples(), &[2.5, 3.0]);
        
        let err = parse_signal("\"s\"\n10\ninf\n").unwrap_err();
        assert!(matches!(err, SignalFileError::NoSamples));
    }
    
    #[test]
    fn test_digit_line_is_sample_rate() {
        let signal = parse_signal("\"s\"\n10\n1.0, 2.0\n250\n").unwrap();
        
        assert_eq!(signal.sample_rate(), 250.0);
        assert_eq!(signal.len(), 2);
    }
    
    #[test]
    fn test_missing_parts() {
        assert!(matches!(parse_signal("10\n1,2\n"), Err(SignalFileError::MissingName)));
        assert!(matches!(parse_signal("\"a\"\n1.5,2\n"), Err(SignalFileError::MissingSampleRate)));
        assert!(matches!(parse_signal("\"a\"\n10\n# 1,2\n"), Err(SignalFileError::NoSamples)));
    }
    
    #[test]
    fn test_zero_sample_rate() {
        let err = parse_signal("\"z\"\n0\n1, 2, 3, 4, 5, 6, 7, 8\n").unwrap_err();
        assert!(matches!(err, SignalFileError::ZeroSampleRate));
        
        // A later positive rate line overrides the zero
        let signal = parse_signal("\"z\"\n0\n1, 2\n16\n").unwrap();
        assert_eq!(signal.sample_rate(), 16.0);
    }
    
    #[test]
    fn test_missing_file() {
        let err = load_signal("/nonexistent/dir/signal.txt").unwrap_err();
        assert!(matches!(err, SignalFileError::Io { .. }));
    }
}
