//! Parsing of edit-prompt answers

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("No values given")]
    Empty,
    
    #[error("Invalid frequency list: '{0}'")]
    InvalidFrequency(String),
    
    #[error("Invalid pair list: '{0}'")]
    InvalidPair(String),
}

/// Parse `600, 720.5, 1e3` into frequencies
pub fn parse_frequencies(input: &str) -> Result<Vec<f64>, InputError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(InputError::Empty);
    }
    
    input
        .split(',')
        .map(|field| parse_number(field).ok_or_else(|| InputError::InvalidFrequency(input.to_string())))
        .collect()
}

/// Parse `(600, 20), (720, 30)` into `(frequency, value)` pairs
/// 
/// A trailing comma after the last pair is accepted.
pub fn parse_pairs(input: &str) -> Result<Vec<(f64, f64)>, InputError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(InputError::Empty);
    }
    let invalid = || InputError::InvalidPair(input.to_string());
    
    let mut pairs = Vec::new();
    let mut rest = input;
    
    while !rest.is_empty() {
        let body = rest.strip_prefix('(').ok_or_else(invalid)?;
        let close = body.find(')').ok_or_else(invalid)?;
        let (inner, tail) = (&body[..close], &body[close + 1..]);
        
        let mut fields = inner.split(',');
        let pair = match (fields.next(), fields.next(), fields.next()) {
            (Some(a), Some(b), None) => (
                parse_number(a).ok_or_else(invalid)?,
                parse_number(b).ok_or_else(invalid)?,
            ),
            _ => return Err(invalid()),
        };
        pairs.push(pair);
        
        rest = tail.trim_start();
        if let Some(after) = rest.strip_prefix(',') {
            rest = after.trim_start();
        } else if !rest.is_empty() {
            return Err(invalid());
        }
    }
    
    Ok(pairs)
}

fn parse_number(field: &str) -> Option<f64> {
    field.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_frequencies() {
        assert_eq!(parse_frequencies("600, 720.5,1e3"), Ok(vec![600.0, 720.5, 1000.0]));
        assert_eq!(parse_frequencies(" 5 "), Ok(vec![5.0]));
    }
    
    #[test]
    fn test_frequencies_invalid() {
        assert_eq!(parse_frequencies(""), Err(InputError::Empty));
        assert!(matches!(parse_frequencies("600,,700"), Err(InputError::InvalidFrequency(_))));
        assert!(matches!(parse_frequencies("abc"), Err(InputError::InvalidFrequency(_))));
        assert!(matches!(parse_frequencies("nan"), Err(InputError::InvalidFrequency(_))));
    }
    
    #[test]
    fn test_pairs() {
        assert_eq!(parse_pairs("(600, 20), (720, 30)"), Ok(vec![(600.0, 20.0), (720.0, 30.0)]));
        assert_eq!(parse_pairs("(0,5)"), Ok(vec![(0.0, 5.0)]));
        assert_eq!(parse_pairs("(1.5, -2),"), Ok(vec![(1.5, -2.0)]));
    }
    
    #[test]
    fn test_pairs_invalid() {
        for bad in ["600, 20", "(600)", "(600, 20, 30)", "(600, 20) (1, 2)", "(600, x)", "((1, 2))", "(1, 2"] {
            assert!(matches!(parse_pairs(bad), Err(InputError::InvalidPair(_))), "{bad}");
        }
    }
}
