use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum InputError {
    Io { path: String, source: io::Error },
    InvalidThreshold { name: &'static str, value: String },
    ThresholdOutOfRange { name: &'static str, value: f64 },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            InputError::Io {
                ref path,
                ref source,
            } => write!(f, "{}: {}", path, source),
            InputError::InvalidThreshold { name, ref value } => {
                write!(f, "{} must be a number, got '{}'", name, value)
            }
            InputError::ThresholdOutOfRange { name, value } => {
                write!(f, "{} must be in range [0,1], got {}", name, value)
            }
        }
    }
}

impl Error for InputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            InputError::Io { ref source, .. } => Some(source),
            _ => None,
        }
    }
}

pub fn check_threshold(name: &'static str, value: f64) -> Result<f64, InputError> {
    // NaN fails both comparisons, so test for containment.
    if value >= 0.0 && value <= 1.0 {
        Ok(value)
    } else {
        Err(InputError::ThresholdOutOfRange { name, value })
    }
}

pub fn parse_threshold(name: &'static str, text: &str) -> Result<f64, InputError> {
    let value = text
        .trim()
        .parse::<f64>()
        .map_err(|_| InputError::InvalidThreshold {
            name,
            value: String::from(text),
        })?;
    check_threshold(name, value)
}
