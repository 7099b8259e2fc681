//! Types for frequency readings

use std::fmt;

/// A single reading parsed from one serial frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub value: f64,
}

impl Measurement {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    /// Scale the reading and render it as `"<n> rpm"`, truncating toward zero.
    pub fn display_text(&self, scale: f64) -> Result<DisplayText, CounterError> {
        let scaled = self.value * scale;
        if !scaled.is_finite() {
            return Err(CounterError::Overflow(format!("{} has no integer value", scaled)));
        }
        // + 0.0 turns -0 into 0
        Ok(DisplayText(format!("{:.0} rpm", scaled.trunc() + 0.0)))
    }
}

/// Text shown on the display after a successful tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayText(pub String);

impl DisplayText {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors that can occur while reading the counter
#[derive(Debug)]
pub enum CounterError {
    /// Transport layer error (serial port, etc.)
    Transport(String),
    /// Frame bytes are not valid UTF-8
    Decode(String),
    /// Frame payload is not a decimal number
    Parse(String),
    /// Scaled value is infinite or NaN
    Overflow(String),
}

impl fmt::Display for CounterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CounterError::Transport(msg) => write!(f, "transport error: {}", msg),
            CounterError::Decode(msg) => write!(f, "could not decode frame: {}", msg),
            CounterError::Parse(msg) => write!(f, "could not parse frame: {}", msg),
            CounterError::Overflow(msg) => write!(f, "reading out of range: {}", msg),
        }
    }
}

impl std::error::Error for CounterError {}

/// Render bytes for log output, escaping anything non-printable
pub(crate) fn escape_bytes(bytes: &[u8]) -> String {
    bytes.escape_ascii().to_string()
}
