use log::{debug, trace};
use std::time::Instant;

use crate::config::CounterConfig;
use crate::display::DisplaySink;
use crate::transport::CounterTransport;
use crate::types::{escape_bytes, CounterError, DisplayText, Measurement};

/// Reads frames from a frequency counter and turns them into display text
pub struct FrequencyCounter<T: CounterTransport> {
    pub(crate) transport: T,
    config: CounterConfig,
}

impl<T: CounterTransport> FrequencyCounter<T> {
    /// Take ownership of the transport and discard anything already buffered.
    ///
    /// This is the only place the input buffer is cleared.
    pub fn new(mut transport: T, config: CounterConfig) -> Result<Self, CounterError> {
        transport
            .clear_input()
            .map_err(|e| CounterError::Transport(format!("{:?}", e)))?;
        Ok(Self { transport, config })
    }

    pub fn config(&self) -> &CounterConfig {
        &self.config
    }

    /// Read bytes until `terminator` arrives or the read timeout elapses.
    ///
    /// The terminator is included when it was seen. An empty vector means
    /// nothing arrived in time.
    pub fn read_until(&mut self, terminator: u8) -> Result<Vec<u8>, CounterError> {
        let deadline = Instant::now() + self.config.read_timeout;
        let mut frame = Vec::new();
        let mut byte = [0u8; 1];

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }
            let timeout_ms = u32::try_from(remaining.as_millis()).unwrap_or(u32::MAX).max(1);

            let read = self
                .transport
                .read(&mut byte, timeout_ms)
                .map_err(|e| CounterError::Transport(format!("{:?}", e)))?;
            if read == 0 {
                break;
            }

            frame.push(byte[0]);
            if byte[0] == terminator {
                break;
            }
        }

        Ok(frame)
    }

    /// Run one read-parse-display cycle.
    ///
    /// Returns `Ok(None)` and leaves `sink` alone when nothing was received.
    /// A frame that cannot be parsed is an error; the sink is not touched.
    pub fn tick<S: DisplaySink + ?Sized>(&mut self, sink: &mut S) -> Result<Option<DisplayText>, CounterError> {
        let frame = self.read_until(self.config.terminator)?;
        if frame.is_empty() {
            trace!("No frame before timeout");
            return Ok(None);
        }
        debug!("Frame: {}", escape_bytes(&frame));

        let text = parse_frame(&frame)?.display_text(self.config.scale)?;
        sink.set_text(text.as_str());
        Ok(Some(text))
    }
}

/// Parse a raw frame such as `b"16.67 Hz"` into its numeric reading.
///
/// Surrounding ASCII whitespace is trimmed, then the terminator and the marker
/// character before it are dropped, then the rest is trimmed again and
/// parsed as a decimal number.
pub fn parse_frame(frame: &[u8]) -> Result<Measurement, CounterError> {
    let text = std::str::from_utf8(frame)
        .map_err(|e| CounterError::Decode(format!("{} in \"{}\"", e, escape_bytes(frame))))?
        .trim_matches(|c: char| c.is_ascii_whitespace());

    let cut = text.char_indices().rev().nth(1).map_or(0, |(i, _)| i);
    let payload = text[..cut].trim();

    payload
        .parse::<f64>()
        .map(Measurement::new)
        .map_err(|e| CounterError::Parse(format!("{:?}: {}", payload, e)))
}
