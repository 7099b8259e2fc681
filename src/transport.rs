/// Trait for the byte source a frequency counter reads from.
/// Implement this trait for different transports (serial port, test doubles, etc.)
pub trait CounterTransport {
    /// Error type for transport operations
    type Error: std::fmt::Debug;

    /// Read data from the transport with a timeout in milliseconds.
    /// Returns `Ok(0)` when the timeout elapses with nothing received.
    fn read(&mut self, buf: &mut [u8], timeout_ms: u32) -> Result<usize, Self::Error>;

    /// Clear the input buffer
    fn clear_input(&mut self) -> Result<(), Self::Error>;
}
