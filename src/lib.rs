//! Frequency counter display: reads readings from a serial device and shows them as RPM.
//!
//! The device sends ASCII frames such as `16.67 Hz`, each ending in the byte `z`.
//! Every tick reads one frame, scales the reading by 60 and writes `"<n> rpm"`
//! to a [`DisplaySink`].
//!
//! # Features
//!
//! - `serial` - Serial port transport for desktop using serialport crate
//! - `gui` - eframe window that drives the tick loop
//!
//! # Example
//!
//! ```ignore
//! use freq_counter::{CounterConfig, FrequencyCounter, SerialTransport};
//!
//! let config = CounterConfig::default();
//! let transport = SerialTransport::new(&config.port_name, config.baud_rate, config.read_timeout)?;
//! let mut counter = FrequencyCounter::new(transport, config)?;
//!
//! let mut label = String::new();
//! if let Some(text) = counter.tick(&mut label)? {
//!     println!("{}", text);
//! }
//! ```

mod config;
mod counter;
mod display;
mod schedule;
mod transport;
mod types;

pub mod logging;

#[cfg(feature = "serial")]
mod serial;

#[cfg(feature = "gui")]
pub mod gui;

// Re-exports
pub use config::{CounterConfig, DisplayConfig};
pub use counter::{parse_frame, FrequencyCounter};
pub use display::DisplaySink;
pub use schedule::Ticker;
pub use transport::CounterTransport;
pub use types::{CounterError, DisplayText, Measurement};

#[cfg(feature = "serial")]
pub use serial::SerialTransport;
