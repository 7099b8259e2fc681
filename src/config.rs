//! Fixed settings for the serial link and the display window

use std::time::Duration;

/// Serial link and tick settings
#[derive(Debug, Clone, PartialEq)]
pub struct CounterConfig {
    pub port_name: String,
    pub baud_rate: u32,
    /// Upper bound on a single `read_until` call
    pub read_timeout: Duration,
    /// Byte ending every frame on the wire
    pub terminator: u8,
    pub tick_period: Duration,
    /// Multiplier from the device reading to RPM
    pub scale: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            port_name: "/dev/ttyACM0".into(),
            baud_rate: 115_200,
            read_timeout: Duration::from_millis(100),
            terminator: b'z',
            tick_period: Duration::from_millis(100),
            scale: 60.0,
        }
    }
}

/// Window appearance
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub font_size: f32,
    /// Inner margin in points; egui stores margins as `i8`
    pub margin: i8,
    pub background: [u8; 3],
    pub foreground: [u8; 3],
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "Frequency Counter".into(),
            width: 640.0,
            height: 80.0,
            font_size: 64.0,
            margin: 10,
            background: [0x00, 0x00, 0x00],
            foreground: [0x55, 0xFF, 0x55],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_defaults() {
        let config = CounterConfig::default();
        assert_eq!(config.port_name, "/dev/ttyACM0");
        assert_eq!(config.baud_rate, 115_200);
        assert_eq!(config.read_timeout, Duration::from_millis(100));
        assert_eq!(config.terminator, b'z');
        assert_eq!(config.scale, 60.0);
    }

    #[test]
    fn test_display_defaults() {
        let config = DisplayConfig::default();
        assert_eq!(config.title, "Frequency Counter");
        assert_eq!((config.width, config.height), (640.0, 80.0));
        assert_eq!(config.foreground, [0x55, 0xFF, 0x55]);
        assert_eq!(config.margin, 10);
    }
}
