use freq_counter::{gui, logging, CounterConfig, DisplayConfig, FrequencyCounter, SerialTransport};
use log::{info, LevelFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init(LevelFilter::Info)?;

    let config = CounterConfig::default();
    info!("Opening {} at {} baud", config.port_name, config.baud_rate);
    let transport = SerialTransport::new(&config.port_name, config.baud_rate, config.read_timeout)?;
    let counter = FrequencyCounter::new(transport, config)?;

    gui::run(counter, DisplayConfig::default())
}
