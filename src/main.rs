use anyhow::Result;
use timepiece::{Clock, ClockConfig};

fn main() -> Result<()> {
    env_logger::init();

    let config = ClockConfig::builder().show_readout(true).build();
    Clock::new(config).show()
}
