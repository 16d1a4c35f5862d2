//! Dark clock face driven by a time source running ten times faster than
//! the wall clock, starting from twelve.

use std::time::Instant;

use timepiece::{Clock, ClockConfig, Color, TimeSnapshot, TimeSource};

struct FastTimeSource {
    start: Instant,
}

impl TimeSource for FastTimeSource {
    fn now(&self) -> TimeSnapshot {
        let fast_seconds = self.start.elapsed().as_millis() as u64 / 100;
        TimeSnapshot {
            hour: ((fast_seconds / 3600) % 12) as u32,
            minute: ((fast_seconds / 60) % 60) as u32,
            second: (fast_seconds % 60) as u32,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = ClockConfig::builder()
        .title("Fast clock".to_string())
        .background(Color::new(30, 30, 30))
        .dot_dim(Color::new(90, 90, 90))
        .tick_interval_ms(100)
        .show_readout(true)
        .build();

    Clock::with_source(
        config,
        FastTimeSource {
            start: Instant::now(),
        },
    )
    .show()
}
