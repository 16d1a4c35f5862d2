use chrono::{Local, Timelike};

/// One reading of the wall clock on a 12-hour dial.
///
/// `hour` is already reduced to 0..=11; noon and midnight are both 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSnapshot {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

/// Where the clock gets its time from. The production source reads the
/// host's local wall clock; tests substitute a fixed one.
pub trait TimeSource: Send + Sync {
    fn now(&self) -> TimeSnapshot;
}

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> TimeSnapshot {
        let now = Local::now();
        TimeSnapshot {
            hour: now.hour() % 12,
            minute: now.minute(),
            second: now.second(),
        }
    }
}
