use chrono::{DateTime, Local};

/// Source of "now" for the `date` command.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Wall clock. On wasm32 chrono reads the browser's `Date`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock stuck at one instant, for deterministic output.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}
