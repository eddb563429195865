//! Host-side test doubles
//!
//! Pins and clock backed by `Cell`s so a test can keep a handle on the
//! level/time while the component under test owns the pin.

use core::cell::Cell;

use crate::clock::Clock;
use crate::gpio::{InputPin, Pull};

/// Input pin reading a shared level
pub struct MockPin<'a> {
    level: &'a Cell<bool>,
    pull: Pull,
}

impl<'a> MockPin<'a> {
    /// Create a pin that reads `level`
    pub fn new(level: &'a Cell<bool>) -> Self {
        Self {
            level,
            pull: Pull::None,
        }
    }

    /// Last bias requested through [`InputPin::set_pull`]
    pub fn pull(&self) -> Pull {
        self.pull
    }
}

impl InputPin for MockPin<'_> {
    fn set_pull(&mut self, pull: Pull) {
        self.pull = pull;
    }

    fn is_high(&self) -> bool {
        self.level.get()
    }
}

/// Manually advanced clock
#[derive(Debug, Default)]
pub struct MockClock {
    now: Cell<u64>,
}

impl MockClock {
    /// Create a clock starting at `start_ms`
    pub const fn new(start_ms: u64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    /// Jump to an absolute time
    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }

    /// Move time forward
    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}
