//! Millisecond clock abstraction.
//!
//! [`SystemClock`] reads the wall clock through `web-time` so it also works
//! on WASM. [`ManualClock`] is advanced by hand for deterministic hosts and
//! tests.

use std::cell::Cell;
use std::rc::Rc;

use web_time::Instant;

/// Millisecond time source for pointer samples and momentum ticks.
pub trait Clock {
    /// Milliseconds since an arbitrary, fixed origin. Never decreases.
    fn now_ms(&self) -> u64;
}

/// Wall clock measured from its own construction.
pub struct SystemClock {
    /// Origin all readings are relative to
    origin: Instant,
}

impl SystemClock {
    /// Create a clock whose origin is now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Hand-advanced clock for deterministic hosts and tests.
///
/// Clones share the same reading, so a test can keep one handle while the
/// controller owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    /// Clock starting at `start_ms`.
    #[must_use]
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ms)),
        }
    }

    /// Jump to an absolute reading. Earlier readings are ignored.
    pub fn set(&self, ms: u64) {
        self.now.set(self.now.get().max(ms));
    }

    /// Move forward by `ms`.
    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get().saturating_add(ms));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}
