//! Shared utilities for the interaction core.
//!
//! A millisecond clock abstraction and the single-owner repeating timer
//! that paces the momentum loop.

pub mod clock;
pub mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use timer::RepeatingTimer;
