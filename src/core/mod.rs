//! Core abstractions for taskline.
//!
//! This module provides the clock and calendar helpers the parser builds on.

mod clock;
pub mod datetime;

pub use clock::{Clock, FixedClock, SystemClock};

#[cfg(test)]
pub use clock::MockClock;
