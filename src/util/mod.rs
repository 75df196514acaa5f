//! Shared utilities.
//!
//! Fixed-period tick pacing for the transition engine.

/// Wall-clock to fixed-period tick conversion.
pub mod tick_clock;

pub use tick_clock::TickClock;
