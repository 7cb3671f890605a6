//! Shared utilities for hosts embedding the rig.

/// Frame timing: variable delta plus fixed-step accounting.
pub mod tick_clock;

pub use tick_clock::{FrameTicks, TickClock};
