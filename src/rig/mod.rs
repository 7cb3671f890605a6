//! Mouse-aim rig: aim accumulation, camera damping, and position follow.
//!
//! The rig keeps a free-floating aim orientation driven by raw mouse
//! motion and a camera orientation that chases it through an exponential
//! damper, anchored to an externally simulated aircraft.

/// The rig state machine advanced once per tick.
pub mod controller;
/// Core value types: poses, camera frames, cadences, tick inputs.
pub mod core;
/// Orientation damping and look-rotation construction.
pub mod damper;

pub use controller::MouseAimRig;
pub use core::{Cadence, CameraFrame, Pose, TickInput};
