//! Input handling: platform-agnostic event types and the processor that
//! folds raw events into the per-tick samples the rig consumes.

/// Platform-agnostic input events.
pub mod event;
/// Folds raw events into per-tick samples.
pub mod processor;

pub use event::InputEvent;
pub use processor::{InputProcessor, TickSample};
