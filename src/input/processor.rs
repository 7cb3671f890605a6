//! Folds raw input events into per-tick samples.
//!
//! Events arrive at whatever rate the host's windowing layer delivers
//! them; the rig consumes exactly one sample per variable-rate tick. The
//! processor owns all transient input state (pending motion, modifier
//! state, one-shot requests) and sits between raw events and the rig's
//! [`tick`](crate::rig::MouseAimRig::tick).

use glam::Vec2;

use super::event::InputEvent;

/// Everything the input layer hands the host for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickSample {
    /// Accumulated mouse motion since the previous sample, device units.
    pub mouse_delta: Vec2,
    /// Whether the free-look modifier is currently held.
    pub free_look: bool,
    /// Whether an aim recenter was requested since the previous sample.
    pub recenter: bool,
}

/// Accumulates input events between ticks.
///
/// [`sample`](Self::sample) drains the accumulated motion and one-shot
/// requests so nothing is counted twice; the modifier state persists
/// until the matching release event.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputProcessor {
    pending_delta: Vec2,
    free_look: bool,
    recenter_requested: bool,
}

impl InputProcessor {
    /// Create an idle processor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the pending sample.
    ///
    /// Non-finite motion is dropped rather than poisoning the pending
    /// delta.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::MouseDelta { dx, dy } => {
                if dx.is_finite() && dy.is_finite() {
                    self.pending_delta += Vec2::new(dx, dy);
                }
            }
            InputEvent::FreeLook { held } => self.free_look = held,
            InputEvent::Recenter => self.recenter_requested = true,
        }
    }

    /// Whether the free-look modifier is currently held.
    #[must_use]
    pub fn free_look(&self) -> bool {
        self.free_look
    }

    /// Drain the pending events into a per-tick sample.
    pub fn sample(&mut self) -> TickSample {
        let sample = TickSample {
            mouse_delta: self.pending_delta,
            free_look: self.free_look,
            recenter: self.recenter_requested,
        };
        self.pending_delta = Vec2::ZERO;
        self.recenter_requested = false;
        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn motion_accumulates_across_events() {
        let mut processor = InputProcessor::new();
        processor.handle_event(InputEvent::MouseDelta { dx: 2.0, dy: 1.0 });
        processor.handle_event(InputEvent::MouseDelta { dx: -0.5, dy: 3.0 });
        let sample = processor.sample();
        assert_eq!(sample.mouse_delta, Vec2::new(1.5, 4.0));
    }

    #[test]
    fn sample_drains_motion_but_keeps_modifier() {
        let mut processor = InputProcessor::new();
        processor.handle_event(InputEvent::MouseDelta { dx: 5.0, dy: 0.0 });
        processor.handle_event(InputEvent::FreeLook { held: true });

        let first = processor.sample();
        assert_eq!(first.mouse_delta, Vec2::new(5.0, 0.0));
        assert!(first.free_look);

        let second = processor.sample();
        assert_eq!(second.mouse_delta, Vec2::ZERO);
        assert!(second.free_look, "modifier persists until release");
    }

    #[test]
    fn recenter_is_one_shot() {
        let mut processor = InputProcessor::new();
        processor.handle_event(InputEvent::Recenter);
        assert!(processor.sample().recenter);
        assert!(!processor.sample().recenter);
    }

    #[test]
    fn non_finite_motion_is_dropped() {
        let mut processor = InputProcessor::new();
        processor.handle_event(InputEvent::MouseDelta {
            dx: f32::NAN,
            dy: 1.0,
        });
        processor.handle_event(InputEvent::MouseDelta { dx: 1.0, dy: 2.0 });
        assert_eq!(processor.sample().mouse_delta, Vec2::new(1.0, 2.0));
    }
}
