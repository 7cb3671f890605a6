/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor), which
/// folds them into the per-tick sample the rig consumes. The host's
/// windowing layer is responsible for producing them (and for mapping its
/// own y-axis convention onto "positive = up").
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Relative mouse motion in device units.
    MouseDelta {
        /// Horizontal motion (positive = right).
        dx: f32,
        /// Vertical motion (positive = up).
        dy: f32,
    },
    /// Free-look modifier pressed or released.
    FreeLook {
        /// `true` for press, `false` for release.
        held: bool,
    },
    /// Request an aim recenter onto the aircraft's orientation.
    Recenter,
}
