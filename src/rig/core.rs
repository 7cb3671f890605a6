use glam::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// World-space pose: position plus unit orientation.
///
/// Axis convention throughout the crate: local +Z is forward, +Y is up,
/// +X is right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// World-space position.
    pub position: Vec3,
    /// World-space orientation (unit quaternion).
    pub orientation: Quat,
}

impl Pose {
    /// Pose at the origin with identity orientation.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        orientation: Quat::IDENTITY,
    };

    /// Create a pose from position and orientation.
    #[must_use]
    pub const fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// World-space forward axis (local +Z).
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::Z
    }

    /// World-space right axis (local +X).
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::X
    }

    /// World-space up axis (local +Y).
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// Whether the pose is usable: finite position and a finite,
    /// near-unit orientation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.position.is_finite()
            && self.orientation.is_finite()
            && (self.orientation.length_squared() - 1.0).abs() < 1e-3
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// The camera's world-space rotation axes.
///
/// Used only to express mouse motion in world space; the rig never writes
/// the camera pose it came from. Re-deriving these from the live camera
/// every tick is what makes mouse motion screen-relative regardless of the
/// current aim orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFrame {
    /// Camera right axis, unit length.
    pub right: Vec3,
    /// Camera up axis, unit length.
    pub up: Vec3,
}

impl CameraFrame {
    /// The world-aligned frame (right = +X, up = +Y).
    pub const WORLD: Self = Self {
        right: Vec3::X,
        up: Vec3::Y,
    };

    /// Derive the frame from a camera pose.
    #[must_use]
    pub fn from_pose(pose: &Pose) -> Self {
        Self {
            right: pose.right(),
            up: pose.up(),
        }
    }

    /// Whether both axes are finite and near unit length.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.right.is_finite()
            && self.up.is_finite()
            && (self.right.length_squared() - 1.0).abs() < 1e-3
            && (self.up.length_squared() - 1.0).abs() < 1e-3
    }
}

impl Default for CameraFrame {
    fn default() -> Self {
        Self::WORLD
    }
}

/// Which kind of tick the host is advancing.
///
/// Variable ticks run once per displayed frame; fixed ticks run once per
/// simulation step. The position follower runs on whichever cadence the
/// options select (it must match the cadence the external aircraft
/// simulation moves the aircraft on, or the anchor lags the aircraft by a
/// tick); aim accumulation and camera damping run on variable ticks only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Cadence {
    /// Once per displayed frame, with a variable elapsed time.
    #[default]
    Variable,
    /// Once per fixed-duration simulation step.
    Fixed,
}

/// Everything the rig consumes on one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickInput {
    /// Aircraft pose as advanced by the external flight simulation.
    pub aircraft: Pose,
    /// Camera axes for expressing mouse motion in world space.
    pub camera: CameraFrame,
    /// Relative mouse motion since the previous tick, in device units
    /// (positive x = right, positive y = up).
    pub mouse_delta: Vec2,
    /// Whether the free-look modifier is held.
    pub free_look: bool,
}

impl TickInput {
    /// A tick with no player input.
    #[must_use]
    pub const fn steady(aircraft: Pose, camera: CameraFrame) -> Self {
        Self {
            aircraft,
            camera,
            mouse_delta: Vec2::ZERO,
            free_look: false,
        }
    }
}
