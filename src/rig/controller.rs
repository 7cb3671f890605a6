use glam::{Quat, Vec2, Vec3};

use super::core::{Cadence, CameraFrame, Pose, TickInput};
use super::damper;
use crate::error::RigError;
use crate::options::{FreeLookPolicy, RigOptions};

/// Mouse-aim rig for aircraft control.
///
/// Owns two persistent orientations and an anchor position:
///
/// - the **aim** orientation accumulates mouse motion in world space,
/// - the **camera** orientation chases the aim direction through an
///   exponential damper,
/// - the **anchor** position follows the aircraft on the configured
///   cadence.
///
/// The host calls [`tick`](Self::tick) once per displayed frame with
/// [`Cadence::Variable`] and once per simulation step with
/// [`Cadence::Fixed`]; which cadence moves the anchor is selected by
/// [`RigOptions::follower_cadence`]. All other state advances on variable
/// ticks only.
///
/// Per-tick failures are local and silent: a degenerate input skips that
/// sub-update for the tick instead of propagating an error out of the
/// host's frame loop.
#[derive(Debug, Clone)]
pub struct MouseAimRig {
    options: RigOptions,
    /// World-space aim orientation accumulated from mouse motion.
    aim: Quat,
    /// Damped camera orientation chasing the aim direction.
    camera: Quat,
    /// Rig anchor position, kept coincident with the aircraft.
    anchor: Vec3,
    /// Aim orientation captured when the free-look modifier went down
    /// (snap-back policy only).
    held_aim: Option<Quat>,
}

impl MouseAimRig {
    /// Create a rig anchored at the aircraft's initial pose.
    ///
    /// Both orientations start at the aircraft's orientation.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::Options`] if `options` fails validation.
    pub fn new(options: RigOptions, aircraft: &Pose) -> Result<Self, RigError> {
        options.validate()?;
        Ok(Self {
            options,
            aim: aircraft.orientation.normalize(),
            camera: aircraft.orientation.normalize(),
            anchor: aircraft.position,
            held_aim: None,
        })
    }

    /// Advance the rig by one tick.
    ///
    /// `cadence` identifies which kind of tick the host is advancing. The
    /// position follower runs when it matches the configured follower
    /// cadence; aim accumulation and camera damping run on variable ticks
    /// only. Negative `dt` is clamped to zero (no-op damp step).
    pub fn tick(&mut self, input: &TickInput, dt: f32, cadence: Cadence) {
        if cadence == self.options.follower_cadence {
            self.follow_aircraft(&input.aircraft);
        }
        if cadence == Cadence::Variable {
            self.update_free_look(input.free_look);
            self.accumulate_aim(input.mouse_delta, &input.camera, input.free_look);
            self.damp_camera(input.aircraft.position, dt);
        }
    }

    /// World point the aircraft body is physically pointed at, projected
    /// to the aim distance.
    #[must_use]
    pub fn boresight_pos(&self, aircraft: &Pose) -> Vec3 {
        aircraft.position + aircraft.forward() * self.options.aim_distance
    }

    /// World point the mouse currently designates as the desired flight
    /// target.
    ///
    /// The aim point's position is the aircraft's position at read time;
    /// only its orientation is stored, so the point tracks (rather than
    /// teleports after) a moving aircraft.
    #[must_use]
    pub fn mouse_aim_pos(&self, aircraft_position: Vec3) -> Vec3 {
        aircraft_position + self.aim_forward() * self.options.aim_distance
    }

    /// Current aim orientation.
    #[must_use]
    pub fn aim_orientation(&self) -> Quat {
        self.aim
    }

    /// World-space aim forward axis.
    #[must_use]
    pub fn aim_forward(&self) -> Vec3 {
        self.aim * Vec3::Z
    }

    /// Damped camera orientation.
    #[must_use]
    pub fn camera_orientation(&self) -> Quat {
        self.camera
    }

    /// World-space camera up axis.
    #[must_use]
    pub fn camera_up(&self) -> Vec3 {
        self.camera * Vec3::Y
    }

    /// Rotation axes of a camera rigidly attached to the rig.
    ///
    /// Hosts whose camera is parented to the rig can feed this straight
    /// back into [`TickInput::camera`] on the next tick.
    #[must_use]
    pub fn camera_frame(&self) -> CameraFrame {
        CameraFrame {
            right: self.camera * Vec3::X,
            up: self.camera_up(),
        }
    }

    /// Rig anchor position (follows the aircraft).
    #[must_use]
    pub fn anchor(&self) -> Vec3 {
        self.anchor
    }

    /// The rig's immutable configuration.
    #[must_use]
    pub fn options(&self) -> &RigOptions {
        &self.options
    }

    /// Snap the aim orientation back onto the aircraft's orientation.
    ///
    /// The camera is untouched and converges through the damper as usual.
    pub fn recenter(&mut self, aircraft: &Pose) {
        if !aircraft.is_valid() {
            log::debug!("skipping recenter: invalid aircraft pose");
            return;
        }
        self.aim = aircraft.orientation.normalize();
        self.held_aim = None;
    }

    /// Track the free-look modifier edge for the snap-back policy.
    fn update_free_look(&mut self, held: bool) {
        match self.options.free_look {
            FreeLookPolicy::SnapBack => {
                if held {
                    if self.held_aim.is_none() {
                        self.held_aim = Some(self.aim);
                    }
                } else if let Some(aim) = self.held_aim.take() {
                    self.aim = aim;
                }
            }
            FreeLookPolicy::Suspend | FreeLookPolicy::Disabled => {
                self.held_aim = None;
            }
        }
    }

    /// Fold one tick of mouse motion into the aim orientation.
    ///
    /// Pitch is applied before yaw, both about the same pre-rotation
    /// camera axes and composed in world space; swapping the order or
    /// re-deriving axes mid-step drifts visibly.
    fn accumulate_aim(&mut self, delta: Vec2, camera: &CameraFrame, free_look: bool) {
        if free_look && self.options.free_look == FreeLookPolicy::Suspend {
            return;
        }
        if delta == Vec2::ZERO || self.options.mouse_sensitivity == 0.0 {
            return;
        }
        if !delta.is_finite() || !camera.is_valid() {
            log::debug!("skipping aim update: non-finite mouse delta or camera frame");
            return;
        }

        let sensitivity = self.options.mouse_sensitivity;
        let pitch = Quat::from_axis_angle(camera.right, (-delta.y * sensitivity).to_radians());
        let yaw = Quat::from_axis_angle(camera.up, (delta.x * sensitivity).to_radians());
        self.aim = (yaw * pitch * self.aim).normalize();
    }

    /// Damp the camera orientation toward the current aim direction.
    fn damp_camera(&mut self, aircraft_position: Vec3, dt: f32) {
        if !aircraft_position.is_finite() {
            log::debug!("skipping camera damp: non-finite aircraft position");
            return;
        }
        let aim_forward = self.aim_forward();
        let look = self.mouse_aim_pos(aircraft_position) - self.anchor;
        let up = damper::reference_up(aim_forward, self.camera_up());
        let Some(target) = damper::look_rotation(look, up) else {
            log::debug!("skipping camera damp: degenerate look direction");
            return;
        };
        let t = damper::blend_factor(self.options.camera_smoothing_rate, dt);
        self.camera = self.camera.slerp(target, t).normalize();
    }

    /// Pin the anchor to the aircraft. No smoothing.
    fn follow_aircraft(&mut self, aircraft: &Pose) {
        if !aircraft.position.is_finite() {
            log::debug!("skipping position follow: non-finite aircraft position");
            return;
        }
        self.anchor = aircraft.position;
    }
}
