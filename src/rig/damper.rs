//! Orientation damping toward a target look direction.
//!
//! The damper is a spherical interpolation whose fraction follows an
//! exponential decay law, so the convergence endpoint over a fixed total
//! elapsed time does not depend on how many ticks sampled it.

use glam::{Mat3, Quat, Vec3};

/// Vertical-component magnitude of the aim forward vector above which the
/// look-at construction switches from world up to the rig's own up vector.
///
/// Beyond this point (roughly 26 degrees from straight up or down) the
/// look direction runs nearly parallel to world up and the cross-product
/// basis degenerates.
pub const POLE_GUARD_THRESHOLD: f32 = 0.9;

/// Fraction of the remaining rotation to cover for exponential
/// convergence at `rate` over an elapsed `dt` (both in seconds-based
/// units).
///
/// Negative `dt` is clamped to zero, making the step a no-op. Two chained
/// steps of `dt1` and `dt2` land exactly where one step of `dt1 + dt2`
/// would.
#[must_use]
pub fn blend_factor(rate: f32, dt: f32) -> f32 {
    1.0 - (-rate * dt.max(0.0)).exp()
}

/// Rotation whose forward (+Z) axis points along `forward` and whose up
/// (+Y) axis lies as close as possible to `up`.
///
/// Returns `None` when the basis collapses: zero-length or non-finite
/// `forward`, or `forward` parallel to `up`.
#[must_use]
pub fn look_rotation(forward: Vec3, up: Vec3) -> Option<Quat> {
    let f = forward.try_normalize()?;
    let r = up.cross(f).try_normalize()?;
    let u = f.cross(r);
    Some(Quat::from_mat3(&Mat3::from_cols(r, u, f)))
}

/// Reference up vector for the look-at construction.
///
/// Near the poles the rig's own up vector takes over from world up; see
/// [`POLE_GUARD_THRESHOLD`].
#[must_use]
pub fn reference_up(aim_forward: Vec3, rig_up: Vec3) -> Vec3 {
    if aim_forward.y.abs() > POLE_GUARD_THRESHOLD {
        rig_up
    } else {
        Vec3::Y
    }
}
