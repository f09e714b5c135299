//! Yaw/pitch bookkeeping in degrees.
//!
//! Both angles are stored normalized into `[0, 360)`. Pitch follows the usual
//! "euler x" convention of a first-person camera: small positive values look down,
//! values just below 360 look up. The allowed pitch range therefore wraps through 0:
//! `[0, MIN_TILT_ROTATION] ∪ [MAX_TILT_ROTATION, 360)`.

use nalgebra as na;

use crate::{
    constants::{MAX_TILT_ROTATION, MIN_TILT_ROTATION, ROTATION_VELOCITY_FACTOR},
    types::{Quat, Vec3},
};

/// Normalize an angle in degrees into `[0, 360)`.
#[inline]
pub fn wrap_degrees(deg: f32) -> f32 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Clamp a pitch angle to the forward viewing cone.
///
/// The input is normalized first, then:
/// - below 180 it is capped at `MIN_TILT_ROTATION` (70),
/// - at or above 180 it is raised to at least `MAX_TILT_ROTATION` (290).
///
/// A plain `min`/`max` on the raw value would be wrong around the wrap point.
#[inline]
pub fn clamp_tilt(pitch_deg: f32) -> f32 {
    let pitch = wrap_degrees(pitch_deg);
    if pitch < 180.0 {
        pitch.min(MIN_TILT_ROTATION)
    } else {
        pitch.max(MAX_TILT_ROTATION)
    }
}

/// Character facing (yaw) and camera tilt (pitch), both in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Orientation {
    yaw_deg: f32,
    pitch_deg: f32,
}

impl Orientation {
    pub fn new(yaw_deg: f32, pitch_deg: f32) -> Self {
        Self {
            yaw_deg: wrap_degrees(yaw_deg),
            pitch_deg: clamp_tilt(pitch_deg),
        }
    }

    /// Yaw in `[0, 360)`. Positive rotation turns the character to its right.
    #[inline]
    pub fn yaw_deg(&self) -> f32 {
        self.yaw_deg
    }

    /// Pitch in `[0, 70] ∪ [290, 360)`.
    #[inline]
    pub fn pitch_deg(&self) -> f32 {
        self.pitch_deg
    }

    /// Pitch mapped into `(-180, 180]`: positive looks down, negative looks up.
    #[inline]
    pub fn signed_pitch_deg(&self) -> f32 {
        if self.pitch_deg > 180.0 {
            self.pitch_deg - 360.0
        } else {
            self.pitch_deg
        }
    }

    /// Apply one frame of horizontal look input.
    pub fn rotate(&mut self, look_x: f32) {
        self.yaw_deg = wrap_degrees(self.yaw_deg + look_x * ROTATION_VELOCITY_FACTOR);
    }

    /// Apply one frame of vertical look input. Moving the look axis up (positive) tilts up.
    pub fn tilt(&mut self, look_y: f32) {
        self.pitch_deg = clamp_tilt(self.pitch_deg - look_y * ROTATION_VELOCITY_FACTOR);
    }

    /// Yaw-only rotation about +Y (right-handed, Y-up world, forward is -Z at yaw 0).
    pub fn yaw_rotation(&self) -> Quat {
        na::UnitQuaternion::from_axis_angle(&na::Vector3::y_axis(), -self.yaw_deg.to_radians())
    }

    /// Transform a vector from the character's local frame into world space.
    ///
    /// Local frame: `x` = right, `y` = up, `z` = forward. Pitch does not affect movement.
    pub fn local_to_world(&self, local: &Vec3) -> Vec3 {
        self.yaw_rotation() * Vec3::new(local.x, local.y, -local.z)
    }
}
