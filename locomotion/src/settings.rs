/*!
Kinematic character controller (KCC) settings for the Rapier-backed mover.

Notes
- Values are expressed in meters and degrees (converted to radians when the Rapier
  controller is built).
- These describe the collision volume and how it reacts to geometry. Motion tuning
  (speeds, accelerations) lives in `constants`.
*/

use rapier3d::control::{CharacterAutostep, CharacterLength, KinematicCharacterController};

use crate::error::{LocomotionError, LocomotionResult};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KccSettings {
    /// Capsule radius (meters).
    pub capsule_radius: f32,

    /// Half-length of the capsule's cylinder section (meters).
    /// Total height is `2 * (capsule_half_height + capsule_radius)`.
    pub capsule_half_height: f32,

    /// Skin width kept between the capsule and geometry (meters). Zero lets casts start in
    /// contact and jitter.
    pub offset: f32,

    /// Steepest walkable slope (degrees).
    pub max_slope_climb_deg: f32,

    /// Slopes steeper than this make the character slide down (degrees).
    pub min_slope_slide_deg: f32,

    /// Autostep maximum height (meters). `None` disables stepping.
    pub autostep_max_height: Option<f32>,

    /// Autostep minimum width (meters).
    pub autostep_min_width: f32,

    /// Slide along obstacles instead of stopping at the first contact.
    pub slide: bool,

    /// Max distance the controller snaps down to stay on the ground (meters).
    pub snap_to_ground: Option<f32>,

    /// Push-off along contact normals while sliding; raise it if the capsule snags on edges.
    pub normal_nudge_factor: f32,
}

impl Default for KccSettings {
    fn default() -> Self {
        Self {
            capsule_radius: 0.4,
            capsule_half_height: 0.5,
            offset: 0.02,
            max_slope_climb_deg: 45.0,
            min_slope_slide_deg: 30.0,
            autostep_max_height: Some(0.3),
            autostep_min_width: 0.2,
            slide: true,
            snap_to_ground: Some(0.2),
            normal_nudge_factor: 1.0e-4,
        }
    }
}

impl KccSettings {
    /// Full capsule height (meters).
    #[inline]
    pub fn capsule_height(&self) -> f32 {
        2.0 * (self.capsule_half_height + self.capsule_radius)
    }

    pub fn validate(&self) -> LocomotionResult<()> {
        let finite = [
            self.capsule_radius,
            self.capsule_half_height,
            self.offset,
            self.max_slope_climb_deg,
            self.min_slope_slide_deg,
            self.autostep_min_width,
            self.normal_nudge_factor,
        ]
        .iter()
        .chain(self.autostep_max_height.iter())
        .chain(self.snap_to_ground.iter())
        .all(|v| v.is_finite());

        if !finite {
            return Err(LocomotionError::InvalidSettings(
                "all values must be finite".into(),
            ));
        }
        if self.capsule_radius <= 0.0 || self.capsule_half_height <= 0.0 {
            return Err(LocomotionError::InvalidSettings(format!(
                "capsule dimensions must be > 0 (radius {}, half height {})",
                self.capsule_radius, self.capsule_half_height
            )));
        }
        if self.offset < 0.0 {
            return Err(LocomotionError::InvalidSettings(format!(
                "offset must be >= 0 (got {})",
                self.offset
            )));
        }

        Ok(())
    }

    /// Build the Rapier controller described by these settings.
    pub fn controller(&self) -> KinematicCharacterController {
        KinematicCharacterController {
            offset: CharacterLength::Absolute(self.offset),
            slide: self.slide,
            autostep: self.autostep_max_height.map(|max_height| CharacterAutostep {
                max_height: CharacterLength::Absolute(max_height),
                min_width: CharacterLength::Absolute(self.autostep_min_width),
                include_dynamic_bodies: false,
            }),
            max_slope_climb_angle: self.max_slope_climb_deg.to_radians(),
            min_slope_slide_angle: self.min_slope_slide_deg.to_radians(),
            snap_to_ground: self.snap_to_ground.map(CharacterLength::Absolute),
            normal_nudge_factor: self.normal_nudge_factor,
            ..KinematicCharacterController::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(KccSettings::default().validate().is_ok());
        assert!((KccSettings::default().capsule_height() - 1.8).abs() < 1.0e-6);
    }

    #[test]
    fn rejects_degenerate_capsule() {
        let s = KccSettings {
            capsule_radius: 0.0,
            ..KccSettings::default()
        };
        assert!(matches!(s.validate(), Err(LocomotionError::InvalidSettings(_))));
    }

    #[test]
    fn rejects_non_finite_values() {
        let s = KccSettings {
            snap_to_ground: Some(f32::NAN),
            ..KccSettings::default()
        };
        assert!(s.validate().is_err());
    }

    #[test]
    fn controller_mirrors_settings() {
        let s = KccSettings {
            autostep_max_height: None,
            ..KccSettings::default()
        };
        let kcc = s.controller();
        assert!(kcc.autostep.is_none());
        assert!(kcc.slide);
        assert!((kcc.max_slope_climb_angle - 45.0f32.to_radians()).abs() < 1.0e-6);
    }
}
