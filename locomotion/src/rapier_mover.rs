use std::sync::Arc;

use rapier3d::{
    control::KinematicCharacterController,
    prelude::{Capsule, QueryFilter},
};

use crate::{
    error::LocomotionResult,
    mover::Mover,
    static_world::CollisionWorld,
    settings::KccSettings,
    types::{Iso, Vec3},
};

/// [`Mover`] backed by Rapier's `KinematicCharacterController` against a static world.
///
/// Owns the capsule-centre position. The grounded flag is whatever the last move
/// reported; before the first move the character counts as airborne.
pub struct RapierMover {
    world: Arc<CollisionWorld>,
    controller: KinematicCharacterController,
    capsule: Capsule,
    position: Vec3,
    grounded: bool,
    tick_seconds: f32,
}

impl RapierMover {
    /// `tick_seconds` is forwarded to Rapier, which uses it for slope-slide handling only.
    pub fn new(
        world: Arc<CollisionWorld>,
        settings: &KccSettings,
        position: Vec3,
        tick_seconds: f32,
    ) -> LocomotionResult<Self> {
        settings.validate()?;

        Ok(Self {
            world,
            controller: settings.controller(),
            capsule: Capsule::new_y(settings.capsule_half_height, settings.capsule_radius),
            position,
            grounded: false,
            tick_seconds,
        })
    }

    /// Capsule centre in world space.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Teleport without collision (respawn, editor moves). Clears the grounded flag.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.grounded = false;
    }
}

impl Mover for RapierMover {
    fn move_with_collision(&mut self, displacement: Vec3) -> Vec3 {
        let pipeline = self.world.query_pipeline(QueryFilter::only_fixed());
        let pose = Iso::translation(self.position.x, self.position.y, self.position.z);

        let corrected = self.controller.move_shape(
            self.tick_seconds,
            &pipeline,
            &self.capsule,
            &pose,
            displacement,
            |_| {},
        );

        self.position += corrected.translation;
        self.grounded = corrected.grounded;
        corrected.translation
    }

    fn is_grounded(&self) -> bool {
        self.grounded
    }
}
