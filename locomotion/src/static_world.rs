//! Immutable level geometry for collision queries.
//!
//! Movers only shape-cast against the level, so nothing here is ever stepped. Colliders are
//! inserted in `id` order, which makes two worlds built from the same list identical.

use rapier3d::na::{Translation3, UnitQuaternion};
use rapier3d::prelude::*;

/// One static collider of the level. Meters throughout.
#[derive(Clone, Debug)]
pub struct StaticCollider {
    /// Insertion order key; must be unique within a level.
    pub id: u32,
    pub translation: Vector<f32>,
    pub rotation: UnitQuaternion<f32>,
    /// Described in the local frame of `translation`/`rotation`.
    pub shape: StaticShape,
}

impl StaticCollider {
    /// Unrotated collider at `translation`.
    pub fn at(id: u32, translation: Vector<f32>, shape: StaticShape) -> Self {
        Self {
            id,
            translation,
            rotation: UnitQuaternion::identity(),
            shape,
        }
    }

    fn pose(&self) -> Isometry<f32> {
        Isometry::from_parts(Translation3::from(self.translation), self.rotation)
    }
}

#[derive(Clone, Debug)]
pub enum StaticShape {
    /// Solid half-space below the local XZ plane, shifted up by `offset_along_normal`.
    /// Infinite, whatever size the renderer draws it at.
    Plane { offset_along_normal: f32 },
    Cuboid { half_extents: Vector<f32> },
    Sphere { radius: f32 },
    /// Capsule along the local Y axis.
    CapsuleY { radius: f32, half_height: f32 },
}

impl StaticShape {
    /// Shape in the collider's local frame; the pose goes on the parent body.
    fn collider(&self) -> Collider {
        let builder = match *self {
            StaticShape::Plane {
                offset_along_normal,
            } => ColliderBuilder::halfspace(Vector::y_axis())
                .translation(vector![0.0, offset_along_normal, 0.0]),
            StaticShape::Cuboid { half_extents } => {
                ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
            }
            StaticShape::Sphere { radius } => ColliderBuilder::ball(radius),
            StaticShape::CapsuleY {
                radius,
                half_height,
            } => ColliderBuilder::capsule_y(half_height, radius),
        };
        builder.build()
    }
}

/// Rapier sets backing scene queries against the level. Share it behind an `Arc`.
pub struct CollisionWorld {
    bodies: RigidBodySet,
    colliders: ColliderSet,
    broad_phase: BroadPhaseBvh,
    narrow_phase: NarrowPhase,
}

impl CollisionWorld {
    /// Values are not validated; NaNs in `level` end up in Rapier as-is.
    pub fn build(mut level: Vec<StaticCollider>) -> Self {
        level.sort_by_key(|c| c.id);

        let mut bodies = RigidBodySet::new();
        let mut colliders = ColliderSet::new();
        for item in &level {
            let body = bodies.insert(RigidBodyBuilder::fixed().pose(item.pose()));
            colliders.insert_with_parent(item.shape.collider(), body, &mut bodies);
        }

        // One detection-only pass fills the BVH that queries walk.
        let mut broad_phase = BroadPhaseBvh::new();
        let mut narrow_phase = NarrowPhase::new();
        CollisionPipeline::new().step(
            0.0,
            &mut broad_phase,
            &mut narrow_phase,
            &mut bodies,
            &mut colliders,
            &(),
            &(),
        );

        log::debug!("collision world ready: {} static colliders", colliders.len());

        Self {
            bodies,
            colliders,
            broad_phase,
            narrow_phase,
        }
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    /// Borrowed query view, as taken by `KinematicCharacterController::move_shape`.
    pub fn query_pipeline<'a>(&'a self, filter: QueryFilter<'a>) -> QueryPipeline<'a> {
        self.broad_phase.as_query_pipeline(
            self.narrow_phase.query_dispatcher(),
            &self.bodies,
            &self.colliders,
            filter,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ground_and_crate() -> Vec<StaticCollider> {
        vec![
            StaticCollider::at(
                7,
                vector![3.0, 0.5, 0.0],
                StaticShape::Cuboid {
                    half_extents: vector![0.5, 0.5, 0.5],
                },
            ),
            StaticCollider::at(
                1,
                vector![0.0, 0.0, 0.0],
                StaticShape::Plane {
                    offset_along_normal: 0.0,
                },
            ),
        ]
    }

    fn drop_ray(world: &CollisionWorld, from: Point<f32>) -> Option<f32> {
        let pipeline = world.query_pipeline(QueryFilter::default());
        let ray = Ray::new(from, vector![0.0, -1.0, 0.0]);
        pipeline.cast_ray(&ray, 10.0, true).map(|(_, toi)| toi)
    }

    #[test]
    fn every_collider_is_inserted() {
        let world = CollisionWorld::build(ground_and_crate());
        assert_eq!(world.len(), 2);
        assert!(!world.is_empty());
        assert!(CollisionWorld::build(Vec::new()).is_empty());
    }

    #[test]
    fn ground_is_at_zero() {
        let world = CollisionWorld::build(ground_and_crate());
        let toi = drop_ray(&world, point![0.0, 2.0, 0.0]).unwrap();
        assert!((toi - 2.0).abs() < 1.0e-4);
    }

    #[test]
    fn plane_offset_is_not_doubled_by_the_pose() {
        let world = CollisionWorld::build(vec![StaticCollider::at(
            1,
            vector![0.0, 1.0, 0.0],
            StaticShape::Plane {
                offset_along_normal: 0.5,
            },
        )]);
        let toi = drop_ray(&world, point![0.0, 5.0, 0.0]).unwrap();
        assert!((toi - 3.5).abs() < 1.0e-4, "toi {toi}");
    }

    #[test]
    fn crate_top_is_hit_first() {
        let world = CollisionWorld::build(ground_and_crate());
        let toi = drop_ray(&world, point![3.0, 5.0, 0.0]).unwrap();
        assert!((toi - 4.0).abs() < 1.0e-4);
    }
}
