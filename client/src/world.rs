//! Test level: static geometry, lights and the wings pickup.
//!
//! The same `StaticCollider` list builds the Rapier query world the player collides with
//! and the meshes that are drawn, so what you see is what you stand on.

use std::{f32::consts::FRAC_PI_8, sync::Arc};

use bevy::prelude::*;
use locomotion::{CollisionWorld, StaticCollider, StaticShape};
use nalgebra::{UnitQuaternion, Vector3, vector};

use crate::player::{GrantFlight, Player, PlayerSystems};

/// Visual size of the (infinite) ground half-space.
const GROUND_SIZE: f32 = 80.0;

const WINGS_POSITION: Vec3 = Vec3::new(0.0, 1.0, -8.0);
const WINGS_PICKUP_RADIUS: f32 = 1.2;
const WINGS_SPIN_SPEED: f32 = 1.5;

/// Shared collision world for every mover in the level.
#[derive(Resource, Clone)]
pub struct LevelCollision(pub Arc<CollisionWorld>);

#[derive(Resource)]
struct LevelStatics(Vec<StaticCollider>);

#[derive(Component)]
struct WingsPickup;

pub(super) fn plugin(app: &mut App) {
    let statics = level_statics();
    // Built here rather than at Startup so the player's spawn system can rely on it.
    app.insert_resource(LevelCollision(Arc::new(CollisionWorld::build(
        statics.clone(),
    ))));
    app.insert_resource(LevelStatics(statics));

    app.add_systems(Startup, (spawn_level, spawn_wings));
    app.add_systems(
        Update,
        (spin_wings, collect_wings.after(PlayerSystems)),
    );
}

fn level_statics() -> Vec<StaticCollider> {
    vec![
        StaticCollider::at(
            1,
            vector![0.0, 0.0, 0.0],
            StaticShape::Plane {
                offset_along_normal: 0.0,
            },
        ),
        // Low enough for autostep.
        StaticCollider::at(
            2,
            vector![3.0, 0.125, -3.0],
            StaticShape::Cuboid {
                half_extents: vector![1.0, 0.125, 1.0],
            },
        ),
        // Needs a jump.
        StaticCollider::at(
            3,
            vector![-4.0, 0.3, -5.0],
            StaticShape::Cuboid {
                half_extents: vector![1.0, 0.3, 1.0],
            },
        ),
        // Only reachable with wings.
        StaticCollider::at(
            4,
            vector![6.0, 1.5, -10.0],
            StaticShape::Cuboid {
                half_extents: vector![2.0, 1.5, 2.0],
            },
        ),
        StaticCollider {
            id: 5,
            translation: vector![-6.0, 0.5, 4.0],
            rotation: UnitQuaternion::from_axis_angle(&Vector3::x_axis(), FRAC_PI_8),
            shape: StaticShape::Cuboid {
                half_extents: vector![1.5, 0.2, 4.0],
            },
        },
        StaticCollider::at(
            6,
            vector![0.0, 4.0, -16.0],
            StaticShape::CapsuleY {
                radius: 0.8,
                half_height: 3.2,
            },
        ),
        StaticCollider::at(
            7,
            vector![8.0, 1.0, 6.0],
            StaticShape::Sphere { radius: 1.0 },
        ),
    ]
}

fn static_mesh(shape: &StaticShape) -> (Mesh, Vec3) {
    match shape {
        StaticShape::Plane {
            offset_along_normal,
        } => (
            Plane3d::default()
                .mesh()
                .size(GROUND_SIZE, GROUND_SIZE)
                .build(),
            Vec3::Y * *offset_along_normal,
        ),
        StaticShape::Cuboid { half_extents } => (
            Cuboid::new(
                half_extents.x * 2.0,
                half_extents.y * 2.0,
                half_extents.z * 2.0,
            )
            .into(),
            Vec3::ZERO,
        ),
        StaticShape::Sphere { radius } => (Sphere::new(*radius).into(), Vec3::ZERO),
        StaticShape::CapsuleY {
            radius,
            half_height,
        } => (Capsule3d::new(*radius, half_height * 2.0).into(), Vec3::ZERO),
    }
}

fn static_transform(def: &StaticCollider, local_offset: Vec3) -> Transform {
    let t = def.translation;
    let q = def.rotation;
    let rotation = Quat::from_xyzw(q.i, q.j, q.k, q.w);
    Transform {
        translation: Vec3::new(t.x, t.y, t.z) + rotation * local_offset,
        rotation,
        ..default()
    }
}

fn spawn_level(
    mut commands: Commands,
    statics: Res<LevelStatics>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let ground = materials.add(StandardMaterial {
        base_color: Color::linear_rgb(0.2, 0.3, 0.25),
        perceptual_roughness: 1.0,
        metallic: 0.0,
        ..default()
    });
    let block = materials.add(Color::srgb_u8(124, 144, 255));

    for def in &statics.0 {
        let (mesh, offset) = static_mesh(&def.shape);
        let material = match def.shape {
            StaticShape::Plane { .. } => ground.clone(),
            _ => block.clone(),
        };
        commands.spawn((
            Name::new(format!("Static {}", def.id)),
            Mesh3d(meshes.add(mesh)),
            MeshMaterial3d(material),
            static_transform(def, offset),
        ));
    }

    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 10.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    info!("level spawned with {} statics", statics.0.len());
}

fn spawn_wings(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Name::new("Wings"),
        WingsPickup,
        Mesh3d(meshes.add(Cuboid::new(0.8, 0.1, 0.3))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(1.0, 0.85, 0.3),
            emissive: LinearRgba::rgb(0.8, 0.6, 0.1),
            ..default()
        })),
        Transform::from_translation(WINGS_POSITION),
    ));
}

fn spin_wings(mut wings: Query<&mut Transform, With<WingsPickup>>, time: Res<Time>) {
    for mut tf in &mut wings {
        tf.rotate_y(WINGS_SPIN_SPEED * time.delta_secs());
    }
}

fn collect_wings(
    mut commands: Commands,
    wings: Query<(Entity, &Transform), With<WingsPickup>>,
    player: Single<&Transform, (With<Player>, Without<WingsPickup>)>,
    mut grant: MessageWriter<GrantFlight>,
) {
    for (entity, tf) in &wings {
        if tf.translation.distance(player.translation) <= WINGS_PICKUP_RADIUS {
            commands.entity(entity).despawn();
            grant.write(GrantFlight);
            info!("picked up wings");
        }
    }
}
