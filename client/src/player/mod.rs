use bevy::prelude::*;
use locomotion::{
    InputSnapshot, KccSettings, LocomotionController, Orientation, RapierMover, Vec3 as NaVec3,
};

use crate::{camera, world::LevelCollision};

mod input;
mod simulate;

/// Fixed simulation tick (50 Hz).
pub const FIXED_TICK_S: f32 = 1.0 / 50.0;

/// Capsule centre at spawn. Slightly above the floor so the first ticks settle it.
const SPAWN_POSITION: Vec3 = Vec3::new(0.0, 1.2, 0.0);

pub(super) fn plugin(app: &mut App) {
    app.add_message::<GrantFlight>();

    app.add_systems(Startup, spawn_player);

    // Input is latched before the controller runs; the transform is written after, so the
    // rendered frame always shows the state the last tick produced.
    app.add_systems(
        Update,
        (
            input::latch_input,
            simulate::apply_grant_flight,
            simulate::advance,
            simulate::sync_transform,
        )
            .chain()
            .in_set(PlayerSystems),
    );
}

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerSystems;

/// Unlocks flight on the local player. Written by the wings pickup.
#[derive(Message, Debug, Clone, Copy)]
pub struct GrantFlight;

#[derive(Component)]
pub struct Player;

/// The locomotion controller driving this entity.
#[derive(Component)]
pub struct Locomotion(pub LocomotionController<RapierMover, InputSnapshot>);

fn spawn_player(mut commands: Commands, world: Res<LevelCollision>) -> Result {
    let spawn = NaVec3::new(SPAWN_POSITION.x, SPAWN_POSITION.y, SPAWN_POSITION.z);
    let mover = RapierMover::new(
        world.0.clone(),
        &KccSettings::default(),
        spawn,
        FIXED_TICK_S,
    )?;

    let controller = LocomotionController::builder()
        .mover(mover)
        .input(InputSnapshot::default())
        .tick_seconds(FIXED_TICK_S)
        .orientation(Orientation::default())
        .build()?;

    commands.spawn((
        Name::new("Player"),
        Player,
        Locomotion(controller),
        Transform::from_translation(SPAWN_POSITION),
        Visibility::default(),
        children![camera::first_person_camera()],
    ));

    info!("player spawned at {SPAWN_POSITION}");
    Ok(())
}
