use bevy::{core_pipeline::tonemapping::Tonemapping, prelude::*};

use crate::player::{Locomotion, Player, PlayerSystems};

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Update, follow_pitch.after(PlayerSystems));
}

/// Eye height above the capsule centre.
const EYE_OFFSET: f32 = 0.7;

#[derive(Component)]
pub struct PlayerCamera;

/// Camera bundle spawned as a child of the player body.
pub fn first_person_camera() -> impl Bundle {
    (
        Name::new("Player Camera"),
        PlayerCamera,
        Camera3d::default(),
        Tonemapping::AcesFitted,
        Transform::from_xyz(0.0, EYE_OFFSET, 0.0),
        DistanceFog {
            color: Color::srgba(0.35, 0.48, 0.66, 1.0),
            directional_light_color: Color::srgba(1.0, 0.95, 0.85, 0.5),
            directional_light_exponent: 30.0,
            falloff: FogFalloff::from_visibility_colors(
                120.0,
                Color::srgb(0.35, 0.5, 0.66),
                Color::srgb(0.8, 0.8, 0.7),
            ),
        },
    )
}

/// Positive pitch looks down, which is a negative rotation about the camera's X axis.
fn follow_pitch(
    player: Single<&Locomotion, With<Player>>,
    mut camera: Single<&mut Transform, With<PlayerCamera>>,
) {
    let pitch = player.0.orientation().signed_pitch_deg().to_radians();
    camera.rotation = Quat::from_rotation_x(-pitch);
}
