//! Debug/performance tooling for native dev builds.
//!
//! Only compiled with `dev_native` (see `main.rs`).

use bevy::diagnostic::{
    EntityCountDiagnosticsPlugin, FrameTimeDiagnosticsPlugin, SystemInformationDiagnosticsPlugin,
};
use bevy::prelude::*;
use bevy::render::diagnostic::RenderDiagnosticsPlugin;
use iyes_perf_ui::prelude::*;
use locomotion::Mover;

use crate::player::{Locomotion, Player, PlayerSystems};

pub(super) fn plugin(app: &mut App) {
    app.add_plugins((
        FrameTimeDiagnosticsPlugin::default(),
        EntityCountDiagnosticsPlugin::default(),
        SystemInformationDiagnosticsPlugin::default(),
        RenderDiagnosticsPlugin,
        PerfUiPlugin,
    ));

    app.add_systems(Startup, (spawn_perf_ui, spawn_locomotion_readout));
    app.add_systems(Update, update_locomotion_readout.after(PlayerSystems));
}

#[derive(Component)]
struct LocomotionReadout;

fn spawn_perf_ui(mut commands: Commands) {
    commands.spawn(PerfUiAllEntries::default());
}

fn spawn_locomotion_readout(mut commands: Commands) {
    commands.spawn((
        Name::new("Locomotion Readout"),
        LocomotionReadout,
        Text::new(""),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(8.0),
            left: Val::Px(8.0),
            ..default()
        },
    ));
}

fn update_locomotion_readout(
    player: Single<&Locomotion, With<Player>>,
    mut text: Single<&mut Text, With<LocomotionReadout>>,
) {
    let c = &player.0;
    let v = c.velocity();
    let o = c.orientation();
    text.0 = format!(
        "mode: {:?}\nvelocity: ({:.2}, {:.2}, {:.2})\nyaw/pitch: {:.1} / {:.1}\ngrounded: {}\ncan fly: {}",
        c.mode(),
        v.x,
        v.y,
        v.z,
        o.yaw_deg(),
        o.signed_pitch_deg(),
        c.mover().is_grounded(),
        c.can_fly(),
    );
}
