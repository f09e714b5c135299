use bevy::prelude::*;

use super::{GrantFlight, Locomotion, Player};

pub(super) fn apply_grant_flight(
    mut messages: MessageReader<GrantFlight>,
    mut player: Single<&mut Locomotion, With<Player>>,
) {
    for _ in messages.read() {
        player.0.grant_flight();
    }
}

/// Frame pass plus however many fixed ticks this frame's time covers.
pub(super) fn advance(time: Res<Time>, mut player: Single<&mut Locomotion, With<Player>>) {
    let ticks = player.0.advance(time.delta_secs());
    if ticks > 1 {
        debug!("caught up {ticks} ticks in one frame");
    }
}

/// Body follows the mover's capsule centre and the controller's yaw.
pub(super) fn sync_transform(player: Single<(&Locomotion, &mut Transform), With<Player>>) {
    let (locomotion, mut tf) = player.into_inner();
    let controller = &locomotion.0;

    let p = controller.mover().position();
    tf.translation = Vec3::new(p.x, p.y, p.z);
    tf.rotation = Quat::from_rotation_y(-controller.orientation().yaw_deg().to_radians());
}
