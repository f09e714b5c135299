use bevy::{
    prelude::*,
    window::{CursorOptions, PrimaryWindow},
};
use leafwing_input_manager::prelude::ActionState;
use locomotion::InputSnapshot;

use super::{Locomotion, Player};
use crate::{cursor, input::InputAction};

/// Pixels of mouse motion to controller look units (about the range of a gamepad stick).
const MOUSE_SCALE: f32 = 0.1;

/// Copy this frame's device state into the controller's input snapshot.
pub(super) fn latch_input(
    actions: Res<ActionState<InputAction>>,
    cursor: Single<&CursorOptions, With<PrimaryWindow>>,
    mut player: Single<&mut Locomotion, With<Player>>,
) {
    // Bevy mouse deltas grow downwards; the controller wants "mouse up" positive.
    let look = if cursor::is_grabbed(&cursor) {
        let raw = actions.axis_pair(&InputAction::Look);
        Vec2::new(raw.x, -raw.y) * MOUSE_SCALE
    } else {
        Vec2::ZERO
    };

    *player.0.input_mut() = InputSnapshot {
        forward: actions.value(&InputAction::Forward),
        strafe: actions.value(&InputAction::Strafe),
        look_x: look.x,
        look_y: look.y,
        jump_pressed: actions.just_pressed(&InputAction::Jump),
        jump_held: actions.pressed(&InputAction::Jump),
        descend_pressed: actions.just_pressed(&InputAction::Descend),
        descend_held: actions.pressed(&InputAction::Descend),
    };
}
