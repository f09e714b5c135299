use bevy::prelude::*;
use leafwing_input_manager::prelude::*;

#[derive(Reflect, Actionlike, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// W/S, +1 forward.
    #[actionlike(Axis)]
    Forward,
    /// A/D, +1 right.
    #[actionlike(Axis)]
    Strafe,
    /// Raw mouse motion in pixels; scaled when latched for the controller.
    #[actionlike(DualAxis)]
    Look,
    Jump,
    Descend,
}

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(InputManagerPlugin::<InputAction>::default());

    app.register_type::<InputAction>();

    let mut input_map = InputMap::<InputAction>::default();
    input_map.insert_axis(InputAction::Forward, VirtualAxis::ws());
    input_map.insert_axis(InputAction::Strafe, VirtualAxis::ad());
    input_map.insert_dual_axis(InputAction::Look, MouseMove::default());
    input_map.insert(InputAction::Jump, KeyCode::Space);
    input_map.insert(InputAction::Descend, KeyCode::ShiftLeft);
    app.insert_resource(input_map);
    app.insert_resource(ActionState::<InputAction>::default());
}
