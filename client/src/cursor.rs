use bevy::{
    prelude::*,
    window::{CursorGrabMode, CursorOptions, PrimaryWindow, WindowFocused},
};

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, grab_on_startup);

    // Escape hands the mouse back; clicking or refocusing takes it again.
    app.add_systems(
        Update,
        (release_on_escape, grab_on_click, grab_on_focus),
    );
}

/// Mouse look only counts while the cursor is captured.
pub fn is_grabbed(cursor: &CursorOptions) -> bool {
    matches!(
        cursor.grab_mode,
        CursorGrabMode::Locked | CursorGrabMode::Confined
    )
}

fn set_grab(cursor: &mut CursorOptions, grabbed: bool) {
    if grabbed {
        // Browsers refuse `Locked`.
        #[cfg(not(target_family = "wasm"))]
        {
            cursor.grab_mode = CursorGrabMode::Locked;
        }
        #[cfg(target_family = "wasm")]
        {
            cursor.grab_mode = CursorGrabMode::Confined;
        }
        cursor.visible = false;
    } else {
        cursor.grab_mode = CursorGrabMode::None;
        cursor.visible = true;
    }
}

fn grab_on_startup(mut cursor: Single<&mut CursorOptions, With<PrimaryWindow>>) {
    set_grab(&mut cursor, true);
}

fn release_on_escape(
    keys: Res<ButtonInput<KeyCode>>,
    mut cursor: Single<&mut CursorOptions, With<PrimaryWindow>>,
) {
    if keys.just_pressed(KeyCode::Escape) && is_grabbed(&cursor) {
        set_grab(&mut cursor, false);
    }
}

fn grab_on_click(
    mouse: Res<ButtonInput<MouseButton>>,
    mut cursor: Single<&mut CursorOptions, With<PrimaryWindow>>,
) {
    if mouse.just_pressed(MouseButton::Left) && !is_grabbed(&cursor) {
        set_grab(&mut cursor, true);
    }
}

fn grab_on_focus(
    mut messages: MessageReader<WindowFocused>,
    mut cursor: Single<&mut CursorOptions, With<PrimaryWindow>>,
) {
    for message in messages.read() {
        if message.focused {
            set_grab(&mut cursor, true);
        }
    }
}
