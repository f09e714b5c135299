//! Named input queries consumed by the controller.
//!
//! The controller never talks to devices. It asks an [`InputSource`] for named axes and
//! buttons once per frame and keeps the answers in an [`InputSnapshot`], which every fixed
//! tick of that frame then reuses.

/// Continuous axes, typically in `[-1, 1]`. Values outside that range are used as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Forward (+) / backward (-).
    Forward,
    /// Right (+) / left (-).
    Strafe,
    /// Look right (+) / left (-).
    MouseX,
    /// Look up (+) / down (-).
    MouseY,
}

/// Discrete buttons with edge ("just pressed") and level ("held") queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    /// Jump on the ground, enter flight in the air, ascend while flying.
    Jump,
    /// Descend while flying.
    Descend,
}

/// Source of named input values for one frame.
pub trait InputSource {
    fn axis(&self, axis: Axis) -> f32;
    fn just_pressed(&self, button: Button) -> bool;
    fn held(&self, button: Button) -> bool;
}

/// Plain latched input values.
///
/// Hosts that already poll their devices elsewhere can write one of these every frame
/// and hand it to the controller as its input source.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputSnapshot {
    pub forward: f32,
    pub strafe: f32,
    pub look_x: f32,
    pub look_y: f32,
    pub jump_pressed: bool,
    pub jump_held: bool,
    pub descend_pressed: bool,
    pub descend_held: bool,
}

impl InputSnapshot {
    /// Read every named query from `source` once.
    pub fn sample<S: InputSource + ?Sized>(source: &S) -> Self {
        Self {
            forward: source.axis(Axis::Forward),
            strafe: source.axis(Axis::Strafe),
            look_x: source.axis(Axis::MouseX),
            look_y: source.axis(Axis::MouseY),
            jump_pressed: source.just_pressed(Button::Jump),
            jump_held: source.held(Button::Jump),
            descend_pressed: source.just_pressed(Button::Descend),
            descend_held: source.held(Button::Descend),
        }
    }
}

impl InputSource for InputSnapshot {
    fn axis(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Forward => self.forward,
            Axis::Strafe => self.strafe,
            Axis::MouseX => self.look_x,
            Axis::MouseY => self.look_y,
        }
    }

    fn just_pressed(&self, button: Button) -> bool {
        match button {
            Button::Jump => self.jump_pressed,
            Button::Descend => self.descend_pressed,
        }
    }

    fn held(&self, button: Button) -> bool {
        match button {
            Button::Jump => self.jump_held,
            Button::Descend => self.descend_held,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Scripted;

    impl InputSource for Scripted {
        fn axis(&self, axis: Axis) -> f32 {
            match axis {
                Axis::Forward => 0.5,
                Axis::Strafe => -1.0,
                Axis::MouseX => 3.0,
                Axis::MouseY => -0.25,
            }
        }

        fn just_pressed(&self, button: Button) -> bool {
            button == Button::Jump
        }

        fn held(&self, button: Button) -> bool {
            button == Button::Descend
        }
    }

    #[test]
    fn sample_reads_every_named_query() {
        let snap = InputSnapshot::sample(&Scripted);
        assert_eq!(snap.forward, 0.5);
        assert_eq!(snap.strafe, -1.0);
        assert_eq!(snap.look_x, 3.0);
        assert_eq!(snap.look_y, -0.25);
        assert!(snap.jump_pressed);
        assert!(!snap.jump_held);
        assert!(!snap.descend_pressed);
        assert!(snap.descend_held);
    }

    #[test]
    fn snapshot_answers_like_its_source() {
        let snap = InputSnapshot::sample(&Scripted);
        let again = InputSnapshot::sample(&snap);
        assert_eq!(snap, again);
    }

    #[test]
    fn default_snapshot_is_neutral() {
        let snap = InputSnapshot::default();
        assert_eq!(snap.axis(Axis::Forward), 0.0);
        assert!(!snap.just_pressed(Button::Jump));
        assert!(!snap.held(Button::Descend));
    }
}
