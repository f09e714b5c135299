//! Locomotion mode state machine.
//!
//! `Jumping` means "a jump was requested on the ground and the impulse has not been
//! applied yet". `Flying` is entered by pressing jump in the air once flight is unlocked
//! and only ends when the character touches the ground again.
//!
//! Two transitions exist:
//! - [`next_mode`]: input-driven, evaluated once per frame.
//! - [`settle_mode`]: evaluated after each fixed tick, once the impulse (if any) has been
//!   applied and the mover has reported the new grounded state.

/// Current movement regime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LocomotionMode {
    #[default]
    Grounded,
    Falling,
    /// A jump impulse is pending for the next fixed tick.
    Jumping,
    Flying,
}

impl LocomotionMode {
    #[inline]
    pub fn is_pending_jump(self) -> bool {
        self == LocomotionMode::Jumping
    }

    #[inline]
    pub fn is_flying(self) -> bool {
        self == LocomotionMode::Flying
    }
}

/// Frame-rate transition driven by the jump edge and the grounded predicate.
///
/// - Jump pressed while grounded requests a jump (also cancels flight).
/// - Jump pressed in the air with flight unlocked enters flight, dropping any pending jump.
/// - Touching the ground cancels flight. A pending jump survives until a tick consumes it.
/// - Otherwise the mode is kept; only the grounded/falling distinction follows the predicate.
pub fn next_mode(
    current: LocomotionMode,
    grounded: bool,
    jump_pressed: bool,
    can_fly: bool,
) -> LocomotionMode {
    use LocomotionMode::*;

    match (jump_pressed, grounded) {
        (true, true) => Jumping,
        (true, false) if can_fly => Flying,
        (_, true) => match current {
            Jumping => Jumping,
            _ => Grounded,
        },
        (_, false) => match current {
            Grounded => Falling,
            other => other,
        },
    }
}

/// Mode after a fixed tick has run.
///
/// A pending jump has been consumed by the tick, so `Jumping` resolves to grounded or
/// falling. Flight is left alone here: landing cancels it on the next frame.
pub fn settle_mode(current: LocomotionMode, grounded: bool) -> LocomotionMode {
    use LocomotionMode::*;

    match current {
        Flying => Flying,
        Grounded | Falling | Jumping => {
            if grounded {
                Grounded
            } else {
                Falling
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LocomotionMode::*;
    use super::*;

    const ALL: [LocomotionMode; 4] = [Grounded, Falling, Jumping, Flying];

    #[test]
    fn jump_on_ground_requests_jump_from_any_mode() {
        for current in ALL {
            assert_eq!(next_mode(current, true, true, false), Jumping);
            assert_eq!(next_mode(current, true, true, true), Jumping);
        }
    }

    #[test]
    fn jump_in_air_enters_flight_only_when_unlocked() {
        for current in ALL {
            assert_eq!(next_mode(current, false, true, true), Flying);
        }
        assert_eq!(next_mode(Falling, false, true, false), Falling);
        assert_eq!(next_mode(Grounded, false, true, false), Falling);
    }

    #[test]
    fn entering_flight_drops_pending_jump() {
        assert_eq!(next_mode(Jumping, false, true, true), Flying);
    }

    #[test]
    fn touching_ground_cancels_flight() {
        assert_eq!(next_mode(Flying, true, false, true), Grounded);
    }

    #[test]
    fn pending_jump_survives_frames_without_ticks() {
        assert_eq!(next_mode(Jumping, true, false, false), Jumping);
        assert_eq!(next_mode(Jumping, false, false, false), Jumping);
    }

    #[test]
    fn falling_does_not_end_flight() {
        assert_eq!(next_mode(Flying, false, false, true), Flying);
    }

    #[test]
    fn grounded_and_falling_follow_the_predicate() {
        assert_eq!(next_mode(Grounded, false, false, false), Falling);
        assert_eq!(next_mode(Falling, true, false, false), Grounded);
        assert_eq!(next_mode(Falling, false, false, true), Falling);
    }

    #[test]
    fn settle_consumes_pending_jump() {
        assert_eq!(settle_mode(Jumping, true), Grounded);
        assert_eq!(settle_mode(Jumping, false), Falling);
    }

    #[test]
    fn settle_keeps_flight_even_on_ground() {
        assert_eq!(settle_mode(Flying, true), Flying);
        assert_eq!(settle_mode(Flying, false), Flying);
    }

    #[test]
    fn flags_are_exclusive() {
        for m in ALL {
            assert!(!(m.is_pending_jump() && m.is_flying()));
        }
        assert!(Jumping.is_pending_jump());
        assert!(Flying.is_flying());
    }
}
