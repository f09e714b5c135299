use crate::{
    constants::{
        BACKWARD_ACCELERATION, FLY_ACCELERATION, FORWARD_ACCELERATION, GRAVITY_ACCELERATION,
        GROUND_ADHESION_VELOCITY, JUMP_ACCELERATION, MAX_BACKWARD_VELOCITY, MAX_FALL_VELOCITY,
        MAX_FORWARD_VELOCITY, MAX_JUMP_VELOCITY, MAX_STRAFE_VELOCITY, STRAFE_ACCELERATION,
    },
    input::InputSnapshot,
    mode::LocomotionMode,
    types::Vec3,
};

// NOTE: everything here is pure. The controller owns the state and decides when a
// pending jump counts as consumed; these functions only do the per-tick math.

/// Local-frame acceleration for one fixed tick.
///
/// - `x` (strafe) and `z` (forward) come straight from the move axes.
/// - `y` follows the mode: jump impulse, nothing on the ground, gravity in the air.
/// - Flying overrides `y`: ascend/descend with `Jump`/`Descend` held, gravity drift otherwise.
pub fn derive_acceleration(mode: LocomotionMode, grounded: bool, input: &InputSnapshot) -> Vec3 {
    let forward_scale = if input.forward > 0.0 {
        FORWARD_ACCELERATION
    } else {
        BACKWARD_ACCELERATION
    };
    let z = input.forward * forward_scale;
    let x = input.strafe * STRAFE_ACCELERATION;

    let y = match mode {
        LocomotionMode::Flying => {
            if input.jump_held {
                FLY_ACCELERATION
            } else if input.descend_held {
                -FLY_ACCELERATION
            } else {
                -GRAVITY_ACCELERATION
            }
        }
        LocomotionMode::Jumping => JUMP_ACCELERATION,
        LocomotionMode::Grounded | LocomotionMode::Falling => {
            if grounded {
                0.0
            } else {
                -GRAVITY_ACCELERATION
            }
        }
    };

    Vec3::new(x, y, z)
}

/// Explicit Euler step followed by the per-axis post-processing rules.
pub fn integrate_velocity(velocity: Vec3, acceleration: Vec3, dt: f32) -> Vec3 {
    let v = velocity + acceleration * dt;

    Vec3::new(
        snap_or_clamp(acceleration.x, v.x, -MAX_STRAFE_VELOCITY, MAX_STRAFE_VELOCITY),
        vertical_velocity(acceleration.y, v.y),
        snap_or_clamp(
            acceleration.z,
            v.z,
            -MAX_BACKWARD_VELOCITY,
            MAX_FORWARD_VELOCITY,
        ),
    )
}

/// Local-frame displacement for one tick.
#[inline]
pub fn local_displacement(velocity: Vec3, dt: f32) -> Vec3 {
    velocity * dt
}

/// Planar axis rule: no coasting and no overshoot.
///
/// Zero acceleration, or acceleration opposing the resulting velocity, stops the axis dead.
#[inline]
fn snap_or_clamp(acceleration: f32, velocity: f32, min: f32, max: f32) -> f32 {
    if acceleration == 0.0 || acceleration * velocity < 0.0 {
        0.0
    } else {
        velocity.clamp(min, max)
    }
}

#[inline]
fn vertical_velocity(acceleration: f32, velocity: f32) -> f32 {
    if acceleration == 0.0 {
        GROUND_ADHESION_VELOCITY
    } else {
        velocity.clamp(-MAX_FALL_VELOCITY, MAX_JUMP_VELOCITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_FIXED_TICK_S;

    const DT: f32 = DEFAULT_FIXED_TICK_S;
    const EPS: f32 = 1.0e-5;

    fn input(forward: f32, strafe: f32) -> InputSnapshot {
        InputSnapshot {
            forward,
            strafe,
            ..InputSnapshot::default()
        }
    }

    #[test]
    fn planar_acceleration_scales_axes() {
        let a = derive_acceleration(LocomotionMode::Grounded, true, &input(1.0, -0.5));
        assert_eq!(a.z, 10.0);
        assert_eq!(a.x, -5.0);

        let a = derive_acceleration(LocomotionMode::Grounded, true, &input(-0.3, 0.0));
        assert!((a.z + 3.0).abs() < EPS);
        assert_eq!(a.x, 0.0);
    }

    #[test]
    fn vertical_acceleration_by_mode() {
        let none = InputSnapshot::default();
        assert_eq!(derive_acceleration(LocomotionMode::Grounded, true, &none).y, 0.0);
        assert_eq!(derive_acceleration(LocomotionMode::Falling, false, &none).y, -10.0);
        assert_eq!(derive_acceleration(LocomotionMode::Jumping, true, &none).y, 200.0);
        // The predicate wins over a stale grounded/falling label.
        assert_eq!(derive_acceleration(LocomotionMode::Grounded, false, &none).y, -10.0);
        assert_eq!(derive_acceleration(LocomotionMode::Falling, true, &none).y, 0.0);
    }

    #[test]
    fn flying_overrides_vertical_acceleration() {
        let mut i = InputSnapshot::default();
        assert_eq!(derive_acceleration(LocomotionMode::Flying, false, &i).y, -10.0);
        assert_eq!(derive_acceleration(LocomotionMode::Flying, true, &i).y, -10.0);

        i.jump_held = true;
        assert_eq!(derive_acceleration(LocomotionMode::Flying, false, &i).y, 5.0);

        i.descend_held = true;
        // Ascend takes priority when both are held.
        assert_eq!(derive_acceleration(LocomotionMode::Flying, false, &i).y, 5.0);

        i.jump_held = false;
        assert_eq!(derive_acceleration(LocomotionMode::Flying, false, &i).y, -5.0);
    }

    #[test]
    fn zero_vertical_acceleration_applies_adhesion_bias() {
        let v = integrate_velocity(Vec3::new(0.0, 7.0, 0.0), Vec3::zeros(), DT);
        assert_eq!(v.y, GROUND_ADHESION_VELOCITY);
    }

    #[test]
    fn releasing_forward_stops_immediately() {
        let v = integrate_velocity(Vec3::new(0.0, 0.0, 3.5), Vec3::zeros(), DT);
        assert_eq!(v.z, 0.0);
        assert_eq!(v.x, 0.0);
    }

    #[test]
    fn reversing_direction_snaps_to_zero() {
        // Moving forward at full speed, pulling back: 4.0 - 0.2 is still positive.
        let v = integrate_velocity(
            Vec3::new(2.0, 0.0, 4.0),
            Vec3::new(-10.0, 0.0, -10.0),
            DT,
        );
        assert_eq!(v.z, 0.0);
        assert_eq!(v.x, 0.0);
    }

    #[test]
    fn planar_velocity_is_clamped() {
        let v = integrate_velocity(
            Vec3::new(2.95, 0.0, 3.95),
            Vec3::new(10.0, 0.0, 10.0),
            DT,
        );
        assert_eq!(v.z, MAX_FORWARD_VELOCITY);
        assert_eq!(v.x, MAX_STRAFE_VELOCITY);

        let v = integrate_velocity(
            Vec3::new(-2.95, 0.0, -1.95),
            Vec3::new(-10.0, 0.0, -10.0),
            DT,
        );
        assert_eq!(v.z, -MAX_BACKWARD_VELOCITY);
        assert_eq!(v.x, -MAX_STRAFE_VELOCITY);
    }

    #[test]
    fn vertical_velocity_is_clamped() {
        let v = integrate_velocity(Vec3::new(0.0, 49.0, 0.0), Vec3::new(0.0, 200.0, 0.0), DT);
        assert_eq!(v.y, MAX_JUMP_VELOCITY);

        let v = integrate_velocity(Vec3::new(0.0, -99.9, 0.0), Vec3::new(0.0, -10.0, 0.0), DT);
        assert_eq!(v.y, -MAX_FALL_VELOCITY);
    }

    #[test]
    fn accelerating_from_rest_integrates() {
        let v = integrate_velocity(Vec3::zeros(), Vec3::new(5.0, -10.0, 10.0), DT);
        assert!((v.x - 0.1).abs() < EPS);
        assert!((v.y + 0.2).abs() < EPS);
        assert!((v.z - 0.2).abs() < EPS);
    }

    #[test]
    fn displacement_is_velocity_times_tick() {
        let d = local_displacement(Vec3::new(3.0, -0.1, 4.0), DT);
        assert!((d - Vec3::new(0.06, -0.002, 0.08)).norm() < EPS);
    }
}
