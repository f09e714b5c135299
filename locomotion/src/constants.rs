//! Motion tuning for the first-person controller.
//!
//! Conventions
//! - Distances are in meters, time in seconds, angles in degrees.
//! - Accelerations are positive magnitudes; the sign is applied by the motion code.
//! - The local frame is `x` = strafe (right), `y` = up, `z` = forward.

/// Forward acceleration magnitude (m/s^2) at full `Forward` axis.
pub const FORWARD_ACCELERATION: f32 = 10.0;

/// Backward acceleration magnitude (m/s^2) at full negative `Forward` axis.
pub const BACKWARD_ACCELERATION: f32 = 10.0;

/// Strafe acceleration magnitude (m/s^2) at full `Strafe` axis.
pub const STRAFE_ACCELERATION: f32 = 10.0;

/// One-shot upward acceleration applied on the tick that consumes a pending jump.
pub const JUMP_ACCELERATION: f32 = 200.0;

/// Vertical acceleration while flying with `Jump` or `Descend` held.
pub const FLY_ACCELERATION: f32 = 5.0;

/// Gravity magnitude (m/s^2). Applied as `-GRAVITY_ACCELERATION` while airborne.
pub const GRAVITY_ACCELERATION: f32 = 10.0;

/// Upper bound for forward velocity (m/s).
pub const MAX_FORWARD_VELOCITY: f32 = 4.0;

/// Magnitude of the lower bound for forward velocity, i.e. walking backwards (m/s).
pub const MAX_BACKWARD_VELOCITY: f32 = 2.0;

/// Symmetric bound for strafe velocity (m/s).
pub const MAX_STRAFE_VELOCITY: f32 = 3.0;

/// Upper bound for vertical velocity (m/s).
pub const MAX_JUMP_VELOCITY: f32 = 50.0;

/// Magnitude of the lower bound for vertical velocity (m/s).
pub const MAX_FALL_VELOCITY: f32 = 100.0;

/// Vertical velocity forced whenever vertical acceleration is exactly zero.
///
/// Keeps the character pressed against the floor so the collision system keeps
/// reporting it as grounded.
pub const GROUND_ADHESION_VELOCITY: f32 = -0.1;

/// Degrees of yaw/pitch per unit of look axis, per frame.
pub const ROTATION_VELOCITY_FACTOR: f32 = 2.0;

/// Highest pitch allowed on the `[0, 180)` side of the wrap (looking down).
pub const MIN_TILT_ROTATION: f32 = 70.0;

/// Lowest pitch allowed on the `[180, 360)` side of the wrap (looking up).
pub const MAX_TILT_ROTATION: f32 = 290.0;

/// Default fixed tick duration (seconds). 50 Hz.
pub const DEFAULT_FIXED_TICK_S: f32 = 0.02;

/// Largest frame delta fed into the fixed-step accumulator (seconds).
///
/// Anything above this is dropped so a stall (debugger, window drag) does not
/// trigger a long burst of catch-up ticks.
pub const MAX_FRAME_DELTA_S: f32 = 0.25;
