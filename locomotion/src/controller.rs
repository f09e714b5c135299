//! First-person locomotion controller.
//!
//! Per simulation cycle the host drives two passes:
//! - [`LocomotionController::frame_update`] once per rendered frame: latches input, resolves
//!   the mode from the jump edge and updates yaw/pitch.
//! - [`LocomotionController::fixed_update`] once per fixed tick: acceleration, velocity,
//!   displacement, then the collision-aware move.
//!
//! [`LocomotionController::advance`] does both with a fixed-step accumulator, which keeps the
//! frame pass ahead of every tick that logically follows it.

use crate::{
    constants::DEFAULT_FIXED_TICK_S,
    error::{LocomotionError, LocomotionResult},
    input::{InputSnapshot, InputSource},
    mode::{LocomotionMode, next_mode, settle_mode},
    motion::{derive_acceleration, integrate_velocity, local_displacement},
    mover::Mover,
    orientation::Orientation,
    timestep::FixedTimestep,
    types::Vec3,
};

/// Builder capturing the controller's collaborators.
///
/// `build()` fails if any collaborator is missing, so a misconfigured host stops at startup.
pub struct ControllerBuilder<M, I> {
    mover: Option<M>,
    input: Option<I>,
    tick_seconds: f32,
    orientation: Orientation,
}

impl<M: Mover, I: InputSource> ControllerBuilder<M, I> {
    pub fn mover(mut self, mover: M) -> Self {
        self.mover = Some(mover);
        self
    }

    pub fn input(mut self, input: I) -> Self {
        self.input = Some(input);
        self
    }

    /// Fixed tick duration in seconds. Defaults to `DEFAULT_FIXED_TICK_S`.
    pub fn tick_seconds(mut self, tick_seconds: f32) -> Self {
        self.tick_seconds = tick_seconds;
        self
    }

    /// Initial facing. Defaults to yaw 0, pitch 0.
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn build(self) -> LocomotionResult<LocomotionController<M, I>> {
        let mover = self
            .mover
            .ok_or(LocomotionError::MissingCollaborator("mover"))?;
        let input = self
            .input
            .ok_or(LocomotionError::MissingCollaborator("input source"))?;
        let timestep = FixedTimestep::new(self.tick_seconds)?;

        Ok(LocomotionController {
            mover,
            input,
            timestep,
            snapshot: InputSnapshot::default(),
            orientation: self.orientation,
            acceleration: Vec3::zeros(),
            velocity: Vec3::zeros(),
            last_applied: Vec3::zeros(),
            mode: LocomotionMode::default(),
            can_fly: false,
        })
    }
}

pub struct LocomotionController<M, I> {
    mover: M,
    input: I,
    timestep: FixedTimestep,
    /// Input latched by the last frame pass, shared by every tick of that frame.
    snapshot: InputSnapshot,
    orientation: Orientation,
    acceleration: Vec3,
    velocity: Vec3,
    last_applied: Vec3,
    mode: LocomotionMode,
    can_fly: bool,
}

impl<M: Mover, I: InputSource> LocomotionController<M, I> {
    pub fn builder() -> ControllerBuilder<M, I> {
        ControllerBuilder {
            mover: None,
            input: None,
            tick_seconds: DEFAULT_FIXED_TICK_S,
            orientation: Orientation::default(),
        }
    }

    /// Frame pass then as many fixed passes as the accumulated time allows.
    ///
    /// Returns the number of fixed ticks that ran.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.frame_update();
        self.timestep.accumulate(frame_dt);

        let mut ticks = 0;
        while self.timestep.consume() {
            self.fixed_update();
            ticks += 1;
        }
        ticks
    }

    /// Frame pass: latch input, resolve mode, then update yaw and pitch.
    pub fn frame_update(&mut self) {
        self.snapshot = InputSnapshot::sample(&self.input);

        let grounded = self.mover.is_grounded();
        let next = next_mode(self.mode, grounded, self.snapshot.jump_pressed, self.can_fly);
        self.set_mode(next);

        self.orientation.rotate(self.snapshot.look_x);
        self.orientation.tilt(self.snapshot.look_y);
    }

    /// Fixed pass: acceleration, velocity, displacement, move.
    ///
    /// The displacement actually applied by the mover is recorded but never fed back into
    /// velocity.
    pub fn fixed_update(&mut self) {
        let dt = self.timestep.step();
        let grounded = self.mover.is_grounded();

        self.acceleration = derive_acceleration(self.mode, grounded, &self.snapshot);
        self.velocity = integrate_velocity(self.velocity, self.acceleration, dt);

        let local = local_displacement(self.velocity, dt);
        let world = self.orientation.local_to_world(&local);
        self.last_applied = self.mover.move_with_collision(world);

        log::trace!(
            "tick mode={:?} accel={:?} vel={:?} applied={:?}",
            self.mode,
            self.acceleration,
            self.velocity,
            self.last_applied
        );

        let next = settle_mode(self.mode, self.mover.is_grounded());
        self.set_mode(next);
    }

    /// Unlock flight for the rest of this controller's lifetime. Idempotent.
    pub fn grant_flight(&mut self) {
        if !self.can_fly {
            log::info!("flight unlocked");
        }
        self.can_fly = true;
    }

    fn set_mode(&mut self, next: LocomotionMode) {
        if next != self.mode {
            log::debug!("locomotion mode {:?} -> {:?}", self.mode, next);
            self.mode = next;
        }
    }

    #[inline]
    pub fn mode(&self) -> LocomotionMode {
        self.mode
    }

    #[inline]
    pub fn is_pending_jump(&self) -> bool {
        self.mode.is_pending_jump()
    }

    #[inline]
    pub fn is_flying(&self) -> bool {
        self.mode.is_flying()
    }

    #[inline]
    pub fn can_fly(&self) -> bool {
        self.can_fly
    }

    #[inline]
    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    /// Local-frame acceleration used by the last tick.
    #[inline]
    pub fn acceleration(&self) -> Vec3 {
        self.acceleration
    }

    /// Local-frame velocity after the last tick.
    #[inline]
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// World-space displacement the mover applied on the last tick.
    #[inline]
    pub fn last_applied_displacement(&self) -> Vec3 {
        self.last_applied
    }

    #[inline]
    pub fn tick_seconds(&self) -> f32 {
        self.timestep.step()
    }

    #[inline]
    pub fn timestep(&self) -> &FixedTimestep {
        &self.timestep
    }

    pub fn mover(&self) -> &M {
        &self.mover
    }

    pub fn mover_mut(&mut self) -> &mut M {
        &mut self.mover
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    /// Hosts that latch device state themselves write it here before each frame pass.
    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }
}
