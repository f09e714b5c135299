use crate::{
    constants::MAX_FRAME_DELTA_S,
    error::{LocomotionError, LocomotionResult},
};

/// Fixed-step accumulator decoupling frame rate from simulation rate.
///
/// Usage per frame:
/// ```text
/// timestep.accumulate(frame_dt);
/// while timestep.consume() {
///     // one fixed tick of `timestep.step()` seconds
/// }
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FixedTimestep {
    step: f32,
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(step_seconds: f32) -> LocomotionResult<Self> {
        if !step_seconds.is_finite() || step_seconds <= 0.0 {
            return Err(LocomotionError::InvalidTickDuration(step_seconds));
        }

        Ok(Self {
            step: step_seconds,
            accumulator: 0.0,
        })
    }

    /// Tick duration in seconds.
    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Time accumulated but not yet simulated (seconds).
    #[inline]
    pub fn accumulated(&self) -> f32 {
        self.accumulator
    }

    /// Add one frame's elapsed time.
    ///
    /// Negative and NaN deltas count as zero. Deltas above `MAX_FRAME_DELTA_S` are clamped.
    pub fn accumulate(&mut self, frame_dt: f32) {
        let dt = frame_dt.max(0.0);
        if dt > MAX_FRAME_DELTA_S {
            log::warn!("frame delta {dt:.3}s clamped to {MAX_FRAME_DELTA_S}s");
        }
        self.accumulator += dt.min(MAX_FRAME_DELTA_S);
    }

    /// Take one tick out of the accumulator if a whole tick is available.
    pub fn consume(&mut self) -> bool {
        if self.accumulator >= self.step {
            self.accumulator -= self.step;
            true
        } else {
            false
        }
    }

    /// Fraction of a tick left over after catch-up, in `[0, 1)`.
    ///
    /// Useful for interpolating rendered transforms between ticks.
    #[inline]
    pub fn overstep_fraction(&self) -> f32 {
        self.accumulator / self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Powers of two keep the accumulator arithmetic exact.
    const STEP: f32 = 1.0 / 64.0;

    fn drain(ts: &mut FixedTimestep) -> u32 {
        let mut n = 0;
        while ts.consume() {
            n += 1;
        }
        n
    }

    #[test]
    fn rejects_bad_step() {
        assert!(FixedTimestep::new(0.0).is_err());
        assert!(FixedTimestep::new(-0.02).is_err());
        assert!(FixedTimestep::new(f32::NAN).is_err());
        assert!(FixedTimestep::new(f32::INFINITY).is_err());
        assert!(FixedTimestep::new(0.02).is_ok());
    }

    #[test]
    fn short_frames_accumulate_until_a_tick_is_due() {
        let mut ts = FixedTimestep::new(STEP).unwrap();
        ts.accumulate(STEP / 2.0);
        assert_eq!(drain(&mut ts), 0);
        ts.accumulate(STEP / 2.0);
        assert_eq!(drain(&mut ts), 1);
        assert_eq!(ts.accumulated(), 0.0);
    }

    #[test]
    fn long_frames_catch_up_with_several_ticks() {
        let mut ts = FixedTimestep::new(STEP).unwrap();
        ts.accumulate(STEP * 3.5);
        assert_eq!(drain(&mut ts), 3);
        assert!((ts.overstep_fraction() - 0.5).abs() < 1.0e-6);
    }

    #[test]
    fn negative_and_nan_frames_are_ignored() {
        let mut ts = FixedTimestep::new(STEP).unwrap();
        ts.accumulate(-1.0);
        ts.accumulate(f32::NAN);
        assert_eq!(ts.accumulated(), 0.0);
        assert_eq!(drain(&mut ts), 0);
    }

    #[test]
    fn stalls_are_clamped() {
        let mut ts = FixedTimestep::new(STEP).unwrap();
        ts.accumulate(10.0);
        assert_eq!(drain(&mut ts), (MAX_FRAME_DELTA_S / STEP) as u32);
    }
}
