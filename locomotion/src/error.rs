use thiserror::Error;

pub type LocomotionResult<T> = Result<T, LocomotionError>;

/// Configuration errors raised while wiring up a controller.
///
/// None of these can happen once a controller is built; per-tick updates are infallible.
#[derive(Debug, Error)]
pub enum LocomotionError {
    #[error("missing collaborator: {0}")]
    MissingCollaborator(&'static str),

    #[error("invalid fixed tick duration: {0} (must be finite and > 0)")]
    InvalidTickDuration(f32),

    #[error("invalid kinematic settings: {0}")]
    InvalidSettings(String),
}
