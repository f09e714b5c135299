pub mod constants;
pub mod controller;
pub mod error;
pub mod input;
pub mod mode;
pub mod motion;
pub mod mover;
pub mod orientation;
pub mod rapier_mover;
pub mod settings;
pub mod static_world;
pub mod timestep;
pub mod types;

// Re-export Rapier so hosts can build levels without depending on `rapier3d` directly.
pub use rapier3d;

pub use controller::{ControllerBuilder, LocomotionController};
pub use error::{LocomotionError, LocomotionResult};
pub use input::{Axis, Button, InputSnapshot, InputSource};
pub use mode::{LocomotionMode, next_mode, settle_mode};
pub use mover::Mover;
pub use orientation::{Orientation, clamp_tilt, wrap_degrees};
pub use rapier_mover::RapierMover;
pub use settings::KccSettings;
pub use static_world::{CollisionWorld, StaticCollider, StaticShape};
pub use timestep::FixedTimestep;
pub use types::{Quat, Vec3};
