//! Physics systems
//!
//! Stateless procedures that each run one pass over the component maps and
//! mutate data in place. Every system tolerates partial component sets by
//! skipping entities that lack something it needs; numerical edge cases
//! (zero mass, coincident points) degrade to skipping that entity or pair
//! for the frame.
//!
//! The canonical per-frame order lives in [`crate::pipeline`]:
//! reset forces → accumulate forces (gravity, springs) → convert force to
//! acceleration → integrate velocity → integrate position → bounce.

pub mod bounce;
pub mod control;
pub mod forces;
pub mod gravity;
pub mod motion;
pub mod spring;

pub use bounce::Bounce;
pub use control::{apply_input, InputState};
pub use forces::{apply_forces, reset_forces};
pub use gravity::{Gravity, GRAVITATIONAL_CONSTANT};
pub use motion::{integrate_positions, integrate_velocities};
pub use spring::relax_springs;
