//! Systems run by the turret and the reference host each tick.
//!
//! Systems are plain functions over explicit state. They do not own state.

pub mod beam;
pub mod cleanup;
pub mod movement;
pub mod render;
pub mod status;
pub mod targeting;
pub mod thermal;
