//! Core types and definitions for the heat tractor-beam turret.
//!
//! This crate defines the vocabulary shared by the simulation and tooling:
//! unit components, turret definitions, draw primitives, events and
//! constants. It has no dependency on the ECS or any runtime.

pub mod components;
pub mod constants;
pub mod definition;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

pub use error::{HeatbeamError, Result};

#[cfg(test)]
mod tests;
