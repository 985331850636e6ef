//! Runtime for the heat tractor-beam turret.
//!
//! The turret itself (`turret`, `systems`, `persistence`, `sensor`) only
//! talks to its host through the capability traits in `host`. `engine`,
//! `base` and `world_setup` are a small reference host built on a hecs
//! world so the turret can be run end to end.

pub mod base;
pub mod engine;
pub mod host;
pub mod persistence;
pub mod sensor;
pub mod systems;
pub mod turret;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use heatbeam_core as core;
pub use turret::{HeatTractorTurret, TurretState};
