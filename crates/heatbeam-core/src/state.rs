//! Committed turret state and the draw primitives derived from it.
//!
//! A `TurretSnapshot` is produced at the end of each tick and is the only
//! thing a render pass reads.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{BeamPhase, Layer, Team};
use crate::events::{AudioEvent, EffectEvent};
use crate::types::{Color, SimTime};

/// Read-only view of one turret after a completed tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TurretSnapshot {
    pub id: u32,
    pub team: Team,
    pub position: Vec2,
    /// Heading in degrees.
    pub rotation: f32,
    pub phase: BeamPhase,
    /// Whether the beam hit something this tick.
    pub any: bool,
    pub last_target: Vec2,
    pub strength: f32,
    pub efficiency: f32,
    pub heat: f32,
    pub heating: f32,
    pub coolant: f32,
}

/// Unit summary for frame output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitView {
    pub id: u64,
    pub team: Team,
    pub position: Vec2,
    pub health: f32,
    pub flying: bool,
}

/// Everything the host publishes after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub turrets: Vec<TurretSnapshot>,
    pub units: Vec<UnitView>,
    pub audio_events: Vec<AudioEvent>,
    pub effects: Vec<EffectEvent>,
}

/// Texture regions making up a laser segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaserRegions {
    pub body: String,
    pub start: String,
    pub end: String,
}

/// A stat bar shown for a placed structure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarView {
    /// Raw bar value; the UI decides how to normalize it.
    pub value: f32,
    pub color: Color,
}

/// A single draw primitive for the rendering collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    Sprite {
        region: String,
        position: Vec2,
        rotation: f32,
        layer: Layer,
    },
    Shadow {
        region: String,
        position: Vec2,
        rotation: f32,
    },
    Laser {
        team: Team,
        regions: LaserRegions,
        from: Vec2,
        to: Vec2,
        width: f32,
        /// Color mixed over the laser texture; alpha is the mix amount.
        mix: Color,
        layer: Layer,
    },
    /// Additive tint over the turret body.
    Glow {
        region: String,
        position: Vec2,
        rotation: f32,
        color: Color,
        layer: Layer,
    },
}
