//! Fire-and-forget events emitted by the turret for audio and effects.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Audio cues for the host sound system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// Keep a looping sound alive at `origin` for this tick.
    Loop {
        sound: String,
        origin: Vec2,
        volume: f32,
    },
}

/// Cosmetic particle effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EffectEvent {
    /// Coolant vented somewhere within the structure footprint.
    Cool { at: Vec2 },
}
