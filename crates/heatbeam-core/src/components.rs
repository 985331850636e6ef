//! ECS components for unit entities in the host world.
//!
//! Components are plain data structs with no behavior beyond small
//! accessors. Game logic lives in systems.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_UNIT_DRAG, DEFAULT_UNIT_MASS};
use crate::enums::StatusEffect;

/// World position of a unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// Velocity of a unit in world units per tick-unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec2);

/// Physical properties of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitBody {
    /// Collision diameter in world units.
    pub hit_size: f32,
    pub mass: f32,
    /// Fraction of velocity lost per tick-unit.
    pub drag: f32,
    /// Flying units are air targets; everything else is ground.
    pub flying: bool,
}

impl Default for UnitBody {
    fn default() -> Self {
        Self {
            hit_size: 8.0,
            mass: DEFAULT_UNIT_MASS,
            drag: DEFAULT_UNIT_DRAG,
            flying: false,
        }
    }
}

impl UnitBody {
    /// Whether a weapon with the given capability flags may target this unit.
    pub fn check_target(&self, target_air: bool, target_ground: bool) -> bool {
        (self.flying && target_air) || (!self.flying && target_ground)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }
}

/// A status effect applied to a unit with its remaining duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusEntry {
    pub effect: StatusEffect,
    /// Remaining time in tick-units.
    pub remaining: f32,
}

/// Active status effects on a unit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusEffects {
    pub active: Vec<StatusEntry>,
}

impl StatusEffects {
    /// Apply `effect` for `duration`, refreshing to the longer of the current
    /// and new durations when already active.
    pub fn apply(&mut self, effect: StatusEffect, duration: f32) {
        if effect.is_none() {
            return;
        }
        match self.active.iter_mut().find(|e| e.effect == effect) {
            Some(entry) => entry.remaining = entry.remaining.max(duration),
            None => self.active.push(StatusEntry {
                effect,
                remaining: duration,
            }),
        }
    }

    pub fn has(&self, effect: StatusEffect) -> bool {
        self.active.iter().any(|e| e.effect == effect)
    }

    pub fn remaining(&self, effect: StatusEffect) -> Option<f32> {
        self.active
            .iter()
            .find(|e| e.effect == effect)
            .map(|e| e.remaining)
    }
}
