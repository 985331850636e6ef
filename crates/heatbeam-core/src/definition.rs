//! Turret and liquid content definitions.
//!
//! Definitions are created at content-load time (usually from JSON) and are
//! immutable afterwards; every placed turret shares one definition.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{BASE_CLIP_SIZE, TICKS_PER_SECOND, TILE_SIZE};
use crate::enums::StatusEffect;
use crate::error::{HeatbeamError, Result};
use crate::types::Color;

/// A liquid type as seen by the coolant logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiquidType {
    pub name: String,
    /// Thermal capacity; higher values cool more per unit consumed.
    pub heat_capacity: f32,
}

impl LiquidType {
    pub fn new(name: impl Into<String>, heat_capacity: f32) -> Self {
        Self {
            name: name.into(),
            heat_capacity,
        }
    }

    pub fn water() -> Self {
        Self::new("water", 0.4)
    }

    pub fn cryofluid() -> Self {
        Self::new("cryofluid", 0.9)
    }
}

/// Optional coolant intake of a turret.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoolantConsumer {
    /// Maximum liquid consumed per tick-unit.
    pub amount: f32,
}

/// Static stats of a turret type, as plain data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurretStats {
    pub targets_air: bool,
    pub targets_ground: bool,
    pub damage_per_second: f32,
}

/// Immutable per-type turret configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TurretDefinition {
    pub name: String,
    /// Footprint edge length in tiles.
    pub size: u8,
    pub range: f32,
    /// Degrees per tick-unit.
    pub rotate_speed: f32,
    /// Degrees either side of the bearing within which the beam fires.
    pub shoot_cone: f32,
    /// Tick-units between target searches.
    pub retarget_time: f32,
    pub shoot_length: f32,
    pub laser_width: f32,
    pub force: f32,
    pub scaled_force: f32,
    pub target_air: bool,
    pub target_ground: bool,
    /// Continuous damage per tick-unit at full efficiency.
    pub damage: f32,
    pub status: StatusEffect,
    pub status_duration: f32,
    pub flash_threshold: f32,
    pub coolant_multiplier: f32,
    pub coolant: Option<CoolantConsumer>,
    pub shoot_sound: String,
    pub shoot_sound_volume: f32,
    pub laser_color: Color,
    /// Heat a freshly placed turret starts with.
    pub initial_heat: f32,
}

impl Default for TurretDefinition {
    fn default() -> Self {
        Self {
            name: "heat-tractor-beam".to_string(),
            size: 2,
            range: 120.0,
            rotate_speed: 10.0,
            shoot_cone: 6.0,
            retarget_time: 5.0,
            shoot_length: 5.0,
            laser_width: 0.6,
            force: 0.3,
            scaled_force: 0.0,
            target_air: false,
            target_ground: true,
            damage: 2000.0,
            status: StatusEffect::None,
            status_duration: 300.0,
            flash_threshold: 0.46,
            coolant_multiplier: 1.0,
            coolant: Some(CoolantConsumer { amount: 0.2 }),
            shoot_sound: "tractorbeam".to_string(),
            shoot_sound_volume: 0.0,
            laser_color: Color::WHITE,
            initial_heat: 100.0,
        }
    }
}

impl TurretDefinition {
    /// Parse and validate a definition from JSON. Missing fields take their
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let definition: TurretDefinition = serde_json::from_str(json)?;
        definition.validate()?;
        Ok(definition)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reject values the runtime cannot work with.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| {
            Err(HeatbeamError::InvalidDefinition {
                name: self.name.clone(),
                reason: reason.to_string(),
            })
        };

        if self.range.is_nan() || self.range <= 0.0 {
            return invalid("range must be positive");
        }
        if self.retarget_time < 0.0 {
            return invalid("retarget_time must not be negative");
        }
        if self.coolant_multiplier.is_nan() || self.coolant_multiplier <= 0.0 {
            return invalid("coolant_multiplier must be positive");
        }
        if self.flash_threshold == 1.0 {
            return invalid("flash_threshold of 1 makes the glow ramp undefined");
        }
        if let Some(consumer) = self.coolant {
            if consumer.amount < 0.0 {
                return invalid("coolant amount must not be negative");
            }
        }
        Ok(())
    }

    /// Footprint edge length in world units.
    pub fn world_size(&self) -> f32 {
        self.size as f32 * TILE_SIZE
    }

    /// Culling size large enough to contain the beam at full range.
    pub fn clip_size(&self) -> f32 {
        BASE_CLIP_SIZE.max((self.range + TILE_SIZE) * 2.0)
    }

    pub fn stats(&self) -> TurretStats {
        TurretStats {
            targets_air: self.target_air,
            targets_ground: self.target_ground,
            damage_per_second: self.damage * TICKS_PER_SECOND,
        }
    }

    pub fn body_region(&self) -> String {
        self.name.clone()
    }

    pub fn base_region(&self) -> String {
        format!("block-{}size", self.size)
    }

    pub fn laser_region(&self) -> String {
        format!("{}-laser", self.name)
    }

    /// The start cap doubles as the end cap.
    pub fn laser_cap_region(&self) -> String {
        format!("{}-laserStart", self.name)
    }

    pub fn icon_regions(&self) -> [String; 2] {
        [self.base_region(), self.body_region()]
    }
}
