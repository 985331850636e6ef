//! Enumerations used across the turret core.

use serde::{Deserialize, Serialize};

/// Team identifier. Units and structures on different teams are hostile,
/// except the derelict team which is never targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Team(pub u8);

impl Team {
    pub const DERELICT: Team = Team(0);
    pub const SHARDED: Team = Team(1);
    pub const CRUX: Team = Team(2);

    /// Whether units of `other` are valid enemies for this team.
    pub fn is_hostile_to(self, other: Team) -> bool {
        self != other && other != Team::DERELICT
    }
}

/// Status effects a beam can apply. `None` is the no-op effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusEffect {
    #[default]
    None,
    Slow,
    Wet,
    Freezing,
    Burning,
    Melting,
    Shocked,
    Electrified,
    Overclock,
}

impl StatusEffect {
    pub fn is_none(self) -> bool {
        self == StatusEffect::None
    }
}

/// Keys understood by the structure sensor query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorKey {
    Heat,
    Health,
    MaxHealth,
    Efficiency,
    TotalLiquids,
    Team,
    X,
    Y,
}

/// Z-layer a draw primitive belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    #[default]
    Block,
    Turret,
    Bullet,
    Effect,
}

/// Beam controller state for the current tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BeamPhase {
    #[default]
    Idle,
    Engaged,
}
