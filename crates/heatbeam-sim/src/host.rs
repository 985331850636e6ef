//! Capabilities the turret consumes from its host.
//!
//! The turret never reaches for global state: the base structure, the
//! liquid reservoir, the unit registry and the per-tick services are all
//! handed to it explicitly.

use std::io::{Read, Write};

use glam::Vec2;
use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use heatbeam_core::components::{Health, Position, StatusEffects, UnitBody, Velocity};
use heatbeam_core::definition::LiquidType;
use heatbeam_core::enums::{SensorKey, StatusEffect, Team};
use heatbeam_core::events::{AudioEvent, EffectEvent};

/// Per-tick services passed into every update.
pub struct TickContext<'a> {
    /// Elapsed time since the previous tick in tick-units.
    pub delta: f32,
    /// Global time-scale factor.
    pub time_scale: f32,
    /// Headless hosts skip audio cues.
    pub headless: bool,
    pub rng: &'a mut ChaCha8Rng,
    pub audio: &'a mut Vec<AudioEvent>,
    pub effects: &'a mut Vec<EffectEvent>,
}

/// Liquid storage owned by the host structure.
pub trait LiquidReservoir {
    /// The liquid most recently added, if any.
    fn current(&self) -> Option<&LiquidType>;
    fn get(&self, liquid: &LiquidType) -> f32;
    fn remove(&mut self, liquid: &LiquidType, amount: f32);
}

/// The structure a turret is built on top of.
///
/// The turret composes one of these and calls into it explicitly, before its
/// own logic for updates and persistence.
pub trait BaseStructure {
    fn position(&self) -> Vec2;
    fn team(&self) -> Team;
    /// Base efficiency (power satisfaction etc.), normally in `[0, 1]`.
    fn efficiency(&self) -> f32;
    fn liquids_mut(&mut self) -> &mut dyn LiquidReservoir;

    /// The base structure's own per-tick logic.
    fn update(&mut self, _ctx: &mut TickContext<'_>) {}

    fn write_state(&self, out: &mut dyn Write) -> std::io::Result<()>;
    fn read_state(&mut self, input: &mut dyn Read, revision: u8) -> std::io::Result<()>;

    /// Sensor values the base knows about; `NaN` for unsupported keys.
    fn sense(&self, key: SensorKey) -> f64;
}

/// Resolved view of a live unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitRef {
    pub entity: Entity,
    pub position: Vec2,
    pub body: UnitBody,
    pub team: Team,
}

/// The world's live-unit registry and spatial query.
pub trait UnitRegistry {
    /// Look up a unit; dead or despawned units resolve to `None`.
    fn resolve(&self, unit: Entity) -> Option<UnitRef>;

    /// Closest living unit hostile to `team` within `range` (plus half its
    /// hit size) of `origin` that passes `filter`.
    fn closest_enemy(
        &self,
        team: Team,
        origin: Vec2,
        range: f32,
        filter: &dyn Fn(&UnitRef) -> bool,
    ) -> Option<Entity>;

    /// Continuous damage: `amount` per tick-unit, scaled by `delta`.
    fn damage_continuous(&mut self, unit: Entity, amount: f32, delta: f32);
    fn apply_status(&mut self, unit: Entity, effect: StatusEffect, duration: f32);
    fn impulse(&mut self, unit: Entity, impulse: Vec2);
}

impl UnitRegistry for World {
    fn resolve(&self, unit: Entity) -> Option<UnitRef> {
        let mut query = self
            .query_one::<(&Position, &UnitBody, &Team, &Health)>(unit)
            .ok()?;
        let (pos, body, team, health) = query.get()?;
        if health.is_dead() {
            return None;
        }
        Some(UnitRef {
            entity: unit,
            position: pos.0,
            body: *body,
            team: *team,
        })
    }

    fn closest_enemy(
        &self,
        team: Team,
        origin: Vec2,
        range: f32,
        filter: &dyn Fn(&UnitRef) -> bool,
    ) -> Option<Entity> {
        let mut best: Option<(Entity, f32)> = None;
        let mut query = self.query::<(&Position, &UnitBody, &Team, &Health)>();
        for (entity, (pos, body, unit_team, health)) in query.iter() {
            if health.is_dead() || !team.is_hostile_to(*unit_team) {
                continue;
            }
            let dist = pos.0.distance(origin);
            if dist > range + body.hit_size / 2.0 {
                continue;
            }
            let unit = UnitRef {
                entity,
                position: pos.0,
                body: *body,
                team: *unit_team,
            };
            if !filter(&unit) {
                continue;
            }
            if best.map_or(true, |(_, d)| dist < d) {
                best = Some((entity, dist));
            }
        }
        best.map(|(entity, _)| entity)
    }

    fn damage_continuous(&mut self, unit: Entity, amount: f32, delta: f32) {
        if let Ok(mut health) = self.get::<&mut Health>(unit) {
            health.current -= amount * delta;
        }
    }

    fn apply_status(&mut self, unit: Entity, effect: StatusEffect, duration: f32) {
        if let Ok(mut effects) = self.get::<&mut StatusEffects>(unit) {
            effects.apply(effect, duration);
        }
    }

    fn impulse(&mut self, unit: Entity, impulse: Vec2) {
        let mass = self
            .get::<&UnitBody>(unit)
            .map(|body| body.mass)
            .unwrap_or(1.0);
        if let Ok(mut vel) = self.get::<&mut Velocity>(unit) {
            vel.0 += impulse / mass.max(f32::EPSILON);
        }
    }
}
