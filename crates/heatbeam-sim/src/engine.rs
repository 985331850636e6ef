//! Reference host engine.
//!
//! `SimulationEngine` owns the hecs world of units and the placed turrets,
//! runs one update per turret per tick, then the host systems, and
//! publishes a `FrameSnapshot`. Completely headless and seeded, so runs are
//! deterministic.

use std::sync::Arc;

use glam::Vec2;
use hecs::{Entity, World};
use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use heatbeam_core::components::{Health, Position, UnitBody};
use heatbeam_core::constants::WORLD_RADIUS;
use heatbeam_core::definition::TurretDefinition;
use heatbeam_core::enums::Team;
use heatbeam_core::events::{AudioEvent, EffectEvent};
use heatbeam_core::state::{FrameSnapshot, UnitView};
use heatbeam_core::types::SimTime;
use heatbeam_core::Result;

use crate::base::PoweredBlock;
use crate::host::TickContext;
use crate::systems;
use crate::turret::HeatTractorTurret;
use crate::world_setup::{self, UnitSpawn};

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Global time scale (1.0 = normal).
    pub time_scale: f32,
    /// Tick-units advanced per tick.
    pub delta: f32,
    /// Skip audio cues.
    pub headless: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            delta: 1.0,
            headless: true,
        }
    }
}

pub type Turret = HeatTractorTurret<PoweredBlock>;

/// The host engine. Owns the world and all placed turrets.
pub struct SimulationEngine {
    world: World,
    turrets: Vec<Turret>,
    time: SimTime,
    config: SimConfig,
    rng: ChaCha8Rng,
    next_turret_id: u32,
    despawn_buffer: Vec<Entity>,
    audio_events: Vec<AudioEvent>,
    effects: Vec<EffectEvent>,
}

impl SimulationEngine {
    pub fn new(config: SimConfig) -> Self {
        info!(
            "simulation engine: seed {} delta {} time_scale {}",
            config.seed, config.delta, config.time_scale
        );
        Self {
            world: World::new(),
            turrets: Vec::new(),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            next_turret_id: 0,
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
            effects: Vec::new(),
        }
    }

    /// Place a turret on a fresh powered block. Returns its id.
    pub fn place_turret(
        &mut self,
        definition: Arc<TurretDefinition>,
        position: Vec2,
        team: Team,
    ) -> u32 {
        let id = self.next_turret_id;
        self.next_turret_id += 1;
        debug!("placing turret {} `{}` at {:?}", id, definition.name, position);
        self.turrets.push(HeatTractorTurret::new(
            id,
            definition,
            PoweredBlock::new(position, team),
        ));
        id
    }

    /// Remove a placed turret, returning it.
    pub fn remove_turret(&mut self, id: u32) -> Option<Turret> {
        let idx = self.turrets.iter().position(|t| t.id == id)?;
        Some(self.turrets.remove(idx))
    }

    pub fn turret(&self, id: u32) -> Option<&Turret> {
        self.turrets.iter().find(|t| t.id == id)
    }

    pub fn turret_mut(&mut self, id: u32) -> Option<&mut Turret> {
        self.turrets.iter_mut().find(|t| t.id == id)
    }

    pub fn spawn_unit(&mut self, spawn: UnitSpawn) -> Entity {
        world_setup::spawn_unit(&mut self.world, spawn)
    }

    /// Spawn a ring of hostile ground units closing in on `center`.
    pub fn spawn_ring(
        &mut self,
        count: usize,
        center: Vec2,
        radius: f32,
        speed: f32,
        team: Team,
    ) -> Vec<Entity> {
        world_setup::spawn_ring(
            &mut self.world,
            &mut self.rng,
            count,
            center,
            radius,
            speed,
            team,
        )
    }

    pub fn set_time_scale(&mut self, scale: f32) {
        self.config.time_scale = scale.clamp(0.0, 4.0);
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Advance the simulation by one tick and return the committed frame.
    pub fn tick(&mut self) -> FrameSnapshot {
        let delta = self.config.delta;
        {
            let mut ctx = TickContext {
                delta,
                time_scale: self.config.time_scale,
                headless: self.config.headless,
                rng: &mut self.rng,
                audio: &mut self.audio_events,
                effects: &mut self.effects,
            };
            for turret in self.turrets.iter_mut() {
                turret.update(&mut self.world, &mut ctx);
            }
        }

        systems::status::run(&mut self.world, delta);
        systems::movement::run(&mut self.world, delta);
        let removed = systems::cleanup::run(&mut self.world, &mut self.despawn_buffer, WORLD_RADIUS);
        if removed > 0 {
            debug!("tick {}: despawned {} units", self.time.tick, removed);
        }
        self.time.advance(delta);

        self.snapshot()
    }

    fn snapshot(&mut self) -> FrameSnapshot {
        let mut units: Vec<UnitView> = self
            .world
            .query::<(&Position, &UnitBody, &Team, &Health)>()
            .iter()
            .map(|(entity, (pos, body, team, health))| UnitView {
                id: entity.to_bits().get(),
                team: *team,
                position: pos.0,
                health: health.current,
                flying: body.flying,
            })
            .collect();
        units.sort_by_key(|u| u.id);

        FrameSnapshot {
            time: self.time,
            turrets: self.turrets.iter().map(|t| t.snapshot()).collect(),
            units,
            audio_events: std::mem::take(&mut self.audio_events),
            effects: std::mem::take(&mut self.effects),
        }
    }

    /// Serialize a turret's persisted state (base fields, then heat).
    pub fn save_turret(&self, id: u32) -> Option<Result<Vec<u8>>> {
        let turret = self.turret(id)?;
        let mut bytes = Vec::new();
        Some(turret.write_state(&mut bytes).map(|()| bytes))
    }

    /// Restore a turret's persisted state written by [`Self::save_turret`].
    pub fn load_turret(&mut self, id: u32, bytes: &[u8], revision: u8) -> Option<Result<()>> {
        let turret = self.turret_mut(id)?;
        let mut input = bytes;
        Some(turret.read_state(&mut input, revision))
    }
}
