//! Unit spawn factories for setting up the host world.

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use heatbeam_core::components::*;
use heatbeam_core::enums::Team;

/// Parameters for a single unit.
#[derive(Debug, Clone, Copy)]
pub struct UnitSpawn {
    pub position: Vec2,
    pub velocity: Vec2,
    pub team: Team,
    pub body: UnitBody,
    pub health: f32,
}

impl UnitSpawn {
    pub fn ground(position: Vec2, team: Team) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            team,
            body: UnitBody::default(),
            health: 200.0,
        }
    }

    pub fn air(position: Vec2, team: Team) -> Self {
        Self {
            body: UnitBody {
                flying: true,
                ..Default::default()
            },
            ..Self::ground(position, team)
        }
    }
}

/// Spawn one unit with the full component bundle.
pub fn spawn_unit(world: &mut World, spawn: UnitSpawn) -> Entity {
    world.spawn((
        Position(spawn.position),
        Velocity(spawn.velocity),
        spawn.body,
        spawn.team,
        Health::new(spawn.health),
        StatusEffects::default(),
    ))
}

/// Spawn `count` ground units of `team` on a ring around `center`, drifting
/// inward at `speed`.
pub fn spawn_ring(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    count: usize,
    center: Vec2,
    radius: f32,
    speed: f32,
    team: Team,
) -> Vec<Entity> {
    (0..count)
        .map(|_| {
            let angle = rng.gen_range(0.0..std::f32::consts::TAU);
            let offset = Vec2::from_angle(angle) * radius;
            let mut spawn = UnitSpawn::ground(center + offset, team);
            spawn.velocity = -offset.normalize_or_zero() * speed;
            spawn_unit(world, spawn)
        })
        .collect()
}
