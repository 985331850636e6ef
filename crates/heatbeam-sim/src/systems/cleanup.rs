//! Cleanup system: removes units that are dead or out of bounds.

use hecs::{Entity, World};

use heatbeam_core::components::{Health, Position};

/// Remove dead units and units beyond `world_radius` from the origin.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
/// Returns the number of despawned entities.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, world_radius: f32) -> usize {
    despawn_buffer.clear();

    let radius_sq = world_radius * world_radius;

    for (entity, (pos, health)) in world.query_mut::<(&Position, &Health)>() {
        if health.is_dead() || pos.0.length_squared() > radius_sq {
            despawn_buffer.push(entity);
        }
    }

    let removed = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    removed
}
