//! Unit kinematics for the reference host.
//!
//! Integrates position from velocity and applies drag each tick.

use hecs::World;

use heatbeam_core::components::{Position, UnitBody, Velocity};

/// Run kinematic integration for all units with Position + Velocity.
pub fn run(world: &mut World, delta: f32) {
    for (_entity, (pos, vel, body)) in
        world.query_mut::<(&mut Position, &mut Velocity, &UnitBody)>()
    {
        pos.0 += vel.0 * delta;
        vel.0 *= (1.0 - body.drag * delta).max(0.0);
    }
}
