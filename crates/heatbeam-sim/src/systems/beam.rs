//! Beam effect controller: the ENGAGED / IDLE state machine.
//!
//! Engaged turrets turn toward their target and, once inside the shoot
//! cone, apply continuous damage, the configured status effect and a
//! tractor impulse. Idle turrets let beam strength decay and reset the
//! heating accumulator.

use glam::Vec2;

use heatbeam_core::constants::STRENGTH_SMOOTHING;
use heatbeam_core::definition::TurretDefinition;
use heatbeam_core::events::AudioEvent;
use heatbeam_core::types::{angle_to, angle_within, lerp_delta, limit, move_toward};

use crate::host::{TickContext, UnitRef, UnitRegistry};
use crate::systems::thermal;
use crate::turret::TurretState;

/// One engaged tick against a validated target.
pub fn engage(
    state: &mut TurretState,
    def: &TurretDefinition,
    origin: Vec2,
    target: &UnitRef,
    efficiency: f32,
    units: &mut dyn UnitRegistry,
    ctx: &mut TickContext<'_>,
) {
    state.any = false;
    thermal::heat_up(state, ctx.delta);

    if !ctx.headless {
        ctx.audio.push(AudioEvent::Loop {
            sound: def.shoot_sound.clone(),
            origin,
            volume: def.shoot_sound_volume,
        });
    }

    let bearing = angle_to(origin, target.position);
    state.rotation = move_toward(state.rotation, bearing, def.rotate_speed * ctx.delta);
    state.last_target = target.position;
    state.strength = lerp_delta(state.strength, 1.0, STRENGTH_SMOOTHING, ctx.delta);

    if !angle_within(state.rotation, bearing, def.shoot_cone) {
        return;
    }

    if def.damage > 0.0 {
        units.damage_continuous(target.entity, def.damage * efficiency, ctx.delta);
    }
    if !def.status.is_none() {
        units.apply_status(target.entity, def.status, def.status_duration);
    }
    state.any = true;

    units.impulse(
        target.entity,
        tractor_impulse(def, origin, target.position, ctx.delta, ctx.time_scale),
    );
}

/// One idle tick: strength decays toward zero, heating resets.
pub fn idle(state: &mut TurretState, delta: f32) {
    state.any = false;
    state.heating = 0.0;
    state.strength = lerp_delta(state.strength, 0.0, STRENGTH_SMOOTHING, delta);
}

/// Impulse on the target: the target-to-turret vector with its length
/// limited to `(force + (1 - dist/range) * scaled_force) * delta * time_scale`.
/// The impulse always pulls; a negative limit only sets its magnitude.
pub fn tractor_impulse(
    def: &TurretDefinition,
    origin: Vec2,
    target: Vec2,
    delta: f32,
    time_scale: f32,
) -> Vec2 {
    let to_turret = origin - target;
    let dist = to_turret.length();
    let max = (def.force + (1.0 - dist / def.range) * def.scaled_force) * delta * time_scale;
    limit(to_turret, max)
}
