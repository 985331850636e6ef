//! Thermal model: coolant consumption, the heating accumulator and the heat
//! clamp.
//!
//! `heat` is only ever changed here by the clamp rule; the persistence codec
//! is its only other writer.

use glam::Vec2;
use log::trace;
use rand::Rng;

use heatbeam_core::constants::{COOL_EFFECT_CHANCE, HEAT_CLAMP_TRIGGER, HEAT_CLAMP_VALUE};
use heatbeam_core::definition::TurretDefinition;
use heatbeam_core::events::EffectEvent;

use crate::host::{LiquidReservoir, TickContext};
use crate::turret::TurretState;

/// Run the thermal model for one tick: clamp heat, then consume coolant.
pub fn run(
    state: &mut TurretState,
    def: &TurretDefinition,
    liquids: &mut dyn LiquidReservoir,
    origin: Vec2,
    ctx: &mut TickContext<'_>,
) {
    state.heat = clamp_heat(state.heat);

    match consume_coolant(def, liquids, ctx.delta) {
        Some(used) => {
            let chance = f64::from(COOL_EFFECT_CHANCE * used).clamp(0.0, 1.0);
            if ctx.rng.gen_bool(chance) {
                let half = def.world_size() / 2.0;
                let offset = Vec2::new(
                    ctx.rng.gen_range(-half..=half),
                    ctx.rng.gen_range(-half..=half),
                );
                ctx.effects.push(EffectEvent::Cool {
                    at: origin + offset,
                });
            }
            state.coolant = coolant_multiplier(def, liquids, used);
        }
        // No intake, or nothing in the reservoir to draw from.
        None => state.coolant = 1.0,
    }

    trace!(
        "thermal: heat {:.2} heating {:.2} coolant {:.3}",
        state.heat,
        state.heating,
        state.coolant
    );
}

/// `heat² >= 150` snaps heat to 100; anything else passes through.
pub fn clamp_heat(heat: f32) -> f32 {
    if heat * heat >= HEAT_CLAMP_TRIGGER {
        HEAT_CLAMP_VALUE
    } else {
        heat
    }
}

/// Withdraw coolant from the reservoir. Returns the amount used, or `None`
/// when the turret has no coolant intake or the reservoir holds no liquid.
pub fn consume_coolant(
    def: &TurretDefinition,
    liquids: &mut dyn LiquidReservoir,
    delta: f32,
) -> Option<f32> {
    let consumer = def.coolant?;
    let liquid = liquids.current()?.clone();

    let available = liquids.get(&liquid);
    let wanted = ((1.0 / def.coolant_multiplier) / liquid.heat_capacity).max(0.0);
    let used = available.min(consumer.amount * delta).min(wanted).max(0.0);

    liquids.remove(&liquid, used);
    Some(used)
}

fn coolant_multiplier(def: &TurretDefinition, liquids: &dyn LiquidReservoir, used: f32) -> f32 {
    match liquids.current() {
        Some(liquid) => 1.0 + used * liquid.heat_capacity * def.coolant_multiplier,
        None => 1.0,
    }
}

/// Accumulate engaged time.
pub fn heat_up(state: &mut TurretState, delta: f32) {
    state.heating += delta;
}
