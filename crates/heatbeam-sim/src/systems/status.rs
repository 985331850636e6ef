//! Status effect expiry for the reference host.

use hecs::World;

use heatbeam_core::components::StatusEffects;

/// Count down status durations and drop expired effects.
pub fn run(world: &mut World, delta: f32) {
    for (_entity, effects) in world.query_mut::<&mut StatusEffects>() {
        for entry in effects.active.iter_mut() {
            entry.remaining -= delta;
        }
        effects.active.retain(|e| e.remaining > 0.0);
    }
}

#[cfg(test)]
mod tests {
    use heatbeam_core::enums::StatusEffect;

    use super::*;

    #[test]
    fn effects_expire_after_duration() {
        let mut world = World::new();
        let mut effects = StatusEffects::default();
        effects.apply(StatusEffect::Slow, 3.0);
        effects.apply(StatusEffect::Wet, 10.0);
        let unit = world.spawn((effects,));

        for _ in 0..3 {
            run(&mut world, 1.0);
        }

        let effects = world.get::<&StatusEffects>(unit).unwrap();
        assert!(!effects.has(StatusEffect::Slow));
        assert_eq!(effects.remaining(StatusEffect::Wet), Some(7.0));
    }
}
