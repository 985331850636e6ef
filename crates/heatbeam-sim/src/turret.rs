//! The heat tractor-beam turret: per-instance state and the tick pipeline.
//!
//! `HeatTractorTurret` composes a host `BaseStructure` and runs the turret
//! systems in a fixed order each tick:
//!
//! 1. base structure update
//! 2. retarget timer and nearest-enemy search
//! 3. thermal model (heat clamp, coolant)
//! 4. continuous target validation
//! 5. beam controller (engaged or idle)

use std::sync::Arc;

use glam::Vec2;
use log::debug;

use heatbeam_core::constants::HEAT_FACTOR_SCALE;
use heatbeam_core::definition::TurretDefinition;
use heatbeam_core::enums::BeamPhase;
use heatbeam_core::state::{BarView, TurretSnapshot};
use heatbeam_core::types::Color;

use crate::host::{BaseStructure, TickContext, UnitRegistry};
use crate::systems::{beam, targeting, thermal};

/// Recurring timer measured in tick-units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Interval {
    elapsed: f32,
}

impl Interval {
    /// A timer that fires on its first check.
    pub fn primed(period: f32) -> Self {
        Self { elapsed: period }
    }

    /// Advance by `delta`; returns true and restarts if `period` has elapsed.
    pub fn check(&mut self, delta: f32, period: f32) -> bool {
        self.elapsed += delta;
        if self.elapsed >= period {
            self.elapsed = 0.0;
            true
        } else {
            false
        }
    }
}

/// Mutable per-instance turret state.
#[derive(Debug, Clone)]
pub struct TurretState {
    /// Current target; an identifier only, resolved through the registry.
    pub target: Option<hecs::Entity>,
    /// Last known target position, kept for drawing the beam.
    pub last_target: Vec2,
    /// Smoothed beam intensity in `[0, 1]`.
    pub strength: f32,
    /// Time spent continuously engaged; zero whenever idle.
    pub heating: f32,
    /// Thermal factor, persisted.
    pub heat: f32,
    /// Coolant throughput multiplier, always >= 1.
    pub coolant: f32,
    /// Whether the beam hit something this tick.
    pub any: bool,
    /// Heading in degrees.
    pub rotation: f32,
    pub phase: BeamPhase,
    pub retarget: Interval,
}

impl TurretState {
    pub fn new(definition: &TurretDefinition) -> Self {
        Self {
            target: None,
            last_target: Vec2::ZERO,
            strength: 0.0,
            heating: 0.0,
            heat: definition.initial_heat,
            coolant: 1.0,
            any: false,
            rotation: 90.0,
            phase: BeamPhase::Idle,
            retarget: Interval::primed(definition.retarget_time),
        }
    }

    /// The heat bar tracks engaged time, not `heat`.
    pub fn heat_bar(&self) -> BarView {
        BarView {
            value: self.heating,
            color: Color::LIGHT_ORANGE,
        }
    }
}

/// Thermal contribution to efficiency.
pub fn heat_factor(heat: f32) -> f32 {
    heat / HEAT_FACTOR_SCALE
}

/// A placed turret on top of its base structure.
pub struct HeatTractorTurret<B: BaseStructure> {
    pub id: u32,
    pub definition: Arc<TurretDefinition>,
    pub base: B,
    pub state: TurretState,
}

impl<B: BaseStructure> HeatTractorTurret<B> {
    pub fn new(id: u32, definition: Arc<TurretDefinition>, base: B) -> Self {
        let state = TurretState::new(&definition);
        Self {
            id,
            definition,
            base,
            state,
        }
    }

    /// `base · coolant · heat/100`.
    pub fn efficiency(&self) -> f32 {
        self.base.efficiency() * self.state.coolant * heat_factor(self.state.heat)
    }

    /// Run one tick.
    pub fn update(&mut self, units: &mut dyn UnitRegistry, ctx: &mut TickContext<'_>) {
        self.base.update(ctx);

        let origin = self.base.position();
        let team = self.base.team();
        let def = Arc::clone(&self.definition);

        targeting::retarget(&mut self.state, &def, origin, team, &*units, ctx.delta);

        thermal::run(
            &mut self.state,
            &def,
            self.base.liquids_mut(),
            origin,
            ctx,
        );

        let efficiency = self.efficiency();
        let engaged = targeting::validate(&self.state, &def, origin, team, &*units, efficiency);

        let phase = match engaged {
            Some(target) => {
                beam::engage(
                    &mut self.state,
                    &def,
                    origin,
                    &target,
                    efficiency,
                    units,
                    ctx,
                );
                BeamPhase::Engaged
            }
            None => {
                beam::idle(&mut self.state, ctx.delta);
                BeamPhase::Idle
            }
        };

        if phase != self.state.phase {
            debug!(
                "turret {} {:?} -> {:?} (efficiency {:.3})",
                self.id, self.state.phase, phase, efficiency
            );
            self.state.phase = phase;
        }
    }

    /// Committed view for render passes and the host.
    pub fn snapshot(&self) -> TurretSnapshot {
        TurretSnapshot {
            id: self.id,
            team: self.base.team(),
            position: self.base.position(),
            rotation: self.state.rotation,
            phase: self.state.phase,
            any: self.state.any,
            last_target: self.state.last_target,
            strength: self.state.strength,
            efficiency: self.efficiency(),
            heat: self.state.heat,
            heating: self.state.heating,
            coolant: self.state.coolant,
        }
    }
}
