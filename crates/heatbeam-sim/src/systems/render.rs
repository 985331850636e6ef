//! Render descriptor: derives draw primitives from a committed snapshot.
//!
//! Never touches simulation state. The glow's flash time is render-only
//! state and lives in a `GlowClock` owned by the render pass.

use glam::Vec2;

use heatbeam_core::constants::{
    FLASH_RAMP, GLOW_ALPHA, GLOW_BLEND_SCALE, LASER_BLEND_MAGNITUDE, LASER_BLEND_SCALE,
};
use heatbeam_core::definition::TurretDefinition;
use heatbeam_core::enums::Layer;
use heatbeam_core::state::{DrawCommand, LaserRegions, TurretSnapshot};
use heatbeam_core::types::{absin, angle_to, trns, Color};

/// Accumulated flash time for one turret's heat glow.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GlowClock {
    pub flash: f32,
}

/// Frame timing seen by the render pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameTime {
    /// Global time in tick-units, drives the laser color blend.
    pub time: f32,
    pub delta: f32,
}

/// Build the draw list for one turret.
pub fn describe(
    snap: &TurretSnapshot,
    def: &TurretDefinition,
    clock: &mut GlowClock,
    frame: FrameTime,
) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(5);
    let body_rotation = snap.rotation - 90.0;
    let half = def.size as f32 / 2.0;

    commands.push(DrawCommand::Sprite {
        region: def.base_region(),
        position: snap.position,
        rotation: 0.0,
        layer: Layer::Block,
    });
    commands.push(DrawCommand::Shadow {
        region: def.body_region(),
        position: snap.position - Vec2::splat(half),
        rotation: body_rotation,
    });
    commands.push(DrawCommand::Sprite {
        region: def.body_region(),
        position: snap.position,
        rotation: body_rotation,
        layer: Layer::Turret,
    });

    if snap.any {
        let bearing = angle_to(snap.position, snap.last_target);
        let cap = def.laser_cap_region();
        commands.push(DrawCommand::Laser {
            team: snap.team,
            regions: LaserRegions {
                body: def.laser_region(),
                start: cap.clone(),
                end: cap,
            },
            from: snap.position + trns(bearing, def.shoot_length),
            to: snap.last_target,
            width: laser_width(snap, def),
            mix: def
                .laser_color
                .with_alpha(absin(frame.time, LASER_BLEND_SCALE, LASER_BLEND_MAGNITUDE)),
            layer: Layer::Bullet,
        });
    }

    if snap.heat > def.flash_threshold {
        clock.flash += flash_rate(snap.heat, def.flash_threshold) * frame.delta;
        let blend = absin(clock.flash, GLOW_BLEND_SCALE, 1.0);
        commands.push(DrawCommand::Glow {
            region: def.body_region(),
            position: snap.position,
            rotation: body_rotation,
            color: Color::RED.lerp(Color::YELLOW, blend).with_alpha(GLOW_ALPHA),
            layer: Layer::Effect,
        });
    }

    commands
}

/// `strength · efficiency · laser_width`.
pub fn laser_width(snap: &TurretSnapshot, def: &TurretDefinition) -> f32 {
    snap.strength * snap.efficiency * def.laser_width
}

/// Flash-time advance per tick-unit above the threshold.
pub fn flash_rate(heat: f32, threshold: f32) -> f32 {
    1.0 + ((heat - threshold) / (1.0 - threshold)) * FLASH_RAMP
}
