//! Fundamental geometric and simulation types.
//!
//! Angles are in degrees, counter-clockwise from +X, normalized to
//! `[0, 360)`. Time is measured in tick-units (1.0 = one host tick).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Accumulated time in tick-units.
    pub elapsed: f32,
}

impl SimTime {
    /// Advance by one tick of the given delta.
    pub fn advance(&mut self, delta: f32) {
        self.tick += 1;
        self.elapsed += delta;
    }
}

/// RGBA color, components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
    pub const LIGHT_ORANGE: Color = Color::rgb(0.97, 0.69, 0.40);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Linear blend toward `other` by `t` (clamped to `[0, 1]`).
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    pub fn with_alpha(self, a: f32) -> Color {
        Color { a, ..self }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

/// Angle from `from` to `to` in degrees, `[0, 360)`.
pub fn angle_to(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x).to_degrees().rem_euclid(360.0)
}

/// Shortest angular distance between two headings, `[0, 180]`.
pub fn angle_dist(a: f32, b: f32) -> f32 {
    let diff = (a - b).rem_euclid(360.0);
    diff.min(360.0 - diff)
}

/// Whether heading `a` is within `margin` degrees of `b`.
pub fn angle_within(a: f32, b: f32, margin: f32) -> bool {
    angle_dist(a, b) <= margin
}

/// Turn `angle` toward `to` along the shorter arc by at most `speed` degrees.
pub fn move_toward(angle: f32, to: f32, speed: f32) -> f32 {
    if angle_dist(angle, to) < speed {
        return to.rem_euclid(360.0);
    }
    let ccw = (to - angle).rem_euclid(360.0);
    let step = if ccw <= 180.0 { speed } else { -speed };
    (angle + step).rem_euclid(360.0)
}

/// Offset of length `len` along heading `angle`.
pub fn trns(angle: f32, len: f32) -> Vec2 {
    let rad = angle.to_radians();
    Vec2::new(rad.cos() * len, rad.sin() * len)
}

/// Delta-weighted exponential approach: moves `from` toward `to` by
/// `progress` per tick-unit, never overshooting.
pub fn lerp_delta(from: f32, to: f32, progress: f32, delta: f32) -> f32 {
    from + (to - from) * (progress * delta).clamp(0.0, 1.0)
}

/// Absolute sine wave in `[0, mag]` with period `scl * 4π`.
pub fn absin(t: f32, scl: f32, mag: f32) -> f32 {
    ((t / (scl * 2.0)).sin() * mag + mag) / 2.0
}

/// Clamp a vector's length to `|max|` (no-op if already shorter). The
/// direction is always kept.
pub fn limit(v: Vec2, max: f32) -> Vec2 {
    let max = max.abs();
    let len2 = v.length_squared();
    if len2 > max * max && len2 > 0.0 {
        v * (max / len2.sqrt())
    } else {
        v
    }
}
