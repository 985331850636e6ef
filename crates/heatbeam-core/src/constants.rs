//! Simulation constants and tuning parameters.

/// Host tick rate (Hz). One tick-unit of delta is one tick at this rate.
pub const TICKS_PER_SECOND: f32 = 60.0;

/// World units per tile.
pub const TILE_SIZE: f32 = 8.0;

/// Units farther than this from the origin are despawned by the host.
pub const WORLD_RADIUS: f32 = 4096.0;

// --- Targeting ---

/// Efficiency a turret must exceed to hold an engagement.
pub const ENGAGE_EFFICIENCY_FLOOR: f32 = 0.02;

// --- Beam ---

/// Per-tick smoothing factor for beam strength (scaled by delta).
pub const STRENGTH_SMOOTHING: f32 = 0.1;

// --- Thermal ---

/// `heat²` at or above this value snaps heat to [`HEAT_CLAMP_VALUE`].
pub const HEAT_CLAMP_TRIGGER: f32 = 150.0;

/// Value heat is forced to by the clamp rule.
pub const HEAT_CLAMP_VALUE: f32 = 100.0;

/// Heat is divided by this to obtain the heat factor used in efficiency.
pub const HEAT_FACTOR_SCALE: f32 = 100.0;

/// Cooling effect chance per unit of liquid consumed.
pub const COOL_EFFECT_CHANCE: f32 = 0.06;

// --- Rendering ---

/// Flash-time ramp multiplier above the flash threshold.
pub const FLASH_RAMP: f32 = 5.4;

/// Glow overlay opacity.
pub const GLOW_ALPHA: f32 = 0.3;

/// Period scale of the glow color oscillation.
pub const GLOW_BLEND_SCALE: f32 = 9.0;

/// Period scale of the laser color blend.
pub const LASER_BLEND_SCALE: f32 = 4.0;

/// Peak alpha of the laser color blend.
pub const LASER_BLEND_MAGNITUDE: f32 = 0.6;

/// Clip size every block starts from before range is taken into account.
pub const BASE_CLIP_SIZE: f32 = 0.0;

// --- Units ---

/// Default unit drag (fraction of velocity lost per tick-unit).
pub const DEFAULT_UNIT_DRAG: f32 = 0.1;

/// Default unit mass for impulse application.
pub const DEFAULT_UNIT_MASS: f32 = 1.0;
