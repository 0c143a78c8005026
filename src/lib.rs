//! Gapflight - a flyer threading gaps between scrolling barriers
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, obstacles, game loop)
//! - `renderer`: Render surface collaborator interface
//! - `platform`: Input abstraction
//! - `settings`: Tunables, validation and JSON loading

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{ConfigError, Settings};

/// Game configuration constants
///
/// All distances are percentages of the play field. `x` grows to the right,
/// `y` grows downward.
pub mod consts {
    /// Field extent on both axes
    pub const FIELD_MIN: f32 = 0.0;
    pub const FIELD_MAX: f32 = 100.0;

    /// Flyer starts mid-field until the first flap
    pub const FLYER_START: f32 = 50.0;
    /// Flyer box: fixed column, fixed size
    pub const FLYER_LEFT: f32 = 52.5;
    pub const FLYER_WIDTH: f32 = 5.0;
    pub const FLYER_HEIGHT: f32 = 5.0;

    /// Flight time added per flight tick
    pub const FLIGHT_STEP: f32 = 0.5;
    /// Ascent curve: rise(t) = FLIGHT_CURVE_A * t^2 + FLIGHT_CURVE_B * t
    pub const FLIGHT_CURVE_A: f32 = -0.4;
    pub const FLIGHT_CURVE_B: f32 = 4.0;

    /// Barrier width (both barriers of a pair share it)
    pub const BARRIER_WIDTH: f32 = 10.0;

    /// Reference tunables (overridable through `Settings`)
    pub const REFRESH_INTERVAL_MS: u64 = 25;
    pub const FLIGHT_INTERVAL_MS: u64 = 25;
    pub const SPAWN_MULTIPLIER: u32 = 120;
    pub const GAP_SIZE: f32 = 20.0;
    pub const SPAWN_OFFSET: f32 = 110.0;
    pub const SCORING_THRESHOLD: f32 = 42.0;
    pub const REMOVAL_THRESHOLD: f32 = -10.0;
    pub const SCROLL_STEP: f32 = 0.5;
}

/// Height risen after `t` units of flight time
#[inline]
pub fn flight_rise(t: f32) -> f32 {
    consts::FLIGHT_CURVE_A * t * t + consts::FLIGHT_CURVE_B * t
}
