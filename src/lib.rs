//! Neon Pendulum - a chaotic double pendulum with glowing trails
//!
//! Core modules:
//! - `sim`: Deterministic simulation (dynamics, trail history, tick loop)
//! - `scene`: Frame data handed to the renderer (rods, bobs, trails)
//! - `settings`: User preferences with JSON persistence

pub mod scene;
pub mod settings;
pub mod sim;

pub use settings::{QualityPreset, Settings};

use glam::DVec2;

/// Simulation configuration constants
pub mod consts {
    /// Target tick rate (one `advance()` per rendered frame)
    pub const TICK_RATE: u32 = 60;

    /// Default trail capacity per bob (points retained before eviction)
    pub const DEFAULT_TRAIL_CAPACITY: usize = 6000;
    /// Per-axis distance below which a new trail point is discarded
    pub const TRAIL_DECIMATION: f64 = 1.0;

    /// Initial angle of the first rod (radians from downward vertical)
    pub const INITIAL_ANGLE1: f64 = std::f64::consts::FRAC_PI_2;
    /// Offset of the second rod's initial angle relative to the first
    pub const INITIAL_ANGLE2_OFFSET: f64 = 0.5;
}

/// Position of a bob hanging from `origin` at `angle` on a rod of `length`.
///
/// Angles are measured from the downward vertical; y grows downward, so a
/// resting pendulum (angle 0) hangs at `origin + (0, length)`.
#[inline]
pub fn bob_position(origin: DVec2, angle: f64, length: f64) -> DVec2 {
    DVec2::new(origin.x + length * angle.sin(), origin.y + length * angle.cos())
}
