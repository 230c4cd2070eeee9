//! Physical parameters supplied by the host every tick
//!
//! The UI owns the slider values; the simulation just reads whatever the
//! host hands it each tick. Out-of-range values are clamped at the
//! configuration boundary before the dynamics ever see them.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Slider range for bob masses
pub const MASS_RANGE: RangeInclusive<f64> = 5.0..=80.0;
/// Slider range for rod lengths
pub const LENGTH_RANGE: RangeInclusive<f64> = 50.0..=350.0;
/// Slider range for gravitational acceleration
pub const GRAVITY_RANGE: RangeInclusive<f64> = 0.1..=5.0;

/// Tunable physical parameters of the double pendulum
///
/// Re-read from the host's controls on every tick; carries no identity or
/// history. Serializable so hosts can store slider presets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Mass of the first bob
    pub mass1: f64,
    /// Mass of the second bob
    pub mass2: f64,
    /// Length of the first rod
    pub length1: f64,
    /// Length of the second rod
    pub length2: f64,
    /// Gravitational acceleration
    pub gravity: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            mass1: 20.0,
            mass2: 20.0,
            length1: 200.0,
            length2: 200.0,
            gravity: 1.0,
        }
    }
}

impl SimulationParameters {
    /// Copy with every field clamped into its slider range.
    ///
    /// Keeping masses and lengths strictly positive also keeps the
    /// acceleration denominators bounded away from zero.
    pub fn clamped(&self) -> Self {
        Self {
            mass1: self.mass1.clamp(*MASS_RANGE.start(), *MASS_RANGE.end()),
            mass2: self.mass2.clamp(*MASS_RANGE.start(), *MASS_RANGE.end()),
            length1: self.length1.clamp(*LENGTH_RANGE.start(), *LENGTH_RANGE.end()),
            length2: self.length2.clamp(*LENGTH_RANGE.start(), *LENGTH_RANGE.end()),
            gravity: self.gravity.clamp(*GRAVITY_RANGE.start(), *GRAVITY_RANGE.end()),
        }
    }

    /// True when every field already lies within its slider range
    pub fn in_range(&self) -> bool {
        MASS_RANGE.contains(&self.mass1)
            && MASS_RANGE.contains(&self.mass2)
            && LENGTH_RANGE.contains(&self.length1)
            && LENGTH_RANGE.contains(&self.length2)
            && GRAVITY_RANGE.contains(&self.gravity)
    }
}
