//! Dynamical state and the simulation controller
//!
//! `PendulumState` is the phase-space point; `Simulation` owns it together
//! with the two trail buffers and the derived bob positions, so the host
//! has a single object to tick, read, and reset.

use glam::DVec2;

use super::params::SimulationParameters;
use super::trail::TrailBuffer;
use crate::bob_position;
use crate::consts::{INITIAL_ANGLE1, INITIAL_ANGLE2_OFFSET};

/// Angles and angular velocities of both rods
///
/// Angles are radians from the downward vertical and are never wrapped;
/// velocities are radians per tick. Mutated only by `advance()` and reset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendulumState {
    pub angle1: f64,
    pub angle2: f64,
    pub angular_vel1: f64,
    pub angular_vel2: f64,
}

impl PendulumState {
    /// The documented starting condition: first rod horizontal, second rod
    /// offset half a radian past it, both at rest
    pub fn initial() -> Self {
        Self {
            angle1: INITIAL_ANGLE1,
            angle2: INITIAL_ANGLE1 + INITIAL_ANGLE2_OFFSET,
            angular_vel1: 0.0,
            angular_vel2: 0.0,
        }
    }

    pub fn angles(&self) -> (f64, f64) {
        (self.angle1, self.angle2)
    }

    /// False once a degenerate parameter set has blown the state up;
    /// non-finite values never recover on their own
    pub fn is_finite(&self) -> bool {
        self.angle1.is_finite()
            && self.angle2.is_finite()
            && self.angular_vel1.is_finite()
            && self.angular_vel2.is_finite()
    }
}

impl Default for PendulumState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Everything the simulation loop owns
///
/// The pivot sits at the origin of the render frame; y grows downward.
/// Bob positions are refreshed from the live parameters every tick, so a
/// length change moves the bobs even while paused.
#[derive(Debug, Clone)]
pub struct Simulation {
    pub state: PendulumState,
    pub trail1: TrailBuffer,
    pub trail2: TrailBuffer,
    pub bob1: DVec2,
    pub bob2: DVec2,
    /// Completed `advance()` calls since start or last reset
    pub time_ticks: u64,
}

impl Simulation {
    /// New simulation at the initial condition with empty trails
    pub fn new(trail_capacity: usize) -> Self {
        let mut sim = Self {
            state: PendulumState::initial(),
            trail1: TrailBuffer::new(trail_capacity),
            trail2: TrailBuffer::new(trail_capacity),
            bob1: DVec2::ZERO,
            bob2: DVec2::ZERO,
            time_ticks: 0,
        };
        sim.derive_positions(&SimulationParameters::default());
        sim
    }

    /// Reinitialize state and discard both trails as one operation
    pub fn reset(&mut self, params: &SimulationParameters) {
        self.state = PendulumState::initial();
        self.trail1.reset();
        self.trail2.reset();
        self.time_ticks = 0;
        self.derive_positions(params);
    }

    /// Recompute bob positions from the current angles and rod lengths.
    /// The second bob chains off the first.
    pub fn derive_positions(&mut self, params: &SimulationParameters) {
        self.bob1 = bob_position(DVec2::ZERO, self.state.angle1, params.length1);
        self.bob2 = bob_position(self.bob1, self.state.angle2, params.length2);
    }

    pub fn angles(&self) -> (f64, f64) {
        self.state.angles()
    }

    pub fn bob_positions(&self) -> (DVec2, DVec2) {
        (self.bob1, self.bob2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_initial_condition() {
        let state = PendulumState::initial();
        assert_eq!(state.angle1, FRAC_PI_2);
        assert_eq!(state.angle2, FRAC_PI_2 + 0.5);
        assert_eq!(state.angular_vel1, 0.0);
        assert_eq!(state.angular_vel2, 0.0);
    }

    #[test]
    fn test_reset_restores_initial_and_clears_trails() {
        let params = SimulationParameters::default();
        let mut sim = Simulation::new(100);
        sim.state.angle1 = 3.0;
        sim.state.angular_vel2 = -0.4;
        sim.trail1.append(DVec2::new(10.0, 10.0).into());
        sim.trail2.append(DVec2::new(-5.0, 2.0).into());
        sim.time_ticks = 42;

        sim.reset(&params);
        assert_eq!(sim.state, PendulumState::initial());
        assert!(sim.trail1.is_empty());
        assert!(sim.trail2.is_empty());
        assert_eq!(sim.time_ticks, 0);
    }

    #[test]
    fn test_derived_positions_chain() {
        let params = SimulationParameters::default();
        let mut sim = Simulation::new(100);
        sim.derive_positions(&params);

        // angle1 = pi/2: first rod horizontal, bob1 at (l1, ~0)
        assert!((sim.bob1.x - params.length1).abs() < 1e-9);
        assert!(sim.bob1.y.abs() < 1e-9);
        // second bob hangs off the first
        let expected = bob_position(sim.bob1, sim.state.angle2, params.length2);
        assert_eq!(sim.bob2, expected);
    }

    #[test]
    fn test_bob_position_rest() {
        // angle 0 hangs straight down (y grows downward)
        let p = bob_position(DVec2::ZERO, 0.0, 200.0);
        assert!(p.x.abs() < 1e-12);
        assert!((p.y - 200.0).abs() < 1e-12);
    }
}
