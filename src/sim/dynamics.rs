//! Double pendulum equations of motion
//!
//! Closed-form angular accelerations for two point masses on rigid rods,
//! integrated with semi-implicit Euler. The step size is implicitly one
//! unit per `advance()` call; the host calls it once per frame at the
//! fixed tick rate, so velocities are radians per tick. There is no dt
//! parameter to rescale, which keeps runs bit-for-bit reproducible.

use super::params::SimulationParameters;
use super::state::PendulumState;

/// Angular accelerations of both rods at the given phase-space point.
///
/// The shared denominator `2*m1 + m2 - m2*cos(2*a1 - 2*a2)` is bounded
/// below by `2*m1`, so it cannot reach zero for positive masses; callers
/// feeding unclamped, degenerate parameters get non-finite output that
/// then propagates through the state.
pub fn accelerations(state: &PendulumState, params: &SimulationParameters) -> (f64, f64) {
    let (a1, a2) = (state.angle1, state.angle2);
    let (v1, v2) = (state.angular_vel1, state.angular_vel2);
    let (m1, m2) = (params.mass1, params.mass2);
    let (l1, l2) = (params.length1, params.length2);
    let g = params.gravity;

    let den = 2.0 * m1 + m2 - m2 * (2.0 * a1 - 2.0 * a2).cos();

    let gravity1 = -g * (2.0 * m1 + m2) * a1.sin() - m2 * g * (a1 - 2.0 * a2).sin();
    let coupling1 = -2.0 * (a1 - a2).sin() * m2 * (v2 * v2 * l2 + v1 * v1 * l1 * (a1 - a2).cos());
    let accel1 = (gravity1 + coupling1) / (l1 * den);

    let coupling2 = v1 * v1 * l1 * (m1 + m2)
        + g * (m1 + m2) * a1.cos()
        + v2 * v2 * l2 * m2 * (a1 - a2).cos();
    let accel2 = (2.0 * (a1 - a2).sin() * coupling2) / (l2 * den);

    (accel1, accel2)
}

/// Advance the state by one tick.
///
/// Semi-implicit Euler: velocities are updated first and the angles then
/// move by the *updated* velocities within the same step.
pub fn advance(state: &mut PendulumState, params: &SimulationParameters) {
    let (accel1, accel2) = accelerations(state, params);

    state.angular_vel1 += accel1;
    state.angular_vel2 += accel2;
    state.angle1 += state.angular_vel1;
    state.angle2 += state.angular_vel2;
}

/// Total mechanical energy (kinetic + potential) of the system.
///
/// Velocities are per-tick, so the result is in per-tick units as well;
/// useful as a drift diagnostic, not as an exact conserved quantity under
/// Euler integration. Potential zero is at the pivot.
pub fn mechanical_energy(state: &PendulumState, params: &SimulationParameters) -> f64 {
    let (a1, a2) = (state.angle1, state.angle2);
    let (v1, v2) = (state.angular_vel1, state.angular_vel2);
    let (m1, m2) = (params.mass1, params.mass2);
    let (l1, l2) = (params.length1, params.length2);
    let g = params.gravity;

    let rim1 = l1 * v1;
    let rim2 = l2 * v2;
    let kinetic = 0.5 * m1 * rim1 * rim1
        + 0.5 * m2 * (rim1 * rim1 + rim2 * rim2 + 2.0 * rim1 * rim2 * (a1 - a2).cos());
    // y grows downward, so a hanging bob is *below* the pivot at lower potential
    let potential = -(m1 + m2) * g * l1 * a1.cos() - m2 * g * l2 * a2.cos();

    kinetic + potential
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_golden_first_step() {
        // From the documented initial condition with the default sliders
        // (m1 = m2 = 20, l1 = l2 = 200, g = 1) the first-rod numerator
        // algebraically collapses against the denominator, leaving exactly
        // -1/l1. Reference values recorded from a trusted f64 run.
        let state = PendulumState::initial();
        let params = SimulationParameters::default();

        let (accel1, accel2) = accelerations(&state, &params);
        assert!((accel1 - (-0.005)).abs() < 1e-12, "accel1 = {accel1}");
        assert!(accel2.abs() < 1e-15, "accel2 = {accel2}");
    }

    #[test]
    fn test_advance_is_semi_implicit() {
        // The angle must move by the freshly updated velocity, not the old
        // (zero) one: one step from rest already displaces both angles.
        let mut state = PendulumState::initial();
        let params = SimulationParameters::default();
        let before = state;

        advance(&mut state, &params);
        assert!((state.angular_vel1 - (-0.005)).abs() < 1e-12);
        assert_eq!(state.angle1, before.angle1 + state.angular_vel1);
        assert_eq!(state.angle2, before.angle2 + state.angular_vel2);
    }

    #[test]
    fn test_determinism_bit_identical() {
        let params = SimulationParameters {
            mass1: 35.0,
            mass2: 12.0,
            length1: 180.0,
            length2: 260.0,
            gravity: 2.5,
        };
        let mut state_a = PendulumState::initial();
        let mut state_b = PendulumState::initial();

        for _ in 0..1000 {
            advance(&mut state_a, &params);
            advance(&mut state_b, &params);
        }
        // Bitwise equality, not approximate
        assert_eq!(state_a, state_b);
    }

    #[test]
    fn test_energy_stays_bounded() {
        // Coarse sign-error guard: over 10k ticks from the documented
        // initial condition the total energy must stay finite and below the
        // potential-energy scale of the system. Euler drift oscillates well
        // inside this envelope; a sign error in the equations blows past it
        // within a few hundred ticks.
        let params = SimulationParameters::default();
        let mut state = PendulumState::initial();
        let bound =
            2.0 * (params.mass1 + params.mass2) * params.gravity * (params.length1 + params.length2);

        for tick in 0..10_000 {
            advance(&mut state, &params);
            assert!(state.is_finite(), "state went non-finite at tick {tick}");
            let energy = mechanical_energy(&state, &params);
            assert!(energy < bound, "energy {energy} exceeded {bound} at tick {tick}");
        }
    }

    #[test]
    fn test_degenerate_params_propagate_non_finite() {
        // advance() itself performs no guarding: zero masses make the
        // shared denominator exactly zero, the 0/0 becomes NaN, and the
        // NaN never washes out of the state again.
        let mut state = PendulumState::initial();
        let params = SimulationParameters {
            mass1: 0.0,
            mass2: 0.0,
            length1: 200.0,
            length2: 200.0,
            gravity: 1.0,
        };

        advance(&mut state, &params);
        assert!(!state.is_finite());
        advance(&mut state, &params);
        assert!(!state.is_finite());
    }

    #[test]
    fn test_rest_state_stays_at_rest() {
        // Both rods hanging straight down is a fixed point
        let mut state = PendulumState {
            angle1: 0.0,
            angle2: 0.0,
            angular_vel1: 0.0,
            angular_vel2: 0.0,
        };
        let params = SimulationParameters::default();

        for _ in 0..100 {
            advance(&mut state, &params);
        }
        assert_eq!(state.angle1, 0.0);
        assert_eq!(state.angle2, 0.0);
    }

    #[test]
    fn test_angles_accumulate_unwrapped() {
        // Angles are never wrapped into [0, 2pi); give the system enough
        // energy to spin and the first angle should eventually leave that
        // interval entirely.
        let mut state = PendulumState::initial();
        state.angular_vel1 = 0.3;
        state.angular_vel2 = 0.3;
        let params = SimulationParameters::default();

        let mut left_interval = false;
        for _ in 0..5_000 {
            advance(&mut state, &params);
            if state.angle1 > std::f64::consts::TAU || state.angle1 < 0.0 {
                left_interval = true;
                break;
            }
        }
        assert!(left_interval);
    }
}
