//! Fixed-rate simulation tick
//!
//! One call per rendered frame. The host samples its controls into a
//! `TickInput`, the tick applies it, and the renderer reads the resulting
//! positions and trails.

use super::dynamics::advance;
use super::params::SimulationParameters;
use super::state::Simulation;

/// Everything the host supplies for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Current slider values, re-sampled every tick
    pub params: SimulationParameters,
    /// Skip the physics step this tick (trails keep recording the frozen
    /// position; decimation collapses the duplicates)
    pub paused: bool,
    /// Reinitialize state and discard both trails before anything else
    pub reset: bool,
}

/// Advance the simulation by one tick.
///
/// Order per tick: reset if requested, clamp parameters, integrate unless
/// paused, derive bob positions from the current angles and the *live* rod
/// lengths, then record both positions into the trails. A reset tick falls
/// through to a normal step, so the first rendered frame after a reset is
/// already one step into the fresh run.
pub fn tick(sim: &mut Simulation, input: &TickInput) {
    let params = input.params.clamped();

    if input.reset {
        sim.reset(&params);
    }

    if !input.paused {
        advance(&mut sim.state, &params);
        sim.time_ticks += 1;
    }

    sim.derive_positions(&params);
    sim.trail1.append(sim.bob1.into());
    sim.trail2.append(sim.bob2.into());
}
