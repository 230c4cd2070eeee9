//! Neon Pendulum entry point
//!
//! Headless host: drives the simulation at the fixed tick rate and logs
//! its progress. A windowed frontend plugs into the same `tick()` /
//! `scene::build()` pair from its frame callback.

use std::time::{Duration, Instant};

use neon_pendulum::consts::TICK_RATE;
use neon_pendulum::sim::{Simulation, TickInput, mechanical_energy, tick};
use neon_pendulum::{Settings, scene};

/// Seconds of simulated time the headless demo covers
const DEMO_SECONDS: u64 = 10;

fn main() {
    env_logger::init();
    log::info!("Neon Pendulum starting (headless demo)...");

    let settings = Settings::load();
    let mut sim = Simulation::new(settings.effective_trail_capacity());
    let mut input = TickInput::default();

    let tick_interval = Duration::from_secs_f64(1.0 / TICK_RATE as f64);
    let total_ticks = DEMO_SECONDS * TICK_RATE as u64;
    let started = Instant::now();
    let mut next_tick = Instant::now();
    let mut warned_non_finite = false;

    for n in 0..total_ticks {
        // Exercise the combined reset halfway through the run
        input.reset = n == total_ticks / 2;
        if input.reset {
            log::info!("reset triggered at tick {n}");
        }

        tick(&mut sim, &input);

        if !sim.state.is_finite() && !warned_non_finite {
            log::warn!("simulation state went non-finite at tick {n}");
            warned_non_finite = true;
        }

        if (n + 1) % TICK_RATE as u64 == 0 {
            let (angle1, angle2) = sim.angles();
            let energy = mechanical_energy(&sim.state, &input.params.clamped());
            log::info!(
                "t={:>2}s angles=({angle1:+.3}, {angle2:+.3}) trails=({}, {}) energy={energy:.1}",
                (n + 1) / TICK_RATE as u64,
                sim.trail1.len(),
                sim.trail2.len(),
            );
        }

        next_tick += tick_interval;
        if let Some(wait) = next_tick.checked_duration_since(Instant::now()) {
            std::thread::sleep(wait);
        }
    }

    let frame = scene::build(&sim, &input.params, started.elapsed().as_secs_f64());
    log::info!(
        "final frame: {} + {} trail dots, bob2 at ({:.1}, {:.1})",
        frame.trail1.len(),
        frame.trail2.len(),
        frame.bobs[1].pos.x,
        frame.bobs[1].pos.y,
    );

    settings.save();
}
