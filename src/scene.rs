//! Frame data handed to the renderer
//!
//! A `Scene` is everything the drawing layer needs for one frame: rod
//! segments, bob sprites sized from the masses, and per-point trail colors.
//! How the renderer composites it (glow layers, blending) is its own
//! business; the simulation side only describes the frame.

use glam::DVec2;

use crate::sim::{Simulation, SimulationParameters};

/// A rod drawn as a line segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rod {
    pub start: DVec2,
    pub end: DVec2,
}

/// A bob drawn as a filled disc with a wider glow halo
#[derive(Debug, Clone, Copy)]
pub struct Bob {
    pub pos: DVec2,
    pub radius: f64,
    pub glow_radius: f64,
    pub color: [f32; 3],
}

/// One colored trail point
#[derive(Debug, Clone, Copy)]
pub struct TrailDot {
    pub pos: DVec2,
    pub color: [f32; 3],
}

/// Complete per-frame draw description, pivot at the origin, y down
#[derive(Debug, Clone)]
pub struct Scene {
    pub rods: [Rod; 2],
    pub bobs: [Bob; 2],
    pub trail1: Vec<TrailDot>,
    pub trail2: Vec<TrailDot>,
}

/// Cycling palette: each channel is a phase-shifted sine mapped into [0, 1]
pub fn rainbow_color(phase: f64) -> [f32; 3] {
    [
        ((127.0 * phase.sin() + 128.0) / 255.0) as f32,
        ((127.0 * (phase + 2.0).sin() + 128.0) / 255.0) as f32,
        ((127.0 * (phase + 4.0).sin() + 128.0) / 255.0) as f32,
    ]
}

/// Build the frame for the current simulation state.
///
/// `time_secs` drives the palette cycle; trail points pick up a phase
/// offset by age so the colors shift along the trail.
pub fn build(sim: &Simulation, params: &SimulationParameters, time_secs: f64) -> Scene {
    let t = time_secs / 0.4;
    let (bob1, bob2) = sim.bob_positions();
    let pivot = DVec2::ZERO;

    Scene {
        rods: [
            Rod { start: pivot, end: bob1 },
            Rod { start: bob1, end: bob2 },
        ],
        bobs: [
            Bob {
                pos: bob1,
                radius: params.mass1 / 5.0,
                glow_radius: params.mass1 / 4.0,
                color: rainbow_color(t),
            },
            Bob {
                pos: bob2,
                radius: params.mass2 / 5.0,
                glow_radius: params.mass2 / 4.0,
                color: rainbow_color(t + 2.0),
            },
        ],
        trail1: sim
            .trail1
            .iter()
            .enumerate()
            .map(|(i, p)| TrailDot {
                pos: p.pos,
                color: rainbow_color(t + i as f64 * 0.02),
            })
            .collect(),
        trail2: sim
            .trail2
            .iter()
            .enumerate()
            .map(|(i, p)| TrailDot {
                pos: p.pos,
                color: rainbow_color(t + i as f64 * 0.03 + 3.0),
            })
            .collect(),
    }
}
