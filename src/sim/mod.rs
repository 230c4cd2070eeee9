//! Deterministic simulation module
//!
//! All simulation logic lives here. This module must be pure and deterministic:
//! - Fixed tick only (one implicit unit step per `advance()`)
//! - Bit-for-bit reproducible for identical state and parameters
//! - No rendering or platform dependencies

pub mod dynamics;
pub mod params;
pub mod state;
pub mod tick;
pub mod trail;

pub use dynamics::{accelerations, advance, mechanical_energy};
pub use params::{GRAVITY_RANGE, LENGTH_RANGE, MASS_RANGE, SimulationParameters};
pub use state::{PendulumState, Simulation};
pub use tick::{TickInput, tick};
pub use trail::{TrailBuffer, TrailPoint};
