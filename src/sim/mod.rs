//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick = one 60 Hz frame)
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! All mutation of [`GameState`] funnels through [`tick`]; a port to a
//! parallel runtime must keep input handling on the same task queue as ticks.

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Rect, check_collision, hits_ground};
pub use state::{Bird, GamePhase, GameState, Particle, Pipe};
pub use tick::{TickInput, tick};
