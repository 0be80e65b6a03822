//! Flappy Dash - a gravity-and-gaps arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, pipe stream, collisions, session state)
//! - `renderer`: Frame construction as a list of drawing commands
//! - `settings`: Live-tunable pipe parameters
//! - `highscores`: Best-score table persisted between sessions

pub mod highscores;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::Tunables;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Maximum ticks to run per driver frame to prevent spiral of death
    pub const MAX_TICKS_PER_FRAME: u32 = 4;

    /// Playfield dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 640.0;
    pub const SCREEN_HEIGHT: f32 = 480.0;
    /// Height of the solid ground band at the bottom of the playfield
    pub const GROUND_HEIGHT: f32 = 32.0;

    /// Placement grid unit - pipe gaps and spawn positions snap to this
    pub const GRID: f32 = 32.0;

    /// Bird defaults
    pub const BIRD_SIZE: f32 = 32.0;
    pub const BIRD_SPAWN_X: f32 = 96.0; // 3 * GRID
    pub const BIRD_SPAWN_Y: f32 = 320.0; // 10 * GRID
    /// Downward acceleration per tick²
    pub const GRAVITY: f32 = 0.5;
    /// Flap sets velocity to this value outright (no accumulation)
    pub const FLAP_IMPULSE: f32 = -8.0;
    /// Display rotation is clamped to ±this many degrees
    pub const MAX_TILT_DEG: f32 = 45.0;
    /// Wing animation phase advance per tick
    pub const WING_RATE: f32 = 0.3;

    /// Pipes advance this many pixels per tick (uniform across all pipes,
    /// which keeps the stream ordered and the spacing policy valid)
    pub const PIPE_SPEED: f32 = 2.0;
    /// Minimum barrier height above and below a pipe's gap
    pub const GAP_MARGIN: f32 = 64.0; // 2 * GRID

    /// Particle counts per burst
    pub const FLAP_BURST: usize = 5;
    pub const SCORE_BURST: usize = 8;
}

/// Snap a value down onto the placement grid
#[inline]
pub fn grid_snap(v: f32) -> f32 {
    (v / consts::GRID).floor() * consts::GRID
}
