//! Game state and core simulation types
//!
//! Everything the tick pipeline mutates lives here: the bird, the pipe
//! stream, the particle pool and the session phase machine.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::Rect;
use crate::consts::*;
use crate::grid_snap;
use crate::settings::Tunables;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Created but not started yet
    #[default]
    Idle,
    /// Active gameplay, ticking
    Running,
    /// Run ended; terminal until an explicit restart
    GameOver,
}

/// The falling, controllable square
#[derive(Debug, Clone)]
pub struct Bird {
    /// Horizontal position, fixed for the whole session
    pub x: f32,
    pub y: f32,
    pub velocity: f32,
    /// Side length of the square bounding box
    pub size: f32,
    /// Display tilt in degrees, derived from velocity each tick
    pub rotation: f32,
    /// Wing animation phase (cosmetic)
    pub wing_phase: f32,
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

impl Bird {
    pub fn new() -> Self {
        Self {
            x: BIRD_SPAWN_X,
            y: BIRD_SPAWN_Y,
            velocity: 0.0,
            size: BIRD_SIZE,
            rotation: 0.0,
            wing_phase: 0.0,
        }
    }

    /// One Euler integration step: gravity into velocity, velocity into
    /// position. Clamps y to the playfield, zeroing velocity on clamp
    /// (edge contact with the play area is not the game-over collision).
    pub fn update(&mut self, screen_h: f32) {
        self.velocity += GRAVITY;
        self.y += self.velocity;

        self.rotation = (self.velocity * 2.0).clamp(-MAX_TILT_DEG, MAX_TILT_DEG);
        self.wing_phase += WING_RATE;

        if self.y < 0.0 {
            self.y = 0.0;
            self.velocity = 0.0;
        }
        let floor = screen_h - self.size;
        if self.y > floor {
            self.y = floor;
            self.velocity = 0.0;
        }
    }

    /// The jump primitive: velocity is set outright, never accumulated
    pub fn flap(&mut self) {
        self.velocity = FLAP_IMPULSE;
    }

    /// Axis-aligned bounding box for collision
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.size, self.size)
    }
}

/// A paired top/bottom barrier with a gap between
#[derive(Debug, Clone)]
pub struct Pipe {
    /// Left edge; decreases every tick
    pub x: f32,
    pub width: f32,
    /// Gap height
    pub gap: f32,
    /// Top of the gap (bottom edge of the top segment)
    pub gap_y: f32,
    /// Set once the bird has passed; prevents double scoring
    pub scored: bool,
}

impl Pipe {
    /// Spawn a pipe at the right screen edge with a grid-aligned random gap.
    ///
    /// The gap offset lands in `[GAP_MARGIN, screen_h - gap - GAP_MARGIN]`
    /// so both barrier segments stay non-degenerate.
    pub fn spawn(rng: &mut Pcg32, screen_w: f32, screen_h: f32, tunables: &Tunables) -> Self {
        let gap = tunables.pipe_gap;
        let span = (screen_h - gap - 2.0 * GAP_MARGIN).max(0.0);
        let gap_y = grid_snap(rng.random::<f32>() * span) + GAP_MARGIN;

        Self {
            x: screen_w,
            width: tunables.pipe_width,
            gap,
            gap_y,
            scored: false,
        }
    }

    /// Advance left by the shared pipe speed
    pub fn update(&mut self) {
        self.x -= PIPE_SPEED;
    }

    /// The two disjoint barrier rectangles (top, bottom)
    pub fn bounds(&self, screen_h: f32) -> (Rect, Rect) {
        let top = Rect::new(self.x, 0.0, self.width, self.gap_y);
        let bottom = Rect::new(
            self.x,
            self.gap_y + self.gap,
            self.width,
            screen_h - self.gap_y - self.gap,
        );
        (top, bottom)
    }

    /// Center of the gap, used for the score celebration burst
    pub fn gap_center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.gap_y + self.gap / 2.0)
    }

    /// True once the right edge has passed the left screen edge
    #[inline]
    pub fn is_offscreen(&self) -> bool {
        self.x + self.width <= 0.0
    }
}

/// A short-lived visual effect; never affects gameplay
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: [f32; 4],
    /// Remaining life in [0, 1]; the owner prunes at <= 0
    pub life: f32,
    pub decay: f32,
    pub size: f32,
}

impl Particle {
    /// Spawn with a random spread scaled by `speed`
    pub fn spawn(rng: &mut Pcg32, pos: Vec2, color: [f32; 4], speed: f32) -> Self {
        let vx = (rng.random::<f32>() - 0.5) * speed;
        let vy = rng.random::<f32>() * speed;
        Self {
            pos,
            vel: Vec2::new(vx, vy),
            color,
            life: 1.0,
            decay: 0.02,
            size: rng.random::<f32>() * 3.0 + 1.0,
        }
    }

    /// Linear drift, life decay, multiplicative shrink. The caller removes
    /// expired particles afterwards; expiry is a post-condition, not ours.
    pub fn update(&mut self) {
        self.pos += self.vel;
        self.life -= self.decay;
        self.size *= 0.98;
    }
}

/// Complete session state, owned by the tick driver
///
/// Owns the bird, both collections and the RNG; nothing in here holds a
/// back-reference to the loop.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed, kept for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    pub score: u32,
    /// Ticks elapsed in the current session
    pub time_ticks: u64,
    pub screen_w: f32,
    pub screen_h: f32,
    pub bird: Bird,
    /// Spawn order = left-to-right screen order (uniform pipe speed)
    pub pipes: Vec<Pipe>,
    pub particles: Vec<Particle>,
    /// Live tunables, re-read at every spawn decision
    pub tunables: Tunables,
    /// Cosmetic scroll offsets for the renderer
    pub cloud_offset: f32,
    pub backdrop_offset: f32,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a fresh, not-yet-started session
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            phase: GamePhase::Idle,
            score: 0,
            time_ticks: 0,
            screen_w: SCREEN_WIDTH,
            screen_h: SCREEN_HEIGHT,
            bird: Bird::new(),
            pipes: Vec::new(),
            particles: Vec::new(),
            tunables: Tunables::default(),
            cloud_offset: 0.0,
            backdrop_offset: 0.0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Start or restart: reset score, clear collections, respawn the bird
    /// at the fixed spawn position and enter Running.
    ///
    /// Tunables survive a restart; the RNG stream continues so consecutive
    /// sessions see different pipe layouts.
    pub fn start(&mut self) {
        self.score = 0;
        self.time_ticks = 0;
        self.pipes.clear();
        self.particles.clear();
        self.bird = Bird::new();
        self.cloud_offset = 0.0;
        self.backdrop_offset = 0.0;
        self.phase = GamePhase::Running;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
