//! Fixed timestep simulation tick
//!
//! One call advances the session by one 60 Hz frame, running the full
//! pipeline in order: bird physics, particle decay, pipe stream (advance,
//! score, prune, spawn), collision check, cosmetic scroll.

use glam::Vec2;

use super::collision::check_collision;
use super::state::{GamePhase, GameState, Particle, Pipe};
use crate::consts::*;

/// Burst color for flap and score celebrations
const GOLD: [f32; 4] = [1.0, 0.84, 0.0, 1.0];

/// Input commands for a single tick
///
/// One-shot flags: the driver sets them when an event arrives and clears
/// them after the tick that consumed them.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Jump impulse (key press, tap)
    pub flap: bool,
    /// Start or restart the session; only honored outside Running
    pub restart: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.phase {
        GamePhase::Idle | GamePhase::GameOver => {
            // Flap events are ignored outside Running; restart re-enters
            // via the start transition with a fresh bird and zeroed score.
            if input.restart {
                state.start();
                log::info!("session started (seed {})", state.seed);
            }
            return;
        }
        GamePhase::Running => {}
    }

    state.time_ticks += 1;

    // Input is folded in before integration so a flap arriving between
    // ticks is visible on this very tick.
    if input.flap {
        state.bird.flap();
        let origin = Vec2::new(
            state.bird.x + state.bird.size / 2.0,
            state.bird.y + state.bird.size,
        );
        for _ in 0..FLAP_BURST {
            let p = Particle::spawn(&mut state.rng, origin, GOLD, 2.0);
            state.particles.push(p);
        }
    }

    state.bird.update(state.screen_h);

    // Update then rebuild via retain; never splice while iterating
    for particle in state.particles.iter_mut() {
        particle.update();
    }
    state.particles.retain(|p| p.life > 0.0);

    update_pipes(state);

    if check_collision(&state.bird, &state.pipes, state.screen_h) {
        state.phase = GamePhase::GameOver;
        log::info!(
            "game over: score {} after {} ticks",
            state.score,
            state.time_ticks
        );
        return;
    }

    // Cosmetic scroll, read only by the renderer
    state.cloud_offset += 0.5;
    state.backdrop_offset += 0.2;
}

/// Pipe stream step: advance, score, prune, spawn - in that order
fn update_pipes(state: &mut GameState) {
    for pipe in state.pipes.iter_mut() {
        pipe.update();
    }

    // Scoring scan: a pipe scores the first tick its right edge is strictly
    // left of the bird's x. Vertical position is irrelevant here; the
    // scored flag makes this idempotent.
    let mut bursts: Vec<Vec2> = Vec::new();
    for pipe in state.pipes.iter_mut() {
        if !pipe.scored && pipe.x + pipe.width < state.bird.x {
            pipe.scored = true;
            state.score += 1;
            bursts.push(pipe.gap_center());
        }
    }
    for center in bursts {
        log::debug!("score {} at tick {}", state.score, state.time_ticks);
        for _ in 0..SCORE_BURST {
            let p = Particle::spawn(&mut state.rng, center, GOLD, 3.0);
            state.particles.push(p);
        }
    }

    state.pipes.retain(|p| !p.is_offscreen());

    // Spawn policy: tunables are re-read here every tick, so a live change
    // takes effect on the next spawn decision, never retroactively.
    let tunables = state.tunables.clamped(state.screen_h);
    let due = match state.pipes.last() {
        None => true,
        Some(last) => last.x < state.screen_w - tunables.pipe_spacing,
    };
    if due {
        let pipe = Pipe::spawn(&mut state.rng, state.screen_w, state.screen_h, &tunables);
        state.pipes.push(pipe);
    }
}
