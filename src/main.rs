//! Flappy Dash entry point
//!
//! Runs the game headless: a fixed 60 Hz tick driver with a demo autopilot
//! on input, building a frame per tick and logging session results. The
//! driver is the single owner of the game state; input is folded into a
//! `TickInput` and consumed exactly once per tick, so nothing ever runs
//! reentrant with an in-progress tick.

use std::path::Path;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use flappy_dash::consts::*;
use flappy_dash::renderer::{Surface, build_frame};
use flappy_dash::sim::{GameState, TickInput, tick};
use flappy_dash::{HighScores, Tunables};

/// Demo sessions to play before exiting
const DEMO_SESSIONS: u32 = 3;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(time_seed);

    // A missing or degenerate render surface is fatal at startup; running
    // headless into nonsense geometry helps nobody.
    let Some(surface) = Surface::new(SCREEN_WIDTH, SCREEN_HEIGHT) else {
        log::error!("render surface unavailable, refusing to start");
        std::process::exit(1);
    };

    let tunables_path = Path::new("tunables.json");
    let scores_path = Path::new("highscores.json");

    let mut state = GameState::new(seed);
    state.tunables = Tunables::load(tunables_path, SCREEN_HEIGHT);
    let mut scores = HighScores::load(scores_path);

    log::info!("flappy-dash demo starting (seed {seed})");
    run(&mut state, &surface, &mut scores);

    scores.save(scores_path);
    state.tunables.save(tunables_path);
    if let Some(best) = scores.top_score() {
        log::info!("best score on record: {best}");
    }
}

/// Fixed-interval tick driver
///
/// Accumulator pattern: real elapsed time is banked and spent in whole
/// ticks, capped per frame so a stall can never run unbounded catch-up
/// ticks. There is exactly one loop; restarting a session reuses it rather
/// than spawning another driver.
fn run(state: &mut GameState, surface: &Surface, scores: &mut HighScores) {
    let tick_dt = Duration::from_secs(1) / TICK_RATE;
    let mut last = Instant::now();
    let mut accumulator = Duration::ZERO;
    let mut sessions_played = 0;
    let mut input = TickInput {
        flap: false,
        restart: true, // Kick the first session off from Idle
    };

    loop {
        let now = Instant::now();
        accumulator += now - last;
        last = now;

        let mut steps = 0;
        while accumulator >= tick_dt && steps < MAX_TICKS_PER_FRAME {
            let was_over = state.is_over();
            input.flap = state.is_running() && autopilot(state);
            tick(state, &input);
            // One-shot inputs are cleared after the tick that consumed them
            input.restart = false;
            accumulator -= tick_dt;
            steps += 1;

            if state.is_over() && !was_over {
                sessions_played += 1;
                log::info!(
                    "session {sessions_played}/{DEMO_SESSIONS}: score {} in {} ticks",
                    state.score,
                    state.time_ticks
                );
                if let Some(rank) = scores.add_score(state.score, state.time_ticks, state.seed) {
                    log::info!("new high score, rank {rank}");
                }
                if sessions_played >= DEMO_SESSIONS {
                    return;
                }
                input.restart = true;
            }
        }

        let frame = build_frame(state, surface);
        log::trace!("frame: {} draw commands", frame.commands.len());

        if accumulator < tick_dt {
            std::thread::sleep(tick_dt - accumulator);
        }
    }
}

/// Demo input: flap whenever the bird's center sinks below the center of
/// the next gap ahead of it.
fn autopilot(state: &GameState) -> bool {
    let target = state
        .pipes
        .iter()
        .find(|p| p.x + p.width >= state.bird.x)
        .map(|p| p.gap_y + p.gap / 2.0)
        .unwrap_or(state.screen_h / 2.0);
    state.bird.y + state.bird.size / 2.0 > target
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
