//! Draw-command generation for one frame
//!
//! Scene layers, back to front: sky, drifting backdrop squares, clouds,
//! pipes, particles, bird, ground band.

use glam::Vec2;

use crate::consts::*;
use crate::sim::{Bird, GameState, Particle, Pipe, Rect};

/// RGBA color, components in [0, 1]
pub type Color = [f32; 4];

// Palette
const SKY_TOP: Color = [0.53, 0.81, 0.92, 1.0];
const SKY_MID: Color = [0.60, 0.98, 0.60, 1.0];
const SKY_BOTTOM: Color = [0.56, 0.93, 0.56, 1.0];
const CLOUD: Color = [1.0, 1.0, 1.0, 0.9];
const BACKDROP: Color = [0.53, 0.81, 0.92, 0.3];
const PIPE_DARK: Color = [0.0, 0.39, 0.0, 1.0];
const PIPE_MID: Color = [0.13, 0.55, 0.13, 1.0];
const PIPE_LIGHT: Color = [0.20, 0.80, 0.20, 1.0];
const BIRD_BODY: Color = [1.0, 0.84, 0.0, 1.0];
const BIRD_WING: Color = [1.0, 0.27, 0.0, 1.0];
const BIRD_EYE: Color = [0.0, 0.0, 0.0, 1.0];
const GROUND_TOP: Color = [0.55, 0.27, 0.07, 1.0];
const GROUND_BOTTOM: Color = [0.80, 0.52, 0.25, 1.0];

/// The rectangular render target
#[derive(Debug, Clone, Copy)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    /// Returns `None` for non-positive dimensions; a missing or degenerate
    /// surface is a fatal startup condition for the driver, not something
    /// to limp along with.
    pub fn new(width: f32, height: f32) -> Option<Self> {
        if width > 0.0 && height > 0.0 {
            Some(Self { width, height })
        } else {
            None
        }
    }
}

/// One drawing command against the surface
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Filled rectangle
    Rect { rect: Rect, color: Color },
    /// Rectangle with a vertical two-stop gradient
    GradientRect {
        rect: Rect,
        top: Color,
        bottom: Color,
    },
    /// Filled circle
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    /// Rotate subsequent commands around a center (degrees, clockwise)
    PushRotation { center: Vec2, degrees: f32 },
    /// Undo the innermost PushRotation
    PopTransform,
}

/// An ordered list of drawing commands for one frame
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub commands: Vec<DrawCmd>,
}

/// Build the frame for the current state
pub fn build_frame(state: &GameState, surface: &Surface) -> Frame {
    let mut cmds = Vec::with_capacity(32 + state.pipes.len() * 4 + state.particles.len());

    push_background(&mut cmds, surface, state.backdrop_offset);
    push_clouds(&mut cmds, state.cloud_offset);
    for pipe in &state.pipes {
        push_pipe(&mut cmds, pipe, surface.height);
    }
    for particle in &state.particles {
        push_particle(&mut cmds, particle);
    }
    push_bird(&mut cmds, &state.bird);
    push_ground(&mut cmds, surface);

    Frame { commands: cmds }
}

fn push_background(cmds: &mut Vec<DrawCmd>, surface: &Surface, offset: f32) {
    cmds.push(DrawCmd::GradientRect {
        rect: Rect::new(0.0, 0.0, surface.width, surface.height / 2.0),
        top: SKY_TOP,
        bottom: SKY_MID,
    });
    cmds.push(DrawCmd::GradientRect {
        rect: Rect::new(0.0, surface.height / 2.0, surface.width, surface.height / 2.0),
        top: SKY_MID,
        bottom: SKY_BOTTOM,
    });

    // Drifting backdrop squares, wrapped to the surface width
    let wrap = surface.width + 64.0;
    for i in 0..20 {
        let x = (i as f32 * 64.0 + offset) % wrap;
        let y = 100.0 + (i as f32 * 0.5).sin() * 20.0;
        cmds.push(DrawCmd::Rect {
            rect: Rect::new(x, y, GRID, GRID),
            color: BACKDROP,
        });
    }
}

fn push_clouds(cmds: &mut Vec<DrawCmd>, offset: f32) {
    // Two cloud clusters drifting at different parallax speeds
    for (base_x, y, drift, radii) in [
        (64.0, 96.0, 0.3, [24.0, 32.0, 24.0]),
        (384.0, 64.0, 0.5, [20.0, 28.0, 20.0]),
    ] {
        for (j, radius) in radii.iter().enumerate() {
            cmds.push(DrawCmd::Circle {
                center: Vec2::new(base_x + j as f32 * 32.0 + offset * drift, y),
                radius: *radius,
                color: CLOUD,
            });
        }
    }
}

fn push_pipe(cmds: &mut Vec<DrawCmd>, pipe: &Pipe, screen_h: f32) {
    let (top, bottom) = pipe.bounds(screen_h);

    cmds.push(DrawCmd::GradientRect {
        rect: top,
        top: PIPE_MID,
        bottom: PIPE_LIGHT,
    });
    cmds.push(DrawCmd::GradientRect {
        rect: bottom,
        top: PIPE_LIGHT,
        bottom: PIPE_MID,
    });

    // Lip caps overhanging each barrier mouth
    cmds.push(DrawCmd::Rect {
        rect: Rect::new(pipe.x - 8.0, pipe.gap_y - GRID, pipe.width + 16.0, GRID),
        color: PIPE_DARK,
    });
    cmds.push(DrawCmd::Rect {
        rect: Rect::new(pipe.x - 8.0, pipe.gap_y + pipe.gap, pipe.width + 16.0, GRID),
        color: PIPE_DARK,
    });
}

fn push_particle(cmds: &mut Vec<DrawCmd>, particle: &Particle) {
    // Fade with remaining life
    let mut color = particle.color;
    color[3] *= particle.life.max(0.0);
    cmds.push(DrawCmd::Circle {
        center: particle.pos,
        radius: particle.size,
        color,
    });
}

fn push_bird(cmds: &mut Vec<DrawCmd>, bird: &Bird) {
    let half = bird.size / 2.0;
    let center = Vec2::new(bird.x + half, bird.y + half);

    cmds.push(DrawCmd::PushRotation {
        center,
        degrees: bird.rotation,
    });
    cmds.push(DrawCmd::GradientRect {
        rect: Rect::new(bird.x, bird.y, bird.size, bird.size),
        top: BIRD_BODY,
        bottom: BIRD_WING,
    });

    // Wing bobs with the flap phase
    let wing_y = bird.wing_phase.sin() * 2.0;
    cmds.push(DrawCmd::Rect {
        rect: Rect::new(bird.x - 4.0, center.y - 6.0 + wing_y, 16.0, 12.0),
        color: BIRD_WING,
    });
    // Beak
    cmds.push(DrawCmd::Rect {
        rect: Rect::new(bird.x + bird.size, center.y - 2.0, 8.0, 4.0),
        color: BIRD_WING,
    });
    // Eye
    cmds.push(DrawCmd::Rect {
        rect: Rect::new(center.x + 8.0, center.y - 8.0, 8.0, 8.0),
        color: BIRD_EYE,
    });
    cmds.push(DrawCmd::PopTransform);
}

fn push_ground(cmds: &mut Vec<DrawCmd>, surface: &Surface) {
    // Geometry here must match the collision ground plane exactly
    cmds.push(DrawCmd::GradientRect {
        rect: Rect::new(
            0.0,
            surface.height - GROUND_HEIGHT,
            surface.width,
            GROUND_HEIGHT,
        ),
        top: GROUND_TOP,
        bottom: GROUND_BOTTOM,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameState, hits_ground};

    fn surface() -> Surface {
        Surface::new(SCREEN_WIDTH, SCREEN_HEIGHT).unwrap()
    }

    #[test]
    fn test_surface_rejects_degenerate_dimensions() {
        assert!(Surface::new(0.0, 480.0).is_none());
        assert!(Surface::new(640.0, -1.0).is_none());
        assert!(Surface::new(640.0, 480.0).is_some());
    }

    #[test]
    fn test_ground_band_matches_collision_plane() {
        let state = GameState::new(1);
        let frame = build_frame(&state, &surface());

        let ground = frame
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCmd::GradientRect { rect, .. } if rect.h == GROUND_HEIGHT => Some(rect),
                _ => None,
            })
            .find(|r| r.y == SCREEN_HEIGHT - GROUND_HEIGHT)
            .expect("no ground band command");

        // A box resting exactly on the drawn band's top edge must collide
        let resting = Rect::new(0.0, ground.y - BIRD_SIZE, BIRD_SIZE, BIRD_SIZE);
        assert!(hits_ground(&resting, SCREEN_HEIGHT));
        let above = Rect::new(0.0, ground.y - BIRD_SIZE - 0.5, BIRD_SIZE, BIRD_SIZE);
        assert!(!hits_ground(&above, SCREEN_HEIGHT));
    }

    #[test]
    fn test_bird_rotation_is_scoped() {
        let mut state = GameState::new(2);
        state.start();
        let frame = build_frame(&state, &surface());

        let pushes = frame
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCmd::PushRotation { .. }))
            .count();
        let pops = frame
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCmd::PopTransform))
            .count();
        assert_eq!(pushes, 1);
        assert_eq!(pops, 1);
    }

    #[test]
    fn test_particle_alpha_fades_with_life() {
        let mut cmds = Vec::new();
        let particle = Particle {
            pos: Vec2::new(10.0, 10.0),
            vel: Vec2::ZERO,
            color: [1.0, 0.84, 0.0, 1.0],
            life: 0.25,
            decay: 0.02,
            size: 2.0,
        };
        push_particle(&mut cmds, &particle);
        match &cmds[0] {
            DrawCmd::Circle { color, .. } => assert!((color[3] - 0.25).abs() < 1e-6),
            other => panic!("expected circle, got {other:?}"),
        }
    }

    #[test]
    fn test_pipe_commands_cover_both_segments() {
        let mut state = GameState::new(3);
        state.start();
        state.pipes.push(Pipe {
            x: 300.0,
            width: 64.0,
            gap: 160.0,
            gap_y: 128.0,
            scored: false,
        });
        let frame = build_frame(&state, &surface());

        let pipe_rects: Vec<&Rect> = frame
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCmd::GradientRect { rect, .. } if rect.x == 300.0 => Some(rect),
                _ => None,
            })
            .collect();
        assert_eq!(pipe_rects.len(), 2);
        // Segments leave exactly the gap open
        assert_eq!(pipe_rects[1].y - pipe_rects[0].bottom(), 160.0);
    }
}
