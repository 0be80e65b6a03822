//! Axis-aligned collision detection
//!
//! The whole predicate is stateless: it reads the bird's box, every pipe's
//! two boxes and the ground plane, and answers yes or no. Pipe overlap uses
//! strict inequalities (an exact edge touch is not a hit); the ground test is
//! non-strict. The asymmetry is deliberate and load-bearing for boundary
//! scenarios - do not unify the two conventions.

use crate::consts::GROUND_HEIGHT;

use super::state::{Bird, Pipe};

/// An axis-aligned rectangle in playfield coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Strict AABB overlap test - touching edges do not overlap
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }

    /// Bottom edge of the rectangle
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}

/// Ground check: the bird's bottom edge reaching the top of the ground band
/// counts as a hit (non-strict, unlike the pipe test)
#[inline]
pub fn hits_ground(bounds: &Rect, screen_h: f32) -> bool {
    bounds.bottom() >= screen_h - GROUND_HEIGHT
}

/// Full collision predicate over the current frame's geometry
///
/// Returns true if the bird overlaps either segment of any pipe, or has
/// reached the ground band.
pub fn check_collision(bird: &Bird, pipes: &[Pipe], screen_h: f32) -> bool {
    let bounds = bird.bounds();

    for pipe in pipes {
        let (top, bottom) = pipe.bounds(screen_h);
        if bounds.overlaps(&top) || bounds.overlaps(&bottom) {
            return true;
        }
    }

    hits_ground(&bounds, screen_h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use proptest::prelude::*;

    fn pipe_at(x: f32, gap_y: f32, gap: f32) -> Pipe {
        Pipe {
            x,
            width: 64.0,
            gap,
            gap_y,
            scored: false,
        }
    }

    #[test]
    fn test_overlap_basic() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let c = Rect::new(20.0, 20.0, 5.0, 5.0);
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_edge_touch_is_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Right edge of a exactly touches left edge of b
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        // Bottom edge touch
        let c = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_full_containment_is_overlap() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 10.0, 10.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_ground_is_inclusive() {
        // Bird bottom exactly at the ground band's top edge
        let bounds = Rect::new(96.0, SCREEN_HEIGHT - GROUND_HEIGHT - BIRD_SIZE, BIRD_SIZE, BIRD_SIZE);
        assert!(hits_ground(&bounds, SCREEN_HEIGHT));

        // One pixel above
        let above = Rect::new(96.0, bounds.y - 1.0, BIRD_SIZE, BIRD_SIZE);
        assert!(!hits_ground(&above, SCREEN_HEIGHT));
    }

    #[test]
    fn test_bird_inside_gap_is_safe() {
        let mut bird = Bird::new();
        bird.y = 320.0; // Gap covers 256..416
        let pipes = vec![pipe_at(80.0, 256.0, 160.0)];
        assert!(!check_collision(&bird, &pipes, SCREEN_HEIGHT));
    }

    #[test]
    fn test_bird_hits_top_segment() {
        let mut bird = Bird::new();
        bird.y = 100.0; // Above the gap, inside the top barrier
        let pipes = vec![pipe_at(80.0, 256.0, 160.0)];
        assert!(check_collision(&bird, &pipes, SCREEN_HEIGHT));
    }

    #[test]
    fn test_bird_hits_bottom_segment() {
        let mut bird = Bird::new();
        bird.y = 420.0; // Below the gap (bottom barrier starts at 416)
        let pipes = vec![pipe_at(80.0, 256.0, 160.0)];
        assert!(check_collision(&bird, &pipes, SCREEN_HEIGHT));
    }

    #[test]
    fn test_exact_gap_edges_are_safe() {
        // Bird exactly filling the gap: top edge touches the top segment's
        // bottom, bottom edge touches the bottom segment's top. Strict
        // comparisons mean neither counts as a hit.
        let mut bird = Bird::new();
        bird.y = 256.0;
        let pipes = vec![pipe_at(80.0, 256.0, BIRD_SIZE)];
        assert!(!check_collision(&bird, &pipes, SCREEN_HEIGHT));
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            ax in -500.0_f32..500.0, ay in -500.0_f32..500.0,
            aw in 1.0_f32..200.0, ah in 1.0_f32..200.0,
            bx in -500.0_f32..500.0, by in -500.0_f32..500.0,
            bw in 1.0_f32..200.0, bh in 1.0_f32..200.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn prop_containment_implies_overlap(
            x in -500.0_f32..500.0, y in -500.0_f32..500.0,
            w in 10.0_f32..200.0, h in 10.0_f32..200.0,
            inset in 0.01_f32..0.4,
        ) {
            let outer = Rect::new(x, y, w, h);
            let inner = Rect::new(
                x + w * inset,
                y + h * inset,
                w * (1.0 - 2.0 * inset),
                h * (1.0 - 2.0 * inset),
            );
            prop_assert!(outer.overlaps(&inner));
        }

        #[test]
        fn prop_no_overlap_when_fully_left(
            y in -500.0_f32..500.0,
            w in 1.0_f32..200.0, h in 1.0_f32..200.0,
            sep in 0.0_f32..100.0,
        ) {
            let a = Rect::new(0.0, y, w, h);
            // b starts at or past a's right edge
            let b = Rect::new(w + sep, y, w, h);
            prop_assert!(!a.overlaps(&b));
        }
    }
}
