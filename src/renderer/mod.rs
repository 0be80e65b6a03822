//! Frame construction
//!
//! The renderer reads an immutable snapshot of the simulation and produces
//! a flat list of drawing commands for a rectangular surface. It never
//! mutates game state and carries no gameplay logic; the one hard contract
//! is that the ground band it draws matches the collision ground plane.

pub mod frame;

pub use frame::{Color, DrawCmd, Frame, Surface, build_frame};
