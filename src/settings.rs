//! Live-tunable pipe parameters
//!
//! An external settings surface (sliders, config file) may overwrite these
//! at any time; the simulation re-reads them at each spawn decision, so a
//! change applies to the next pipe and never retroactively.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::consts::{GAP_MARGIN, GRID};

/// Pipe stream parameters, conventionally grid-aligned
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tunables {
    /// Horizontal distance between consecutive spawns
    pub pipe_spacing: f32,
    /// Barrier width
    pub pipe_width: f32,
    /// Gap height
    pub pipe_gap: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pipe_spacing: 224.0, // 7 * GRID
            pipe_width: 64.0,    // 2 * GRID
            pipe_gap: 160.0,     // 5 * GRID
        }
    }
}

impl Tunables {
    /// Restore the default values
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Clamp values into the range the gap placement math is defined over.
    ///
    /// Callers are supposed to hand us sane positive values; this keeps a
    /// malformed set from producing a degenerate spawn instead of rejecting
    /// it outright.
    pub fn clamped(&self, screen_h: f32) -> Self {
        let max_gap = (screen_h - 2.0 * GAP_MARGIN).max(GRID);
        Self {
            pipe_spacing: self.pipe_spacing.max(GRID),
            pipe_width: self.pipe_width.max(GRID),
            pipe_gap: self.pipe_gap.clamp(GRID, max_gap),
        }
    }

    /// Load tunables from a JSON file, falling back to defaults when the
    /// file is missing or unreadable.
    pub fn load(path: &Path, screen_h: f32) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Self>(&json) {
                Ok(tunables) => {
                    let clamped = tunables.clamped(screen_h);
                    if clamped != tunables {
                        log::warn!("tunables in {} were out of range, clamped", path.display());
                    }
                    log::info!("loaded tunables from {}", path.display());
                    clamped
                }
                Err(e) => {
                    log::warn!("corrupt tunables file {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no tunables file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Persist tunables as JSON; failures are logged, not fatal
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    log::warn!("failed to save tunables to {}: {e}", path.display());
                }
            }
            Err(e) => log::warn!("failed to serialize tunables: {e}"),
        }
    }
}
