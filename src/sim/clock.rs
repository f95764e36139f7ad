//! Monotonic game clock

use crate::consts::MAX_FRAME_DT;

/// Total game time fed by per-frame deltas
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GameClock {
    total: f64,
}

impl GameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a frame delta. Negative or non-finite deltas are dropped and large
    /// ones are capped to prevent a spiral of death.
    pub fn advance(&mut self, dt: f64) -> f64 {
        if dt.is_finite() && dt > 0.0 {
            self.total += dt.min(MAX_FRAME_DT);
        }
        self.total
    }

    pub fn total_seconds(&self) -> f64 {
        self.total
    }
}
