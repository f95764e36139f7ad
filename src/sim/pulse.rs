//! Selection highlight pulse
//!
//! One oscillator value per tick, shared by every selected marble. The tick
//! driver computes it and hands it to the draw pass.

use serde::{Deserialize, Serialize};

/// Which glow ring sprite to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ring {
    Single,
    Double,
}

/// Per-tick oscillator value in [-1, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pulse(f32);

impl Pulse {
    /// `sin(time * rate)` for total game time `time`
    pub fn from_time(time: f64, rate: f64) -> Self {
        Self((time * rate).sin() as f32)
    }

    pub fn value(self) -> f32 {
        self.0
    }

    /// Ring and opacity for this pulse.
    ///
    /// Negative half of the cycle pulses the single ring, the rest pulses the
    /// double ring.
    pub fn ring(self) -> (Ring, u8) {
        if self.0 < 0.0 {
            (Ring::Single, (-self.0 * 255.0) as u8)
        } else {
            (Ring::Double, (self.0 * 255.0) as u8)
        }
    }
}
