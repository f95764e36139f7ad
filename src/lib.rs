//! Marblets - marble entities for a tile-matching puzzle game
//!
//! Core modules:
//! - `sim`: Deterministic marble state (break animation, palette, tick driver)
//! - `render`: Draw commands, render selection and sprite batching
//! - `media`: Song metadata wrapper over an external sound backend
//! - `settings`: Data-driven configuration

pub mod error;
pub mod media;
pub mod render;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed update timestep (60 Hz)
    pub const SIM_DT: f64 = 1.0 / 60.0;
    /// Maximum frame delta accepted by the clock
    pub const MAX_FRAME_DT: f64 = 0.1;

    /// Marble sprite width in HD screen coordinates
    pub const MARBLE_WIDTH: u32 = 25;
    /// Marble sprite height in HD screen coordinates
    pub const MARBLE_HEIGHT: u32 = 25;

    /// How long it takes a marble to break (seconds)
    pub const BREAK_TIME: f64 = 0.5;
    /// Frames in the break sprite strip
    pub const BREAK_FRAME_COUNT: u32 = 12;

    /// Angular rate of the selection highlight pulse (radians/sec)
    pub const PULSE_RATE: f64 = 6.0;
}
