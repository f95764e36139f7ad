//! Game settings
//!
//! Persisted as JSON next to the executable. Missing fields fall back to the
//! stock Marblets values.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{BREAK_FRAME_COUNT, BREAK_TIME, PULSE_RATE};
use crate::error::{Error, Result};
use crate::sim::{BreakTiming, Palette};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Marbles ===
    /// Colors new marbles are drawn from
    pub marble_colors: Palette,
    /// Seconds a break animation plays
    pub break_time: f64,
    /// Frames in the break sprite strip
    pub break_frame_count: u32,

    // === Visual Effects ===
    /// Selection pulse rate (radians/sec)
    pub pulse_rate: f64,
    /// Screen rotation applied to every sprite (radians)
    pub screen_rotation: f32,

    // === Audio ===
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Loop background music
    pub music_loop: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            marble_colors: Palette::default(),
            break_time: BREAK_TIME,
            break_frame_count: BREAK_FRAME_COUNT,

            pulse_rate: PULSE_RATE,
            screen_rotation: 0.0,

            music_volume: 1.0,
            music_loop: true,
        }
    }
}

impl Settings {
    /// Default settings file name
    pub const FILE_NAME: &'static str = "marblets_settings.json";

    /// Break animation parameters
    pub fn timing(&self) -> BreakTiming {
        BreakTiming {
            duration: self.break_time,
            frame_count: self.break_frame_count,
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.marble_colors
    }

    /// Reject values the animation cannot run with
    pub fn validate(&self) -> Result<()> {
        let timing = self.timing();
        if !timing.is_valid() {
            return Err(Error::InvalidTiming {
                duration: timing.duration,
                frame_count: timing.frame_count,
            });
        }
        Ok(())
    }

    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }

    /// Load settings from `path`, falling back to defaults on any failure
    pub fn load(path: impl AsRef<Path>) -> Self {
        match Self::load_from(path.as_ref()) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.as_ref().display());
                settings
            }
            Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring settings file: {}", e);
                Self::default()
            }
        }
    }
}
