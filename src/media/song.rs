//! Song metadata and playback delegation
//!
//! A `Song` knows its file, volume and loop flag. Actual playback belongs to
//! a platform [`Sound`] created lazily on first play.

use std::hash::{Hash, Hasher};
use std::path::Path;
use std::time::Duration;

use crate::error::Result;

/// A platform sound backend
pub trait Sound {
    fn play(&mut self);
    fn pause(&mut self);
    fn stop(&mut self);
    fn set_volume(&mut self, volume: f32);
    fn set_looping(&mut self, looping: bool);
    /// Length of the track
    fn duration(&self) -> Duration;
    /// Current playback position
    fn position(&self) -> Duration;
}

/// Creates sound backends for songs
pub trait SoundFactory {
    fn create(&mut self, file_name: &str, volume: f32, looping: bool) -> Result<Box<dyn Sound>>;
}

/// A music track
pub struct Song {
    file_name: String,
    volume: f32,
    looping: bool,
    play_count: u32,
    sound: Option<Box<dyn Sound>>,
}

impl std::fmt::Debug for Song {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Song")
            .field("file_name", &self.file_name)
            .field("volume", &self.volume)
            .field("looping", &self.looping)
            .field("loaded", &self.sound.is_some())
            .finish()
    }
}

impl Song {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            volume: 1.0,
            looping: true,
            play_count: 0,
            sound: None,
        }
    }

    /// Start playback, creating the backend on first use
    pub fn play(&mut self, factory: &mut dyn SoundFactory) -> Result<()> {
        if self.sound.is_none() {
            let sound = factory.create(&self.file_name, self.volume, self.looping)?;
            log::debug!("created sound backend for '{}'", self.name());
            self.sound = Some(sound);
        }
        if let Some(sound) = &mut self.sound {
            sound.play();
            self.play_count += 1;
        }
        Ok(())
    }

    pub fn pause(&mut self) {
        if let Some(sound) = &mut self.sound {
            sound.pause();
        }
    }

    pub fn stop(&mut self) {
        if let Some(sound) = &mut self.sound {
            sound.stop();
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.sound.is_some()
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Set volume (0.0 - 1.0)
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        if let Some(sound) = &mut self.sound {
            sound.set_volume(self.volume);
        }
    }

    pub fn looping(&self) -> bool {
        self.looping
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
        if let Some(sound) = &mut self.sound {
            sound.set_looping(looping);
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// File name without directory or extension
    pub fn name(&self) -> &str {
        Path::new(&self.file_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.file_name)
    }

    /// Track length in whole seconds (zero until first play)
    pub fn duration(&self) -> Duration {
        self.sound
            .as_ref()
            .map(|s| Duration::from_secs(s.duration().as_secs()))
            .unwrap_or(Duration::ZERO)
    }

    /// Playback position in whole seconds (zero until first play)
    pub fn position(&self) -> Duration {
        self.sound
            .as_ref()
            .map(|s| Duration::from_secs(s.position().as_secs()))
            .unwrap_or(Duration::ZERO)
    }

    pub fn play_count(&self) -> u32 {
        self.play_count
    }

    pub fn is_protected(&self) -> bool {
        false
    }

    pub fn is_rated(&self) -> bool {
        false
    }

    pub fn rating(&self) -> u32 {
        0
    }

    pub fn track_number(&self) -> u32 {
        0
    }
}

// Songs are the same track when their names match
impl PartialEq for Song {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for Song {}

impl Hash for Song {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}
