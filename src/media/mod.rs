//! Music tracks
//!
//! Decoding and output stay with the platform; see [`song::Sound`].

pub mod song;

pub use song::{Song, Sound, SoundFactory};
