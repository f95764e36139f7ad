//! Crate error type
//!
//! Only configuration and media glue can fail. The animation core is total.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to access settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed settings: {0}")]
    Json(#[from] serde_json::Error),

    #[error("marble palette must contain at least one color")]
    EmptyPalette,

    #[error("invalid break timing: duration {duration}s, {frame_count} frames")]
    InvalidTiming { duration: f64, frame_count: u32 },

    #[error("sound backend failed for '{name}': {reason}")]
    Sound { name: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
