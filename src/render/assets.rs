//! Sprite asset table
//!
//! Loaded once and shared by every renderer through an `Arc`, never through
//! global state.

use std::collections::HashMap;

use glam::UVec2;

use super::SpriteId;
use crate::consts::{MARBLE_HEIGHT, MARBLE_WIDTH};
use crate::sim::BreakTiming;

/// A loaded sprite sheet
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteAsset {
    /// Content name the texture was loaded from
    pub name: String,
    /// Texture size in pixels
    pub size: UVec2,
}

#[derive(Debug, Clone, Default)]
pub struct AssetTable {
    sprites: HashMap<SpriteId, SpriteAsset>,
}

impl AssetTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with the stock marble sprites, the break strip sized for `timing`
    pub fn marblets(timing: BreakTiming) -> Self {
        let cell = UVec2::new(MARBLE_WIDTH, MARBLE_HEIGHT);
        let mut table = Self::new();
        table.insert(SpriteId::Marble, "marble_zunehd", cell);
        table.insert(
            SpriteId::Break,
            "marble_burst_zunehd",
            UVec2::new(MARBLE_WIDTH.saturating_mul(timing.frame_count), MARBLE_HEIGHT),
        );
        table.insert(SpriteId::GlowRing1, "marble_glow_1ring_zunehd", cell);
        table.insert(SpriteId::GlowRing2, "marble_glow_2rings_zunehd", cell);
        table
    }

    pub fn insert(&mut self, id: SpriteId, name: &str, size: UVec2) {
        self.sprites.insert(
            id,
            SpriteAsset {
                name: name.to_string(),
                size,
            },
        );
    }

    pub fn get(&self, id: SpriteId) -> Option<&SpriteAsset> {
        self.sprites.get(&id)
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}
