//! A single marble on the board

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::animation::{AnimationController, BreakTiming, Phase};
use super::palette::{Color, Palette};
use crate::consts::{MARBLE_HEIGHT, MARBLE_WIDTH};

/// A marble entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marble {
    /// HD screen coordinates of the top-left corner
    pub position: Vec2,
    /// Column/row on the board grid
    pub board_location: Vec2,
    /// Highlighted by the player (rendering only)
    pub selected: bool,
    color: Color,
    anim: AnimationController,
}

impl Marble {
    pub const WIDTH: u32 = MARBLE_WIDTH;
    pub const HEIGHT: u32 = MARBLE_HEIGHT;

    /// Create an idle marble with a random palette color
    pub fn new<R: Rng>(palette: &Palette, timing: BreakTiming, rng: &mut R) -> Self {
        Self::with_color(palette.pick(rng), timing)
    }

    pub fn with_color(color: Color, timing: BreakTiming) -> Self {
        Self {
            position: Vec2::ZERO,
            board_location: Vec2::ZERO,
            selected: false,
            color,
            anim: AnimationController::new(timing),
        }
    }

    /// Signal the marble to start breaking at game time `now`
    pub fn break_at(&mut self, now: f64) -> bool {
        let started = self.anim.start_break(now);
        if started {
            log::debug!(
                "marble at ({}, {}) breaking at {:.3}s",
                self.board_location.x,
                self.board_location.y,
                now
            );
        }
        started
    }

    /// Advance the break animation (call once per tick)
    pub fn update(&mut self, now: f64) {
        self.anim.advance(now);
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn phase(&self) -> Phase {
        self.anim.phase()
    }

    pub fn frame(&self) -> u32 {
        self.anim.frame()
    }

    pub fn is_gone(&self) -> bool {
        self.anim.is_gone()
    }

    pub fn animation(&self) -> &AnimationController {
        &self.anim
    }
}
