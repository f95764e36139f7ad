//! Draw-side types for marbles
//!
//! Marbles never touch textures. They emit [`DrawCommand`]s to a [`Renderer`],
//! which resolves sprite ids through an injected asset table.

pub mod assets;
pub mod batch;
pub mod instance;

pub use assets::{AssetTable, SpriteAsset};
pub use batch::SpriteBatch;
pub use instance::SpriteInstance;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{Color, Marble, Phase, Pulse, Ring};

/// Sprites a marble can draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteId {
    Marble,
    Break,
    GlowRing1,
    GlowRing2,
}

/// Pixel rectangle inside a sprite sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// One sprite draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub sprite: SpriteId,
    pub position: Vec2,
    /// Sub-rectangle of the sheet, `None` for the whole texture
    pub source: Option<SourceRect>,
    pub tint: Color,
    /// Radians
    pub rotation: f32,
    pub origin: Vec2,
    pub scale: f32,
}

/// Sink for draw commands
pub trait Renderer {
    fn draw(&mut self, cmd: DrawCommand);
}

impl Renderer for Vec<DrawCommand> {
    fn draw(&mut self, cmd: DrawCommand) {
        self.push(cmd);
    }
}

/// Read-only values shared by every draw in a tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameContext {
    pub pulse: Pulse,
    /// Screen rotation in radians
    pub rotation: f32,
}

/// What a marble looks like this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarbleVisual {
    /// Frame of the break strip
    BreakFrame(u32),
    Plain,
    /// Plain marble plus a glow ring
    Highlighted { ring: Ring, alpha: u8 },
}

impl MarbleVisual {
    pub fn select(phase: Phase, frame: u32, selected: bool, pulse: Pulse) -> Self {
        match phase {
            Phase::Breaking | Phase::Gone => MarbleVisual::BreakFrame(frame),
            Phase::Idle if !selected => MarbleVisual::Plain,
            Phase::Idle => {
                let (ring, alpha) = pulse.ring();
                MarbleVisual::Highlighted { ring, alpha }
            }
        }
    }
}

impl Marble {
    pub fn visual(&self, pulse: Pulse) -> MarbleVisual {
        MarbleVisual::select(self.phase(), self.frame(), self.selected, pulse)
    }

    /// Emit the draw commands for this marble
    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R, ctx: &FrameContext) {
        let cmd = |sprite, source, tint| DrawCommand {
            sprite,
            position: self.position,
            source,
            tint,
            rotation: ctx.rotation,
            origin: Vec2::ZERO,
            scale: 1.0,
        };

        match self.visual(ctx.pulse) {
            MarbleVisual::BreakFrame(frame) => {
                let source = SourceRect {
                    x: frame.saturating_mul(Marble::WIDTH),
                    y: 0,
                    width: Marble::WIDTH,
                    height: Marble::HEIGHT,
                };
                renderer.draw(cmd(SpriteId::Break, Some(source), self.color()));
            }
            MarbleVisual::Plain => {
                renderer.draw(cmd(SpriteId::Marble, None, self.color()));
            }
            MarbleVisual::Highlighted { ring, alpha } => {
                renderer.draw(cmd(SpriteId::Marble, None, self.color()));
                let ring_sprite = match ring {
                    Ring::Single => SpriteId::GlowRing1,
                    Ring::Double => SpriteId::GlowRing2,
                };
                let fade = Color::rgba(255, 255, 255, alpha);
                renderer.draw(cmd(ring_sprite, None, fade));
            }
        }
    }
}

/// Draw every marble with one shared frame context
pub fn draw_all<R: Renderer + ?Sized>(marbles: &[Marble], renderer: &mut R, ctx: &FrameContext) {
    for marble in marbles {
        marble.draw(renderer, ctx);
    }
}
