//! Sprite batching
//!
//! Collects draw commands for one frame and turns them into instance records
//! grouped by sprite sheet, in submission order.

use std::sync::Arc;

use glam::Vec2;

use super::assets::AssetTable;
use super::instance::SpriteInstance;
use super::{DrawCommand, Renderer, SpriteId};

/// Instances that share one texture
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteRun {
    pub sprite: SpriteId,
    pub instances: Vec<SpriteInstance>,
}

/// A [`Renderer`] that builds instance buffers
#[derive(Debug)]
pub struct SpriteBatch {
    assets: Arc<AssetTable>,
    runs: Vec<SpriteRun>,
    skipped: usize,
}

impl SpriteBatch {
    pub fn new(assets: Arc<AssetTable>) -> Self {
        Self {
            assets,
            runs: Vec::new(),
            skipped: 0,
        }
    }

    /// Start a new frame
    pub fn begin(&mut self) {
        self.runs.clear();
        self.skipped = 0;
    }

    /// Finish the frame and hand back the runs
    pub fn end(&mut self) -> Vec<SpriteRun> {
        std::mem::take(&mut self.runs)
    }

    pub fn runs(&self) -> &[SpriteRun] {
        &self.runs
    }

    pub fn instance_count(&self) -> usize {
        self.runs.iter().map(|r| r.instances.len()).sum()
    }

    /// Commands dropped this frame because their sprite was not loaded
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    fn instance(cmd: &DrawCommand, texture: Vec2) -> SpriteInstance {
        let (offset, size) = match cmd.source {
            Some(rect) => (
                Vec2::new(rect.x as f32, rect.y as f32),
                Vec2::new(rect.width as f32, rect.height as f32),
            ),
            None => (Vec2::ZERO, texture),
        };
        let uv0 = offset / texture;
        let uv1 = (offset + size) / texture;
        let quad = size * cmd.scale;

        SpriteInstance {
            position: cmd.position.to_array(),
            size: quad.to_array(),
            uv: [uv0.x, uv0.y, uv1.x, uv1.y],
            color: cmd.tint.to_array(),
            rotation: cmd.rotation,
            origin: cmd.origin.to_array(),
            _pad: 0.0,
        }
    }
}

impl Renderer for SpriteBatch {
    fn draw(&mut self, cmd: DrawCommand) {
        let Some(asset) = self.assets.get(cmd.sprite) else {
            log::warn!("no texture loaded for {:?}, skipping draw", cmd.sprite);
            self.skipped += 1;
            return;
        };
        let instance = Self::instance(&cmd, asset.size.as_vec2());

        // Consecutive draws of the same sheet share a run
        match self.runs.last_mut() {
            Some(run) if run.sprite == cmd.sprite => run.instances.push(instance),
            _ => self.runs.push(SpriteRun {
                sprite: cmd.sprite,
                instances: vec![instance],
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{FrameContext, SourceRect, draw_all};
    use crate::sim::{BreakTiming, Color, Marble, Pulse};

    fn command(sprite: SpriteId, source: Option<SourceRect>) -> DrawCommand {
        DrawCommand {
            sprite,
            position: Vec2::new(10.0, 20.0),
            source,
            tint: Color::WHITE,
            rotation: 0.0,
            origin: Vec2::ZERO,
            scale: 1.0,
        }
    }

    #[test]
    fn test_break_frame_uv() {
        let mut batch = SpriteBatch::new(Arc::new(AssetTable::marblets(BreakTiming::default())));
        let rect = SourceRect { x: 150, y: 0, width: 25, height: 25 };
        batch.draw(command(SpriteId::Break, Some(rect)));

        let inst = batch.runs()[0].instances[0];
        assert_eq!(inst.uv, [0.5, 0.0, 175.0 / 300.0, 1.0]);
        assert_eq!(inst.size, [25.0, 25.0]);
        assert_eq!(inst.position, [10.0, 20.0]);
    }

    #[test]
    fn test_custom_frame_count_stays_on_sheet() {
        let timing = BreakTiming {
            duration: 0.5,
            frame_count: 24,
        };
        let mut batch = SpriteBatch::new(Arc::new(AssetTable::marblets(timing)));
        let mut marble = Marble::with_color(Color::WHITE, timing);
        marble.break_at(0.0);
        marble.update(0.45);
        assert_eq!(marble.frame(), 21);

        marble.draw(&mut batch, &FrameContext::default());
        let uv = batch.runs()[0].instances[0].uv;
        assert_eq!(uv, [525.0 / 600.0, 0.0, 550.0 / 600.0, 1.0]);
        assert!(uv.iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn test_whole_texture_uv() {
        let mut batch = SpriteBatch::new(Arc::new(AssetTable::marblets(BreakTiming::default())));
        batch.draw(command(SpriteId::Marble, None));
        assert_eq!(batch.runs()[0].instances[0].uv, [0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_unknown_sprite_skipped() {
        let mut batch = SpriteBatch::new(Arc::new(AssetTable::new()));
        batch.draw(command(SpriteId::Marble, None));
        assert_eq!(batch.instance_count(), 0);
        assert_eq!(batch.skipped(), 1);
    }

    #[test]
    fn test_runs_group_consecutive_sprites() {
        let assets = Arc::new(AssetTable::marblets(BreakTiming::default()));
        let mut batch = SpriteBatch::new(Arc::clone(&assets));

        let mut marbles: Vec<Marble> = (0..3)
            .map(|_| Marble::with_color(Color::rgb(0, 255, 0), BreakTiming::default()))
            .collect();
        marbles[2].selected = true;

        batch.begin();
        draw_all(&marbles, &mut batch, &FrameContext { pulse: Pulse::default(), rotation: 0.0 });
        let runs = batch.end();

        // Three marbles in one run, then the ring
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].sprite, SpriteId::Marble);
        assert_eq!(runs[0].instances.len(), 3);
        assert_eq!(runs[1].sprite, SpriteId::GlowRing2);
        assert_eq!(batch.instance_count(), 0);
    }
}
