//! Marblets headless demo
//!
//! Fills a small board, breaks a few marbles and runs the fixed-timestep loop
//! until every broken marble has been retired, logging each stage.

use std::sync::Arc;

use glam::Vec2;
use rand::SeedableRng;
use rand::seq::index::sample;
use rand_pcg::Pcg32;

use marblets::Settings;
use marblets::consts::SIM_DT;
use marblets::render::{AssetTable, FrameContext, SpriteBatch, draw_all};
use marblets::sim::{GameClock, Marble, TickInput, retire_gone, tick};

const BOARD_COLUMNS: usize = 8;
const BOARD_ROWS: usize = 6;

/// Demo instance holding all state
struct Game {
    settings: Settings,
    marbles: Vec<Marble>,
    clock: GameClock,
    batch: SpriteBatch,
    input: TickInput,
    rng: Pcg32,
}

impl Game {
    fn new(settings: Settings, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let timing = settings.timing();
        let mut marbles = Vec::with_capacity(BOARD_COLUMNS * BOARD_ROWS);
        for row in 0..BOARD_ROWS {
            for col in 0..BOARD_COLUMNS {
                let mut marble = Marble::new(settings.palette(), timing, &mut rng);
                marble.board_location = Vec2::new(col as f32, row as f32);
                marble.position = Vec2::new(
                    (col as u32 * Marble::WIDTH) as f32,
                    (row as u32 * Marble::HEIGHT) as f32,
                );
                marbles.push(marble);
            }
        }

        Self {
            settings,
            marbles,
            clock: GameClock::new(),
            batch: SpriteBatch::new(Arc::new(AssetTable::marblets(timing))),
            input: TickInput::default(),
            rng,
        }
    }

    /// Select a random group of distinct marbles and queue it for breaking
    fn pick_group(&mut self, size: usize) {
        let amount = size.min(self.marbles.len());
        for index in sample(&mut self.rng, self.marbles.len(), amount).into_vec() {
            self.marbles[index].selected = true;
            self.input.breaks.push(index);
        }
    }

    /// Run one fixed step and draw it
    fn step(&mut self) {
        let now = self.clock.advance(SIM_DT);
        let input = std::mem::take(&mut self.input);
        let pulse = tick(&mut self.marbles, &input, now, self.settings.pulse_rate);

        let ctx = FrameContext {
            pulse,
            rotation: self.settings.screen_rotation,
        };
        self.batch.begin();
        draw_all(&self.marbles, &mut self.batch, &ctx);
        let runs = self.batch.end();
        log::trace!(
            "t={:.3}s drew {} runs, {} instances",
            now,
            runs.len(),
            runs.iter().map(|r| r.instances.len()).sum::<usize>()
        );

        let retired = retire_gone(&mut self.marbles);
        if retired > 0 {
            log::info!(
                "t={:.3}s retired {} marbles, {} left",
                now,
                retired,
                self.marbles.len()
            );
        }
    }

    fn breaking(&self) -> usize {
        self.marbles.iter().filter(|m| m.animation().is_breaking()).count()
    }
}

fn main() {
    env_logger::init();
    log::info!("Marblets (headless) starting...");

    let settings = Settings::load(Settings::FILE_NAME);
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(12345);

    let mut game = Game::new(settings, seed);
    log::info!("Board filled with {} marbles (seed {})", game.marbles.len(), seed);

    game.pick_group(5);
    game.step();
    log::info!("{} marbles breaking", game.breaking());

    let max_steps = (game.settings.break_time / SIM_DT).ceil() as usize + 2;
    for _ in 0..max_steps {
        game.step();
        if game.breaking() == 0 {
            break;
        }
    }

    log::info!(
        "Done at t={:.3}s with {} marbles on the board",
        game.clock.total_seconds(),
        game.marbles.len()
    );
}
