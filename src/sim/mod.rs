//! Deterministic marble simulation
//!
//! Gameplay-side state lives here. This module must stay pure:
//! - Time comes in from the caller, never from the system clock
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod animation;
pub mod clock;
pub mod marble;
pub mod palette;
pub mod pulse;
pub mod tick;

pub use animation::{AnimationController, BreakTiming, MAX_BREAK_FRAMES, Phase};
pub use clock::GameClock;
pub use marble::Marble;
pub use palette::{Color, Palette};
pub use pulse::{Pulse, Ring};
pub use tick::{TickInput, retire_gone, tick};
