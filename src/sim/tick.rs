//! Per-frame update of all marbles
//!
//! Order within one tick: compute the shared pulse, apply break commands,
//! then advance every marble. The pulse is returned so the draw pass reads the
//! same value for every marble.

use super::marble::Marble;
use super::pulse::Pulse;

/// Commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Indices of marbles gameplay wants broken this tick
    pub breaks: Vec<usize>,
}

/// Advance all marbles to game time `now`
pub fn tick(marbles: &mut [Marble], input: &TickInput, now: f64, pulse_rate: f64) -> Pulse {
    let pulse = Pulse::from_time(now, pulse_rate);

    for &index in &input.breaks {
        match marbles.get_mut(index) {
            Some(marble) => {
                marble.break_at(now);
            }
            None => log::warn!("break requested for missing marble {}", index),
        }
    }

    for marble in marbles.iter_mut() {
        marble.update(now);
    }

    pulse
}

/// Drop marbles whose break has finished. Returns how many were removed.
pub fn retire_gone(marbles: &mut Vec<Marble>) -> usize {
    let before = marbles.len();
    marbles.retain(|m| !m.is_gone());
    let removed = before - marbles.len();
    if removed > 0 {
        log::debug!("retired {} marbles", removed);
    }
    removed
}
