//! Break animation state machine
//!
//! A marble sits in `Idle` until something breaks it. The break plays for a
//! fixed duration over a strip of frames, after which the marble is `Gone`.
//! Phase only ever moves forward: Idle -> Breaking -> Gone.

use serde::{Deserialize, Serialize};

use crate::consts::{BREAK_FRAME_COUNT, BREAK_TIME, MARBLE_WIDTH};

/// Largest frame count whose strip width still fits in a `u32` pixel offset
pub const MAX_BREAK_FRAMES: u32 = u32::MAX / MARBLE_WIDTH;

/// Current animation phase of a marble
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Resting on the board
    #[default]
    Idle,
    /// Playing the break animation
    Breaking,
    /// Break finished, waiting to be discarded
    Gone,
}

/// Fixed parameters of the break animation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakTiming {
    /// Seconds from break to gone
    pub duration: f64,
    /// Frames in the break strip
    pub frame_count: u32,
}

impl Default for BreakTiming {
    fn default() -> Self {
        Self {
            duration: BREAK_TIME,
            frame_count: BREAK_FRAME_COUNT,
        }
    }
}

impl BreakTiming {
    pub fn is_valid(&self) -> bool {
        self.duration.is_finite()
            && self.duration > 0.0
            && self.frame_count > 0
            && self.frame_count <= MAX_BREAK_FRAMES
    }
}

/// Tracks the phase and display frame of one marble
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationController {
    timing: BreakTiming,
    phase: Phase,
    /// Game time the break started (valid once phase leaves Idle)
    phase_start: f64,
    frame: u32,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::new(BreakTiming::default())
    }
}

impl AnimationController {
    pub fn new(timing: BreakTiming) -> Self {
        Self {
            timing,
            phase: Phase::Idle,
            phase_start: 0.0,
            frame: 0,
        }
    }

    /// Start breaking at `now`.
    ///
    /// Only an idle marble can break; later calls leave the running
    /// animation untouched and return `false`.
    pub fn start_break(&mut self, now: f64) -> bool {
        if self.phase != Phase::Idle {
            log::trace!("break ignored in phase {:?}", self.phase);
            return false;
        }
        self.phase_start = now;
        self.phase = Phase::Breaking;
        self.frame = 0;
        true
    }

    /// Advance the animation to game time `now`. No-op outside `Breaking`.
    pub fn advance(&mut self, now: f64) {
        if self.phase != Phase::Breaking {
            return;
        }

        // Clock may step backwards; never go below the start
        let elapsed = (now - self.phase_start).max(0.0);

        if elapsed > self.timing.duration {
            self.phase = Phase::Gone;
            self.frame = self.timing.frame_count;
            return;
        }

        let last = self.timing.frame_count.saturating_sub(1);
        let raw = (elapsed / self.timing.duration * self.timing.frame_count as f64).floor();
        let frame = (raw as u32).min(last);
        self.frame = self.frame.max(frame);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn timing(&self) -> BreakTiming {
        self.timing
    }

    /// Time the break started, if it has
    pub fn phase_start_time(&self) -> Option<f64> {
        match self.phase {
            Phase::Idle => None,
            Phase::Breaking | Phase::Gone => Some(self.phase_start),
        }
    }

    pub fn is_breaking(&self) -> bool {
        self.phase == Phase::Breaking
    }

    pub fn is_gone(&self) -> bool {
        self.phase == Phase::Gone
    }

    /// Fraction of the break played at `now` (0 while idle, 1 once gone)
    pub fn progress(&self, now: f64) -> f32 {
        match self.phase {
            Phase::Idle => 0.0,
            Phase::Gone => 1.0,
            Phase::Breaking => {
                let elapsed = (now - self.phase_start).max(0.0);
                (elapsed / self.timing.duration).clamp(0.0, 1.0) as f32
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn marblets_timing() -> BreakTiming {
        BreakTiming {
            duration: 0.5,
            frame_count: 12,
        }
    }

    #[test]
    fn test_new_controller_is_idle() {
        let anim = AnimationController::default();
        assert_eq!(anim.phase(), Phase::Idle);
        assert_eq!(anim.frame(), 0);
        assert_eq!(anim.phase_start_time(), None);
    }

    #[test]
    fn test_break_starts_animation() {
        let mut anim = AnimationController::new(marblets_timing());
        assert!(anim.start_break(10.0));
        assert_eq!(anim.phase(), Phase::Breaking);
        assert_eq!(anim.phase_start_time(), Some(10.0));
        assert_eq!(anim.frame(), 0);
    }

    #[test]
    fn test_break_scenario() {
        let mut anim = AnimationController::new(marblets_timing());
        anim.start_break(10.0);

        anim.advance(10.25);
        assert_eq!(anim.frame(), 6);
        assert_eq!(anim.phase(), Phase::Breaking);

        anim.advance(10.6);
        assert_eq!(anim.phase(), Phase::Gone);
        assert_eq!(anim.frame(), 12);
    }

    #[test]
    fn test_gone_is_terminal() {
        let mut anim = AnimationController::new(marblets_timing());
        anim.start_break(1.0);
        anim.advance(2.0);
        assert!(anim.is_gone());

        // Later ticks and earlier ticks alike leave it alone
        anim.advance(100.0);
        anim.advance(1.1);
        assert_eq!(anim.phase(), Phase::Gone);
        assert_eq!(anim.frame(), 12);
    }

    #[test]
    fn test_rebreak_is_ignored() {
        let mut anim = AnimationController::new(marblets_timing());
        anim.start_break(10.0);
        anim.advance(10.3);
        let frame = anim.frame();

        assert!(!anim.start_break(10.4));
        assert_eq!(anim.phase_start_time(), Some(10.0));
        assert_eq!(anim.frame(), frame);

        anim.advance(11.0);
        assert!(!anim.start_break(12.0));
        assert_eq!(anim.phase(), Phase::Gone);
        assert_eq!(anim.phase_start_time(), Some(10.0));
    }

    #[test]
    fn test_advance_while_idle_is_noop() {
        let mut anim = AnimationController::new(marblets_timing());
        let before = anim.clone();
        anim.advance(5.0);
        anim.advance(-3.0);
        assert_eq!(anim, before);
    }

    #[test]
    fn test_negative_elapsed_clamps_to_zero() {
        let mut anim = AnimationController::new(marblets_timing());
        anim.start_break(10.0);
        anim.advance(9.9);
        assert_eq!(anim.frame(), 0);
        assert_eq!(anim.phase(), Phase::Breaking);
    }

    #[test]
    fn test_exact_duration_holds_last_frame() {
        let mut anim = AnimationController::new(marblets_timing());
        anim.start_break(0.0);
        anim.advance(0.5);
        assert_eq!(anim.phase(), Phase::Breaking);
        assert_eq!(anim.frame(), 11);
    }

    #[test]
    fn test_backwards_clock_keeps_frame() {
        let mut anim = AnimationController::new(marblets_timing());
        anim.start_break(0.0);
        anim.advance(0.4);
        let frame = anim.frame();
        anim.advance(0.1);
        assert_eq!(anim.frame(), frame);
    }

    #[test]
    fn test_progress() {
        let mut anim = AnimationController::new(marblets_timing());
        assert_eq!(anim.progress(3.0), 0.0);
        anim.start_break(1.0);
        assert!((anim.progress(1.25) - 0.5).abs() < 1e-6);
        assert_eq!(anim.progress(0.0), 0.0);
        anim.advance(2.0);
        assert_eq!(anim.progress(2.0), 1.0);
    }

    #[test]
    fn test_timing_validation() {
        assert!(BreakTiming::default().is_valid());
        assert!(!BreakTiming { duration: 0.0, frame_count: 12 }.is_valid());
        assert!(!BreakTiming { duration: 0.5, frame_count: 0 }.is_valid());
        assert!(!BreakTiming { duration: f64::NAN, frame_count: 12 }.is_valid());
        assert!(BreakTiming { duration: 0.5, frame_count: MAX_BREAK_FRAMES }.is_valid());
        assert!(!BreakTiming { duration: 0.5, frame_count: MAX_BREAK_FRAMES + 1 }.is_valid());
    }

    proptest! {
        #[test]
        fn prop_frame_matches_elapsed(start in -1000.0f64..1000.0, d in 0.0f64..0.49) {
            let timing = marblets_timing();
            let mut anim = AnimationController::new(timing);
            anim.start_break(start);
            anim.advance(start + d);

            // Recompute from the time actually observed after rounding
            let elapsed = ((start + d) - start).max(0.0);
            let expected = ((elapsed / timing.duration * timing.frame_count as f64).floor() as u32)
                .min(timing.frame_count - 1);
            prop_assert_eq!(anim.phase(), Phase::Breaking);
            prop_assert_eq!(anim.frame(), expected);
            prop_assert!(anim.frame() < timing.frame_count);
        }

        #[test]
        fn prop_frames_never_decrease(steps in proptest::collection::vec(0.0f64..0.7, 1..40)) {
            let mut steps = steps;
            steps.sort_by(|a, b| a.partial_cmp(b).unwrap());
            let mut anim = AnimationController::new(marblets_timing());
            anim.start_break(0.0);

            let mut last = 0;
            for t in steps {
                anim.advance(t);
                prop_assert!(anim.frame() >= last);
                last = anim.frame();
                if anim.is_gone() {
                    prop_assert_eq!(anim.frame(), 12);
                }
            }
        }

        #[test]
        fn prop_past_duration_is_gone(extra in 1e-6f64..100.0) {
            let mut anim = AnimationController::new(marblets_timing());
            anim.start_break(0.0);
            anim.advance(0.5 + extra);
            prop_assert_eq!(anim.phase(), Phase::Gone);
            prop_assert_eq!(anim.frame(), 12);
        }
    }
}
