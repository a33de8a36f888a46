//! Clock state record
//!
//! Owns everything that changes between ticks: the current time, its digits,
//! the previous tick's digits, each ring's previously active digit and the
//! rollover countdowns. A host advances it through two independent clocks:
//! [`ClockState::tick_time`] once per [`TIME_TICK`](crate::TIME_TICK) and
//! [`ClockState::tick_countdown`] once per [`COUNTDOWN_STEP`](crate::COUNTDOWN_STEP).

use serde::Serialize;
use tracing::debug;

use crate::animator::{AnimationState, RolloverAnimator};
use crate::digits::ClockDigits;
use crate::layout::{Offset, RadialLayout};
use crate::ring::RingId;
use crate::time::ClockTime;

#[derive(Debug, Clone)]
pub struct ClockState {
    time: ClockTime,
    digits: ClockDigits,
    /// Digits of the tick before the current one, for wrap detection only
    previous: ClockDigits,
    /// Per ring, the digit shown before the latest change
    previous_active: [u8; 6],
    rollover: RolloverAnimator,
}

impl ClockState {
    /// Start at `time` with no transition in flight
    pub fn new(time: ClockTime) -> Self {
        let digits = ClockDigits::from_time(time);
        let mut previous_active = [0u8; 6];
        for (ring, digit) in digits.iter() {
            previous_active[ring.index()] = digit;
        }
        Self {
            time,
            digits,
            previous: digits,
            previous_active,
            rollover: RolloverAnimator::new(),
        }
    }

    /// Advance to a new time value.
    ///
    /// Decomposes the time, compares every ring against the previous tick's
    /// digits (starting rollovers), and only then overwrites the snapshot.
    /// Returns the rings whose rollover started on this tick.
    pub fn tick_time(&mut self, time: ClockTime) -> Vec<RingId> {
        let digits = ClockDigits::from_time(time);

        let mut started = Vec::new();
        for ring in RingId::ALL {
            let previous = self.previous[ring];
            let current = digits[ring];
            if previous != current {
                self.previous_active[ring.index()] = previous;
            }
            if self
                .rollover
                .ring_mut(ring)
                .observe(ring.spec(), previous, current)
            {
                started.push(ring);
            }
        }

        self.time = time;
        self.digits = digits;
        self.previous = digits;

        if !started.is_empty() {
            debug!(time = %time, rings = ?started, "rollover on time tick");
        }
        started
    }

    /// Advance every in-flight rollover countdown by one step
    pub fn tick_countdown(&mut self) {
        self.rollover.step_all();
    }

    #[inline]
    pub fn time(&self) -> ClockTime {
        self.time
    }

    #[inline]
    pub fn digits(&self) -> ClockDigits {
        self.digits
    }

    #[inline]
    pub fn active(&self, ring: RingId) -> u8 {
        self.digits[ring]
    }

    #[inline]
    pub fn previous_active(&self, ring: RingId) -> u8 {
        self.previous_active[ring.index()]
    }

    #[inline]
    pub fn animation(&self, ring: RingId) -> AnimationState {
        self.rollover.state(ring)
    }

    /// True while any ring is mid-rollover
    pub fn is_animating(&self) -> bool {
        self.rollover.is_animating()
    }

    /// Offset of `digit` on `ring` under the current state
    pub fn position(&self, layout: &RadialLayout, ring: RingId, digit: u8) -> Offset {
        layout.position(
            digit,
            self.active(ring),
            self.previous_active(ring),
            ring.spec(),
            self.animation(ring),
        )
    }

    /// Placement of every digit on every ring, ready for a renderer
    pub fn frame(&self, layout: &RadialLayout) -> ClockFrame {
        let rings = RingId::ALL
            .into_iter()
            .map(|ring| self.ring_frame(layout, ring))
            .collect();
        ClockFrame { time: self.time.to_string(), rings }
    }

    fn ring_frame(&self, layout: &RadialLayout, ring: RingId) -> RingFrame {
        let spec = ring.spec();
        let active = self.active(ring);
        let previous_active = self.previous_active(ring);
        let state = self.animation(ring);

        let digits = spec
            .digits()
            .map(|digit| {
                let angle_deg = layout.angle_degrees(digit, active, previous_active, spec, state);
                let offset = layout.position(digit, active, previous_active, spec, state);
                DigitPlacement {
                    digit,
                    x: offset.x,
                    y: offset.y,
                    angle_deg,
                    is_active: digit == active,
                }
            })
            .collect();

        RingFrame {
            ring,
            radius: spec.radius,
            active,
            countdown: state.step(),
            digits,
        }
    }
}

/// All rings laid out for one render
#[derive(Debug, Clone, Serialize)]
pub struct ClockFrame {
    pub time: String,
    pub rings: Vec<RingFrame>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RingFrame {
    pub ring: RingId,
    pub radius: f64,
    pub active: u8,
    /// Rollover countdown value while a wrap is animating
    pub countdown: Option<u8>,
    pub digits: Vec<DigitPlacement>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct DigitPlacement {
    pub digit: u8,
    pub x: f64,
    pub y: f64,
    pub angle_deg: f64,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u8, m: u8, s: u8) -> ClockTime {
        ClockTime::new(h, m, s).unwrap()
    }

    #[test]
    fn test_new_state_is_idle() {
        let state = ClockState::new(at(16, 14, 58));
        assert!(!state.is_animating());
        assert_eq!(state.active(RingId::SecondOnes), 8);
        assert_eq!(state.previous_active(RingId::SecondOnes), 8);
    }

    #[test]
    fn test_second_rollover_starts_on_wrap_tick() {
        let mut state = ClockState::new(at(16, 14, 58));
        assert!(state.tick_time(at(16, 14, 59)).is_empty());

        let started = state.tick_time(at(16, 15, 0));
        assert_eq!(started, vec![RingId::SecondTens, RingId::SecondOnes]);
        assert_eq!(
            state.animation(RingId::SecondOnes),
            AnimationState::Animating { step: 9 }
        );
        assert_eq!(
            state.animation(RingId::SecondTens),
            AnimationState::Animating { step: 5 }
        );
        // minute-ones went 4 -> 5, no wrap
        assert_eq!(state.animation(RingId::MinuteOnes), AnimationState::Idle);
        assert_eq!(state.previous_active(RingId::SecondOnes), 9);
    }

    #[test]
    fn test_countdown_drains_within_a_second() {
        let mut state = ClockState::new(at(10, 0, 59));
        state.tick_time(at(10, 1, 0));

        // nine 100ms steps reach Animating(0)
        for _ in 0..9 {
            state.tick_countdown();
        }
        assert_eq!(
            state.animation(RingId::SecondOnes),
            AnimationState::Animating { step: 0 }
        );

        state.tick_countdown();
        assert!(!state.is_animating());
    }

    #[test]
    fn test_wrap_compares_against_immediately_prior_tick() {
        let mut state = ClockState::new(at(12, 0, 9));
        // Skipped second: 09 -> 11 never shows a 9 -> 0 transition
        state.tick_time(at(12, 0, 11));
        state.tick_time(at(12, 0, 20));
        assert!(!state.is_animating());

        // Repeating the same time does not re-trigger either
        let mut state = ClockState::new(at(12, 0, 19));
        state.tick_time(at(12, 0, 20));
        for _ in 0..10 {
            state.tick_countdown();
        }
        assert!(state.tick_time(at(12, 0, 20)).is_empty());
    }

    #[test]
    fn test_midnight_rolls_hour_tens() {
        let mut state = ClockState::new(at(23, 59, 59));
        let started = state.tick_time(at(0, 0, 0));
        assert!(started.contains(&RingId::HourTens));
        assert_eq!(
            state.animation(RingId::HourTens),
            AnimationState::Animating { step: 2 }
        );
        // hour-ones goes 3 -> 0, which is not a wrap
        assert!(!started.contains(&RingId::HourOnes));
    }

    #[test]
    fn test_frame_marks_active_digits() {
        let state = ClockState::new(at(16, 14, 58));
        let frame = state.frame(&RadialLayout::default());
        assert_eq!(frame.time, "16:14:58");
        assert_eq!(frame.rings.len(), 6);

        for ring in &frame.rings {
            let active: Vec<_> = ring.digits.iter().filter(|d| d.is_active).collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].digit, ring.active);
            assert!((active[0].x - ring.radius).abs() < 1e-9);
            assert!(active[0].y.abs() < 1e-9);
            assert_eq!(ring.countdown, None);
        }
    }

    #[test]
    fn test_frame_reports_countdown() {
        let mut state = ClockState::new(at(8, 30, 9));
        state.tick_time(at(8, 30, 10));
        state.tick_countdown();

        let frame = state.frame(&RadialLayout::default());
        let ones = &frame.rings[RingId::SecondOnes.index()];
        assert_eq!(ones.countdown, Some(8));
        // digit 5 at reference 8: 5 - 8 = -3 steps
        assert!((ones.digits[5].angle_deg + 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_rollover_on_one_ring_leaves_others_in_place() {
        let layout = RadialLayout::default();
        let mut state = ClockState::new(at(8, 30, 9));
        let before = state.position(&layout, RingId::MinuteOnes, 3);
        state.tick_time(at(8, 30, 10));
        let after = state.position(&layout, RingId::MinuteOnes, 3);
        assert_eq!(before, after);
    }
}
