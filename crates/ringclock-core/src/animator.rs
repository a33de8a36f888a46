//! Rollover animation state machine
//!
//! When a ring wraps from its largest digit back to zero, the ring keeps
//! turning forward instead of snapping back. Each ring owns a countdown that
//! starts at the ring's largest digit and drains by one per countdown step;
//! the layout uses the countdown as a moving reference index while it runs.

use std::time::Duration;

use tracing::debug;

use crate::ring::{RingId, RingSpec};

/// Interval between two countdown steps
pub const COUNTDOWN_STEP: Duration = Duration::from_millis(100);

/// Transition state of a single ring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    /// Countdown in progress; `step` runs from `max_digit` down to 0
    Animating { step: u8 },
}

impl AnimationState {
    #[inline]
    pub fn is_animating(&self) -> bool {
        matches!(self, AnimationState::Animating { .. })
    }

    #[inline]
    pub fn step(&self) -> Option<u8> {
        match self {
            AnimationState::Idle => None,
            AnimationState::Animating { step } => Some(*step),
        }
    }
}

/// Countdown driver for one ring
#[derive(Debug, Clone, Copy, Default)]
pub struct RingAnimator {
    state: AnimationState,
}

impl RingAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> AnimationState {
        self.state
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    /// Current countdown value, if a rollover is in flight
    #[inline]
    pub fn current_step(&self) -> Option<u8> {
        self.state.step()
    }

    /// Feed one time tick's (previous, current) digit pair.
    ///
    /// Starts a countdown when the ring wraps from its largest digit to zero.
    /// A wrap seen while a countdown is still running is ignored.
    /// Returns whether a new countdown was started.
    pub fn observe(&mut self, spec: &RingSpec, previous: u8, current: u8) -> bool {
        if previous != spec.max_digit() || current != 0 {
            return false;
        }
        if let AnimationState::Animating { step } = self.state {
            debug!(ring = spec.id.label(), step, "rollover ignored, countdown in flight");
            return false;
        }

        self.state = AnimationState::Animating { step: spec.max_digit() };
        debug!(ring = spec.id.label(), from = previous, "rollover started");
        true
    }

    /// Advance the countdown by one step.
    ///
    /// `Animating(0)` drains to `Idle`; `Idle` is unaffected.
    pub fn step(&mut self) {
        self.state = match self.state {
            AnimationState::Idle => AnimationState::Idle,
            AnimationState::Animating { step: 0 } => AnimationState::Idle,
            AnimationState::Animating { step } => AnimationState::Animating { step: step - 1 },
        };
    }

    /// Drop any countdown in progress
    pub fn reset(&mut self) {
        self.state = AnimationState::Idle;
    }
}

/// Independent countdowns for all six rings
#[derive(Debug, Clone, Copy, Default)]
pub struct RolloverAnimator {
    rings: [RingAnimator; 6],
}

impl RolloverAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn ring(&self, id: RingId) -> &RingAnimator {
        &self.rings[id.index()]
    }

    #[inline]
    pub fn ring_mut(&mut self, id: RingId) -> &mut RingAnimator {
        &mut self.rings[id.index()]
    }

    #[inline]
    pub fn state(&self, id: RingId) -> AnimationState {
        self.ring(id).state()
    }

    /// True while any ring has a countdown in flight
    pub fn is_animating(&self) -> bool {
        self.rings.iter().any(RingAnimator::is_animating)
    }

    /// Advance every running countdown by one step
    pub fn step_all(&mut self) {
        for (id, ring) in RingId::ALL.into_iter().zip(self.rings.iter_mut()) {
            let was_animating = ring.is_animating();
            ring.step();
            if was_animating && !ring.is_animating() {
                debug!(ring = id.label(), "rollover finished");
            }
        }
    }

    pub fn reset(&mut self) {
        self.rings.iter_mut().for_each(RingAnimator::reset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn second_ones() -> &'static RingSpec {
        RingId::SecondOnes.spec()
    }

    #[test]
    fn test_wrap_starts_countdown_at_max() {
        let mut animator = RingAnimator::new();
        assert!(animator.observe(second_ones(), 9, 0));
        assert_eq!(animator.state(), AnimationState::Animating { step: 9 });
    }

    #[test]
    fn test_non_wrap_transitions_stay_idle() {
        let mut animator = RingAnimator::new();
        assert!(!animator.observe(second_ones(), 8, 9));
        assert!(!animator.observe(second_ones(), 0, 0));
        assert!(!animator.observe(second_ones(), 9, 9));
        // A tens ring does not wrap from 9
        assert!(!animator.observe(RingId::SecondTens.spec(), 9, 0));
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_countdown_drains_to_idle() {
        let mut animator = RingAnimator::new();
        animator.observe(second_ones(), 9, 0);

        // 9 -> 0 in nine steps
        for expected in (0..9).rev() {
            animator.step();
            assert_eq!(animator.current_step(), Some(expected));
        }
        // One more step leaves the animating state
        animator.step();
        assert_eq!(animator.state(), AnimationState::Idle);

        // Idle is a fixed point
        animator.step();
        assert_eq!(animator.state(), AnimationState::Idle);
    }

    #[test]
    fn test_wrap_ignored_while_animating() {
        let mut animator = RingAnimator::new();
        animator.observe(second_ones(), 9, 0);
        animator.step();
        animator.step();

        assert!(!animator.observe(second_ones(), 9, 0));
        assert_eq!(animator.current_step(), Some(7));
    }

    #[test]
    fn test_hour_tens_countdown() {
        let spec = RingId::HourTens.spec();
        let mut animator = RingAnimator::new();
        assert!(animator.observe(spec, 2, 0));
        assert_eq!(animator.current_step(), Some(2));
        animator.step();
        animator.step();
        assert_eq!(animator.current_step(), Some(0));
        animator.step();
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_rings_are_independent() {
        let mut rollover = RolloverAnimator::new();
        rollover
            .ring_mut(RingId::SecondOnes)
            .observe(RingId::SecondOnes.spec(), 9, 0);

        assert!(rollover.is_animating());
        for id in RingId::ALL {
            if id != RingId::SecondOnes {
                assert_eq!(rollover.state(id), AnimationState::Idle);
            }
        }

        rollover.step_all();
        assert_eq!(
            rollover.state(RingId::SecondOnes),
            AnimationState::Animating { step: 8 }
        );
        assert_eq!(rollover.state(RingId::MinuteOnes), AnimationState::Idle);

        rollover.reset();
        assert!(!rollover.is_animating());
    }
}
