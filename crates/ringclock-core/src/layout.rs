//! Radial placement of digits
//!
//! Every ring holds its active digit at angle 0 (straight right of the centre)
//! and spaces the other digits a fixed angle apart by their distance from the
//! active one. During a rollover the ring's countdown replaces the active digit
//! as reference so the ring appears to keep turning forward through the wrap.

use serde::Serialize;

use crate::animator::AnimationState;
use crate::ring::RingSpec;

/// Angle between two neighbouring digits on a ring, in degrees.
/// Same for every ring, so small rings cover a partial arc.
pub const ANGLE_STEP_DEG: f64 = 20.0;

/// 2D offset from the clock centre; `y` grows downward as on a screen
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialLayout {
    angle_step_deg: f64,
}

impl Default for RadialLayout {
    fn default() -> Self {
        Self::new(ANGLE_STEP_DEG)
    }
}

impl RadialLayout {
    pub fn new(angle_step_deg: f64) -> Self {
        Self { angle_step_deg }
    }

    #[inline]
    pub fn angle_step_deg(&self) -> f64 {
        self.angle_step_deg
    }

    /// Offset of `digit` on the ring described by `spec`.
    ///
    /// `previous_active` is the digit the ring showed before `active`.
    pub fn position(
        &self,
        digit: u8,
        active: u8,
        previous_active: u8,
        spec: &RingSpec,
        state: AnimationState,
    ) -> Offset {
        let radians = self
            .angle_degrees(digit, active, previous_active, spec, state)
            .to_radians();
        Offset {
            x: spec.radius * radians.cos(),
            y: spec.radius * radians.sin(),
        }
    }

    /// Angle of `digit` in degrees, 0 being the active slot
    pub fn angle_degrees(
        &self,
        digit: u8,
        active: u8,
        previous_active: u8,
        spec: &RingSpec,
        state: AnimationState,
    ) -> f64 {
        angular_steps(digit, active, previous_active, spec, state) as f64 * self.angle_step_deg
    }
}

/// Signed number of angle steps between `digit` and the ring's reference slot
pub fn angular_steps(
    digit: u8,
    active: u8,
    previous_active: u8,
    spec: &RingSpec,
    state: AnimationState,
) -> i32 {
    debug_assert!(spec.contains(digit), "digit {} outside {:?}", digit, spec.id);
    debug_assert!(spec.contains(active), "active {} outside {:?}", active, spec.id);

    let max = spec.max_digit() as i32;
    let digit = digit as i32;

    match state {
        AnimationState::Animating { step } if previous_active as i32 == max && active == 0 => {
            // Sweep as if the active slot were still moving through `step + 1`
            let reference = step as i32;
            if digit > reference {
                digit - reference - 1
            } else if digit == 0 {
                max - reference
            } else {
                digit - reference
            }
        }
        _ => digit - active as i32,
    }
}
