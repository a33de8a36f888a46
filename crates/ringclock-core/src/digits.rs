//! Decomposition of a time value into per-ring digits

use std::ops::Index;

use crate::ring::RingId;
use crate::time::ClockTime;

/// Split a two-digit time field into (tens, ones)
#[inline]
pub const fn split(value: u8) -> (u8, u8) {
    (value / 10, value % 10)
}

/// The six digits of a time value, indexed by ring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockDigits([u8; 6]);

impl ClockDigits {
    pub fn from_time(time: ClockTime) -> Self {
        let (hour_tens, hour_ones) = split(time.hours);
        let (minute_tens, minute_ones) = split(time.minutes);
        let (second_tens, second_ones) = split(time.seconds);
        Self([
            hour_tens,
            hour_ones,
            minute_tens,
            minute_ones,
            second_tens,
            second_ones,
        ])
    }

    #[inline]
    pub fn get(&self, ring: RingId) -> u8 {
        self.0[ring.index()]
    }

    /// (ring, digit) pairs, innermost ring first
    pub fn iter(&self) -> impl Iterator<Item = (RingId, u8)> + '_ {
        RingId::ALL.into_iter().map(move |ring| (ring, self.get(ring)))
    }
}

impl Index<RingId> for ClockDigits {
    type Output = u8;

    fn index(&self, ring: RingId) -> &u8 {
        &self.0[ring.index()]
    }
}
