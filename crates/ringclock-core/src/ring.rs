//! Static ring registry
//!
//! Each of the six rings shows one decimal place of the time. Cardinality and
//! radius are fixed for the lifetime of the process.

use serde::Serialize;

/// One concentric ring of the clock face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RingId {
    HourTens,
    HourOnes,
    MinuteTens,
    MinuteOnes,
    SecondTens,
    SecondOnes,
}

impl RingId {
    /// All rings, innermost first
    pub const ALL: [RingId; 6] = [
        RingId::HourTens,
        RingId::HourOnes,
        RingId::MinuteTens,
        RingId::MinuteOnes,
        RingId::SecondTens,
        RingId::SecondOnes,
    ];

    /// Position of this ring in `RingId::ALL` and in every per-ring array
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            RingId::HourTens => 0,
            RingId::HourOnes => 1,
            RingId::MinuteTens => 2,
            RingId::MinuteOnes => 3,
            RingId::SecondTens => 4,
            RingId::SecondOnes => 5,
        }
    }

    /// Static description of this ring
    #[inline]
    pub fn spec(self) -> &'static RingSpec {
        &REGISTRY[self.index()]
    }

    pub const fn label(self) -> &'static str {
        match self {
            RingId::HourTens => "hour-tens",
            RingId::HourOnes => "hour-ones",
            RingId::MinuteTens => "minute-tens",
            RingId::MinuteOnes => "minute-ones",
            RingId::SecondTens => "second-tens",
            RingId::SecondOnes => "second-ones",
        }
    }
}

/// Cardinality and placement of a ring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSpec {
    pub id: RingId,
    /// Number of digits on the ring; valid digit values are `0..digit_count`
    pub digit_count: u8,
    /// Distance of every digit from the clock centre
    pub radius: f64,
}

impl RingSpec {
    /// Largest digit the ring can show; the value it wraps from
    #[inline]
    pub const fn max_digit(&self) -> u8 {
        self.digit_count - 1
    }

    #[inline]
    pub const fn contains(&self, digit: u8) -> bool {
        digit < self.digit_count
    }

    /// Digits shown on the ring, in order
    pub fn digits(&self) -> impl Iterator<Item = u8> {
        0..self.digit_count
    }
}

/// Ring registry indexed by `RingId::index`.
/// Radii strictly decrease from second-ones (outermost) to hour-tens.
pub static REGISTRY: [RingSpec; 6] = [
    RingSpec { id: RingId::HourTens, digit_count: 3, radius: 100.0 },
    RingSpec { id: RingId::HourOnes, digit_count: 10, radius: 150.0 },
    RingSpec { id: RingId::MinuteTens, digit_count: 6, radius: 200.0 },
    RingSpec { id: RingId::MinuteOnes, digit_count: 10, radius: 250.0 },
    RingSpec { id: RingId::SecondTens, digit_count: 6, radius: 300.0 },
    RingSpec { id: RingId::SecondOnes, digit_count: 10, radius: 350.0 },
];

/// Radius of the outermost ring
pub const OUTER_RADIUS: f64 = 350.0;

/// Look up the static spec for a ring
#[inline]
pub fn spec(id: RingId) -> &'static RingSpec {
    id.spec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_matches_index() {
        for id in RingId::ALL {
            assert_eq!(spec(id).id, id);
        }
    }

    #[test]
    fn test_digit_counts() {
        assert_eq!(RingId::HourTens.spec().digit_count, 3);
        assert_eq!(RingId::HourOnes.spec().digit_count, 10);
        assert_eq!(RingId::MinuteTens.spec().digit_count, 6);
        assert_eq!(RingId::MinuteOnes.spec().digit_count, 10);
        assert_eq!(RingId::SecondTens.spec().digit_count, 6);
        assert_eq!(RingId::SecondOnes.spec().digit_count, 10);
    }

    #[test]
    fn test_wrap_maxima() {
        // Tens rings wrap from 5, hour-tens from 2, ones rings from 9
        assert_eq!(RingId::HourTens.spec().max_digit(), 2);
        assert_eq!(RingId::MinuteTens.spec().max_digit(), 5);
        assert_eq!(RingId::SecondTens.spec().max_digit(), 5);
        assert_eq!(RingId::HourOnes.spec().max_digit(), 9);
        assert_eq!(RingId::SecondOnes.spec().max_digit(), 9);
    }

    #[test]
    fn test_radii_strictly_increase_outward() {
        for pair in REGISTRY.windows(2) {
            assert!(pair[0].radius < pair[1].radius);
        }
        assert_eq!(OUTER_RADIUS, RingId::SecondOnes.spec().radius);
    }

    #[test]
    fn test_digits_iterates_full_ring() {
        let digits: Vec<u8> = RingId::MinuteTens.spec().digits().collect();
        assert_eq!(digits, vec![0, 1, 2, 3, 4, 5]);
        assert!(RingId::HourTens.spec().contains(2));
        assert!(!RingId::HourTens.spec().contains(3));
    }
}
