//! Tick cadences derived from configuration

use std::time::Duration;

use ringclock_core::{ClockConfig, RadialLayout, COUNTDOWN_STEP, TIME_TICK};

/// Extension trait for ClockConfig with utility methods
pub trait ClockConfigExt {
    /// Interval of the time clock
    fn time_tick(&self) -> Duration;

    /// Interval of the rollover countdown clock
    fn countdown_step(&self) -> Duration;

    /// Layout using the configured angle step
    fn layout(&self) -> RadialLayout;
}

impl ClockConfigExt for ClockConfig {
    #[inline]
    fn time_tick(&self) -> Duration {
        if self.time_tick_ms == 0 {
            TIME_TICK
        } else {
            Duration::from_millis(self.time_tick_ms)
        }
    }

    #[inline]
    fn countdown_step(&self) -> Duration {
        if self.countdown_step_ms == 0 {
            COUNTDOWN_STEP
        } else {
            Duration::from_millis(self.countdown_step_ms)
        }
    }

    fn layout(&self) -> RadialLayout {
        if self.angle_step_deg.is_finite() && self.angle_step_deg > 0.0 {
            RadialLayout::new(self.angle_step_deg)
        } else {
            RadialLayout::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cadence() {
        let config = ClockConfig::default();
        assert_eq!(config.time_tick(), Duration::from_secs(1));
        assert_eq!(config.countdown_step(), Duration::from_millis(100));
        assert_eq!(config.layout(), RadialLayout::default());
    }

    #[test]
    fn test_zero_falls_back_to_constants() {
        let config = ClockConfig {
            time_tick_ms: 0,
            countdown_step_ms: 0,
            angle_step_deg: f64::NAN,
            ..Default::default()
        };
        assert_eq!(config.time_tick(), TIME_TICK);
        assert_eq!(config.countdown_step(), COUNTDOWN_STEP);
        assert_eq!(config.layout().angle_step_deg(), 20.0);
    }
}
