pub mod animator;
pub mod clock;
pub mod config;
pub mod digits;
pub mod error;
pub mod layout;
pub mod ring;
pub mod time;

pub use animator::{AnimationState, RingAnimator, RolloverAnimator, COUNTDOWN_STEP};
pub use clock::{ClockFrame, ClockState, DigitPlacement, RingFrame};
pub use config::{AppConfig, ClockConfig, ThemeConfig};
pub use digits::ClockDigits;
pub use error::{Error, Result};
pub use layout::{Offset, RadialLayout, ANGLE_STEP_DEG};
pub use ring::{RingId, RingSpec};
pub use time::{ClockTime, SimulatedClock, SystemClock, TimeSource, TIME_TICK};
