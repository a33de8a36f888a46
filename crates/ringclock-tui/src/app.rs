use std::time::{Duration, Instant};

use ringclock_core::{AppConfig, ClockFrame, ClockState, ClockTime, RadialLayout};
use tracing::{debug, info};

use crate::input::Action;
use crate::keymap::Keymap;
use crate::theme::Theme;
use crate::timing::ClockConfigExt;

/// Auto-hide timer for the hint bar in fullscreen mode
///
/// Outside fullscreen the hint is always shown. Entering fullscreen shows it
/// for `timeout`; any key press or mouse movement shows it again.
#[derive(Debug, Clone)]
pub struct HintVisibility {
    timeout: Duration,
    hide_at: Option<Instant>,
}

impl HintVisibility {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout, hide_at: None }
    }

    /// Show the hint and restart the hide timer
    pub fn arm(&mut self, now: Instant) {
        self.hide_at = Some(now + self.timeout);
    }

    pub fn disarm(&mut self) {
        self.hide_at = None;
    }

    pub fn is_visible(&self, now: Instant, fullscreen: bool) -> bool {
        if !fullscreen {
            return true;
        }
        self.hide_at.is_some_and(|at| now < at)
    }
}

/// Application state
pub struct App {
    pub clock: ClockState,
    pub layout: RadialLayout,
    pub theme: Theme,
    pub keymap: Keymap,
    pub fullscreen: bool,
    pub show_guides: bool,
    pub hint: HintVisibility,
    /// True when time comes from a simulated clock rather than the wall clock
    pub simulated: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig, theme: Theme, start: ClockTime, simulated: bool) -> Self {
        let mut app = Self {
            clock: ClockState::new(start),
            layout: config.clock.layout(),
            theme,
            keymap: Keymap::from_config(&config.keymap),
            fullscreen: false,
            show_guides: config.ui.show_ring_guides,
            hint: HintVisibility::new(Duration::from_millis(config.ui.hint_timeout_ms)),
            simulated,
            should_quit: false,
        };
        if config.ui.start_fullscreen {
            app.set_fullscreen(true, Instant::now());
        }
        app
    }

    /// Time clock fired with a fresh time value.
    /// Returns true when a rollover started on this tick.
    pub fn on_time_tick(&mut self, time: ClockTime) -> bool {
        !self.clock.tick_time(time).is_empty()
    }

    /// Countdown clock fired
    pub fn on_countdown_tick(&mut self) {
        self.clock.tick_countdown();
    }

    /// Key press or mouse movement
    pub fn on_activity(&mut self, now: Instant) {
        if self.fullscreen {
            self.hint.arm(now);
        }
    }

    pub fn handle_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
            Action::ToggleFullscreen => self.set_fullscreen(!self.fullscreen, now),
            Action::ToggleGuides => self.show_guides = !self.show_guides,
            Action::None => {}
        }
    }

    pub fn set_fullscreen(&mut self, fullscreen: bool, now: Instant) {
        self.fullscreen = fullscreen;
        if fullscreen {
            self.hint.arm(now);
        } else {
            self.hint.disarm();
        }
        debug!(fullscreen, "Fullscreen toggled");
    }

    pub fn hint_visible(&self, now: Instant) -> bool {
        self.hint.is_visible(now, self.fullscreen)
    }

    /// Current layout of every ring
    pub fn frame(&self) -> ClockFrame {
        self.clock.frame(&self.layout)
    }
}
