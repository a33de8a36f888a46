use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEventKind};
use tokio::sync::mpsc;
use tokio::time::{interval, Interval, MissedTickBehavior};
use tracing::{debug, warn};

/// How long the input thread blocks before checking whether it should stop
const INPUT_POLL: Duration = Duration::from_millis(50);

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// The pointer moved or clicked
    Mouse,
    /// Terminal was resized
    Resize(u16, u16),
    /// Time clock fired
    TimeTick,
    /// Rollover countdown clock fired
    CountdownTick,
}

/// Merges terminal input with the two tick clocks
///
/// The time clock and the countdown clock run independently; terminal
/// input is read on a blocking thread and forwarded through a channel.
pub struct EventHandler {
    time_tick: Interval,
    countdown_tick: Interval,
    input_rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl EventHandler {
    /// Create a handler reading terminal input
    pub fn new(time_tick: Duration, countdown_step: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::task::spawn_blocking(move || read_terminal_events(tx));
        Self::with_input(time_tick, countdown_step, rx)
    }

    /// Create a handler fed by an arbitrary input channel
    pub fn with_input(
        time_tick: Duration,
        countdown_step: Duration,
        input_rx: mpsc::UnboundedReceiver<AppEvent>,
    ) -> Self {
        let mut time_tick = interval(time_tick);
        // A late time tick is caught up by reading the wall clock, not by bursting
        time_tick.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut countdown_tick = interval(countdown_step);
        countdown_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        Self {
            time_tick,
            countdown_tick,
            input_rx,
        }
    }

    /// Restart the countdown clock so its next tick lands one full step from now.
    ///
    /// Called when a time tick starts a rollover; both clocks share a phase, so
    /// without this the countdown tick due at the same instant would consume the
    /// first step immediately.
    pub fn restart_countdown(&mut self) {
        self.countdown_tick.reset();
    }

    /// Wait for the next event. Returns None once input is closed.
    pub async fn next(&mut self) -> Option<AppEvent> {
        tokio::select! {
            // Time ticks win ties so a wrap is detected before the countdown steps
            biased;
            _ = self.time_tick.tick() => Some(AppEvent::TimeTick),
            _ = self.countdown_tick.tick() => Some(AppEvent::CountdownTick),
            event = self.input_rx.recv() => event,
        }
    }
}

/// Blocking loop forwarding crossterm events until the receiver is dropped
fn read_terminal_events(tx: mpsc::UnboundedSender<AppEvent>) {
    while !tx.is_closed() {
        let ready = match event::poll(INPUT_POLL) {
            Ok(ready) => ready,
            Err(e) => {
                warn!("Terminal poll failed: {}", e);
                break;
            }
        };
        if !ready {
            continue;
        }

        let forwarded = match event::read() {
            // Only handle key press events, ignore release events
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
            Ok(Event::Mouse(mouse)) => match mouse.kind {
                MouseEventKind::Moved | MouseEventKind::Down(_) => Some(AppEvent::Mouse),
                _ => None,
            },
            Ok(Event::Resize(w, h)) => Some(AppEvent::Resize(w, h)),
            Ok(_) => None,
            Err(e) => {
                warn!("Terminal read failed: {}", e);
                break;
            }
        };

        if let Some(event) = forwarded {
            if tx.send(event).is_err() {
                break;
            }
        }
    }
    debug!("Input reader stopped");
}
