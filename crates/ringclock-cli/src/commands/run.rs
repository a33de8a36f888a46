use std::time::Instant;

use anyhow::Result;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};
use tracing::info;

use ringclock_core::{AppConfig, ClockTime, SimulatedClock, SystemClock, TimeSource};
use ringclock_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    load_theme,
    terminal::{self, Tui},
    timing::ClockConfigExt,
    widgets::{ClockFaceWidget, StatusBarWidget},
};

pub async fn run(config: &AppConfig, start: Option<ClockTime>) -> Result<()> {
    // A simulated clock returns its start time on the first poll,
    // so the first time tick leaves the initial state unchanged
    let (mut source, initial): (Box<dyn TimeSource + Send>, ClockTime) = match start {
        Some(at) => (Box::new(SimulatedClock::starting_at(at)), at),
        None => {
            let mut system = SystemClock;
            let now = system.now();
            (Box::new(system), now)
        }
    };

    let theme = load_theme(&config.ui.theme);
    let mut app = App::new(config, theme, initial, start.is_some());
    info!(start = %initial, simulated = app.simulated, "Starting clock");

    let mut terminal = terminal::init("ringclock")?;
    let result = event_loop(&mut terminal, &mut app, source.as_mut(), config).await;

    // Restore terminal even if the loop failed
    terminal::restore(&mut terminal)?;
    info!("Clock stopped");

    result
}

async fn event_loop(
    terminal: &mut Tui,
    app: &mut App,
    source: &mut (dyn TimeSource + Send),
    config: &AppConfig,
) -> Result<()> {
    let mut events = EventHandler::new(config.clock.time_tick(), config.clock.countdown_step());

    loop {
        let now = Instant::now();
        terminal.draw(|frame| draw(frame, app, now))?;

        let Some(event) = events.next().await else {
            break;
        };

        match event {
            AppEvent::TimeTick => {
                if app.on_time_tick(source.now()) {
                    events.restart_countdown();
                }
            }
            AppEvent::CountdownTick => app.on_countdown_tick(),
            AppEvent::Key(key) => {
                let now = Instant::now();
                app.on_activity(now);
                let action = handle_key_event(key, &app.keymap);
                app.handle_action(action, now);
            }
            AppEvent::Mouse => app.on_activity(Instant::now()),
            // The next draw picks up the new size
            AppEvent::Resize(_, _) => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn draw(frame: &mut Frame, app: &App, now: Instant) {
    let size = frame.area();

    if !app.hint_visible(now) {
        ClockFaceWidget::render(frame, size, app);
        return;
    }

    // Clock face + status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(size);

    ClockFaceWidget::render(frame, main_layout[0], app);
    StatusBarWidget::render(frame, main_layout[1], app);
}
