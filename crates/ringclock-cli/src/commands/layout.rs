use anyhow::Result;

use ringclock_core::{AppConfig, ClockFrame, ClockState, ClockTime, SystemClock, TimeSource};
use ringclock_tui::timing::ClockConfigExt;

/// Lay out the clock at `at` (or now) as reached from the second before,
/// so a rollover landing on `at` is in flight, then apply `steps` countdown steps.
pub fn run(config: &AppConfig, at: Option<ClockTime>, steps: u8, json: bool) -> Result<()> {
    let frame = snapshot(config, at.unwrap_or_else(|| SystemClock.now()), steps);

    if json {
        println!("{}", serde_json::to_string_pretty(&frame)?);
    } else {
        print_table(&frame, steps);
    }

    Ok(())
}

fn snapshot(config: &AppConfig, time: ClockTime, steps: u8) -> ClockFrame {
    let mut state = ClockState::new(time.minus_seconds(1));
    state.tick_time(time);
    for _ in 0..steps {
        state.tick_countdown();
    }
    state.frame(&config.clock.layout())
}

fn print_table(frame: &ClockFrame, steps: u8) {
    println!("Layout at {} after {} countdown step(s)\n", frame.time, steps);

    for ring in frame.rings.iter().rev() {
        let rolling = match ring.countdown {
            Some(step) => format!("  rolling (countdown {})", step),
            None => String::new(),
        };
        println!(
            "{:<12} radius {:>5.1}  active {}{}",
            ring.ring.label(),
            ring.radius,
            ring.active,
            rolling
        );
        for placement in &ring.digits {
            println!(
                "  {}{} {:>7.1}°  x {:>8.2}  y {:>8.2}",
                placement.digit,
                if placement.is_active { "*" } else { " " },
                placement.angle_deg,
                placement.x,
                placement.y
            );
        }
        println!();
    }
}
