use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Circle},
        Block, Borders,
    },
    Frame,
};
use ringclock_core::{ring::OUTER_RADIUS, DigitPlacement};

use crate::app::App;
use crate::theme::Theme;

/// Room left around the outermost ring
const MARGIN: f64 = 30.0;

/// Digits within this angle of the active slot are drawn at full brightness
const NEAR_ANGLE_DEG: f64 = 60.0;

pub struct ClockFaceWidget;

impl ClockFaceWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let block = if app.fullscreen {
            Block::default().style(Style::default().bg(theme.background))
        } else {
            let title = if app.simulated { " ringclock (simulated) " } else { " ringclock " };
            Block::default()
                .title(title)
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent))
                .style(Style::default().bg(theme.background))
        };
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let clock = app.frame();
        let (x_bounds, y_bounds) = canvas_bounds(inner.width, inner.height, OUTER_RADIUS + MARGIN);
        let show_guides = app.show_guides;

        let canvas = Canvas::default()
            .background_color(theme.background)
            .marker(Marker::Braille)
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(|ctx| {
                if show_guides {
                    for ring in &clock.rings {
                        ctx.draw(&Circle {
                            x: 0.0,
                            y: 0.0,
                            radius: ring.radius,
                            color: theme.guide,
                        });
                    }
                    ctx.layer();
                }

                for ring in &clock.rings {
                    for placement in &ring.digits {
                        // Canvas y grows upward, layout y grows downward
                        ctx.print(
                            placement.x,
                            -placement.y,
                            Span::styled(placement.digit.to_string(), digit_style(placement, theme)),
                        );
                    }
                }
            });

        frame.render_widget(canvas, inner);
    }
}

fn digit_style(placement: &DigitPlacement, theme: &Theme) -> Style {
    if placement.is_active {
        Style::default()
            .fg(theme.active)
            .add_modifier(Modifier::BOLD)
    } else if placement.angle_deg.abs() <= NEAR_ANGLE_DEG {
        Style::default().fg(theme.digit)
    } else {
        Style::default().fg(theme.digit_dim)
    }
}

/// Canvas bounds that keep circles round on cells about twice as tall as wide
fn canvas_bounds(width: u16, height: u16, extent: f64) -> ([f64; 2], [f64; 2]) {
    let w = width.max(1) as f64;
    let h = height.max(1) as f64;
    // Canvas units per column; a row spans two of them
    let unit = (2.0 * extent / w).max(extent / h);
    let half_w = unit * w / 2.0;
    let half_h = unit * h;
    ([-half_w, half_w], [-half_h, half_h])
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use ringclock_core::{AppConfig, ClockTime};

    fn render(app: &App, width: u16, height: u16) -> Vec<String> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| ClockFaceWidget::render(frame, frame.area(), app))
            .unwrap();

        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| (0..width).map(|x| buffer[(x, y)].symbol().to_string()).collect())
            .collect()
    }

    #[test]
    fn test_bounds_cover_extent_and_keep_aspect() {
        for (w, h) in [(120u16, 40u16), (80, 60), (200, 20)] {
            let ([x0, x1], [y0, y1]) = canvas_bounds(w, h, 380.0);
            assert!(x1 >= 380.0 && -x0 >= 380.0);
            assert!(y1 >= 380.0 && -y0 >= 380.0);
            // units per row are twice the units per column
            let per_col = (x1 - x0) / w as f64;
            let per_row = (y1 - y0) / h as f64;
            assert!((per_row - 2.0 * per_col).abs() < 1e-9);
        }
    }

    #[test]
    fn test_active_digits_line_up_right_of_centre() {
        let mut app = App::new(
            &AppConfig::default(),
            Theme::default(),
            ClockTime::new(12, 34, 56).unwrap(),
            false,
        );
        app.fullscreen = true;

        let rows = render(&app, 120, 40);
        let found = rows.iter().any(|row| {
            let right: String = row
                .chars()
                .skip(60)
                .filter(|c| c.is_ascii_digit())
                .collect();
            right == "123456"
        });
        assert!(found, "active digits not aligned:\n{}", rows.join("\n"));
    }

    #[test]
    fn test_border_title_outside_fullscreen() {
        let app = App::new(
            &AppConfig::default(),
            Theme::default(),
            ClockTime::midnight(),
            true,
        );
        let rows = render(&app, 80, 30);
        assert!(rows[0].contains("ringclock (simulated)"));
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let app = App::new(
            &AppConfig::default(),
            Theme::default(),
            ClockTime::midnight(),
            false,
        );
        render(&app, 2, 2);
    }
}
