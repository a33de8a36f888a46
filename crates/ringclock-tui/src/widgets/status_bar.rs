use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use ringclock_core::RingId;

use crate::app::App;
use crate::input::Action;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let status_text = Self::status_text(app);
        let help_hint = Self::help_hint(app);

        let padding_len = (area.width as usize)
            .saturating_sub(status_text.chars().count() + help_hint.chars().count());

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(theme.accent).bg(theme.hint_bg),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.hint_bg)),
            Span::styled(
                help_hint,
                Style::default().fg(theme.hint).bg(theme.hint_bg),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }

    /// " 12:34:56 | SIM | rolling: second-ones 7"
    fn status_text(app: &App) -> String {
        let mut text = format!(" {}", app.clock.time());
        if app.simulated {
            text.push_str(" | SIM");
        }

        let rolling: Vec<String> = RingId::ALL
            .into_iter()
            .filter_map(|ring| {
                app.clock
                    .animation(ring)
                    .step()
                    .map(|step| format!("{} {}", ring.label(), step))
            })
            .collect();
        if !rolling.is_empty() {
            text.push_str(" | rolling: ");
            text.push_str(&rolling.join(", "));
        }
        text
    }

    fn help_hint(app: &App) -> String {
        let key = |action| app.keymap.describe(action).unwrap_or_else(|| "-".to_string());
        format!(
            " {}:fullscreen {}:guides {}:quit ",
            key(Action::ToggleFullscreen),
            key(Action::ToggleGuides),
            key(Action::Quit)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use ringclock_core::{AppConfig, ClockTime};

    fn app_at(time: &str, simulated: bool) -> App {
        App::new(
            &AppConfig::default(),
            Theme::default(),
            time.parse::<ClockTime>().unwrap(),
            simulated,
        )
    }

    #[test]
    fn test_status_text_idle() {
        let app = app_at("07:08:09", false);
        assert_eq!(StatusBarWidget::status_text(&app), " 07:08:09");
    }

    #[test]
    fn test_status_text_lists_rolling_rings() {
        let mut app = app_at("07:08:59", true);
        app.on_time_tick("07:09:00".parse().unwrap());
        assert_eq!(
            StatusBarWidget::status_text(&app),
            " 07:09:00 | SIM | rolling: second-tens 5, second-ones 9"
        );
    }

    #[test]
    fn test_help_hint_uses_keymap() {
        let app = app_at("00:00:00", false);
        assert_eq!(
            StatusBarWidget::help_hint(&app),
            " f:fullscreen g:guides q:quit "
        );
    }
}
