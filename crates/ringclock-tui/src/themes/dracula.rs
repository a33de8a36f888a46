//! Dracula theme
//! https://draculatheme.com/

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        background: Color::Rgb(0x28, 0x2a, 0x36),
        digit: Color::Rgb(0xf8, 0xf8, 0xf2),
        digit_dim: Color::Rgb(0x62, 0x72, 0xa4),
        active: Color::Rgb(0xff, 0x79, 0xc6),
        guide: Color::Rgb(0x44, 0x47, 0x5a),
        hint: Color::Rgb(0xf8, 0xf8, 0xf2),
        hint_bg: Color::Rgb(0x44, 0x47, 0x5a),
        accent: Color::Rgb(0xbd, 0x93, 0xf9),
    }
}
