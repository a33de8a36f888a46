//! Gruvbox theme variants
//! https://github.com/morhetz/gruvbox

use ratatui::style::Color;
use crate::theme::Theme;

/// Gruvbox dark (medium contrast)
pub fn dark() -> Theme {
    Theme {
        background: Color::Rgb(0x28, 0x28, 0x28),
        digit: Color::Rgb(0xd4, 0xbe, 0x98),
        digit_dim: Color::Rgb(0x7c, 0x6f, 0x64),
        active: Color::Rgb(0xd8, 0xa6, 0x57),
        guide: Color::Rgb(0x45, 0x40, 0x3d),
        hint: Color::Rgb(0xa8, 0x99, 0x84),
        hint_bg: Color::Rgb(0x32, 0x30, 0x2f),
        accent: Color::Rgb(0x89, 0xb4, 0x82),
    }
}

/// Gruvbox light (medium contrast)
pub fn light() -> Theme {
    Theme {
        background: Color::Rgb(0xfb, 0xf1, 0xc7),
        digit: Color::Rgb(0x65, 0x47, 0x35),
        digit_dim: Color::Rgb(0xa8, 0x99, 0x84),
        active: Color::Rgb(0xb5, 0x76, 0x14),
        guide: Color::Rgb(0xeb, 0xdb, 0xb2),
        hint: Color::Rgb(0x7c, 0x6f, 0x64),
        hint_bg: Color::Rgb(0xf2, 0xe5, 0xbc),
        accent: Color::Rgb(0x42, 0x7b, 0x58),
    }
}
