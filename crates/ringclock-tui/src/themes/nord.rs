//! Nord theme
//! https://www.nordtheme.com/

use ratatui::style::Color;
use crate::theme::Theme;

/// Nord default theme
pub fn default() -> Theme {
    Theme {
        background: Color::Rgb(0x2e, 0x34, 0x40), // nord0
        digit: Color::Rgb(0xd8, 0xde, 0xe9),      // nord4
        digit_dim: Color::Rgb(0x4c, 0x56, 0x6a),  // nord3
        active: Color::Rgb(0x88, 0xc0, 0xd0),     // nord8
        guide: Color::Rgb(0x3b, 0x42, 0x52),      // nord1
        hint: Color::Rgb(0xe5, 0xe9, 0xf0),       // nord5
        hint_bg: Color::Rgb(0x43, 0x4c, 0x5e),    // nord2
        accent: Color::Rgb(0x8f, 0xbc, 0xbb),     // nord7
    }
}
