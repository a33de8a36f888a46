//! Theme registry and loader
//!
//! Built-in palettes with per-colour overrides from the config file.

pub(crate) mod dracula;
pub(crate) mod gruvbox;
pub(crate) mod nord;

use ratatui::style::Color;
use ringclock_core::config::{ThemeColorOverrides, ThemeConfig};
use tracing::warn;

use crate::theme::Theme;

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        // Short form: RGB -> RRGGBB
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        // Full form: RRGGBB
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

/// Load a theme by name from config
pub fn load_theme(config: &ThemeConfig) -> Theme {
    let base = match config.name.to_lowercase().as_str() {
        "gruvbox-dark" | "gruvbox" => gruvbox::dark(),
        "gruvbox-light" => gruvbox::light(),
        "nord" => nord::default(),
        "dracula" => dracula::default(),
        unknown => {
            warn!(
                "Unknown theme '{}', falling back to gruvbox-dark (available: {})",
                unknown,
                available_themes().join(", ")
            );
            gruvbox::dark()
        }
    };

    apply_overrides(base, &config.colors)
}

/// Apply color overrides to a base theme
fn apply_overrides(mut theme: Theme, overrides: &ThemeColorOverrides) -> Theme {
    let slots: [(&Option<String>, &mut Color); 8] = [
        (&overrides.background, &mut theme.background),
        (&overrides.digit, &mut theme.digit),
        (&overrides.digit_dim, &mut theme.digit_dim),
        (&overrides.active, &mut theme.active),
        (&overrides.guide, &mut theme.guide),
        (&overrides.hint, &mut theme.hint),
        (&overrides.hint_bg, &mut theme.hint_bg),
        (&overrides.accent, &mut theme.accent),
    ];

    for (hex, slot) in slots {
        if let Some(hex) = hex {
            match parse_hex_color(hex) {
                Some(color) => *slot = color,
                None => warn!("Invalid color override '{}', ignoring", hex),
            }
        }
    }

    theme
}

/// Get list of available theme names
pub(crate) fn available_themes() -> Vec<&'static str> {
    vec!["gruvbox-dark", "gruvbox-light", "nord", "dracula"]
}
