use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyModifiers};
use ringclock_core::config::KeymapConfig;
use tracing::warn;

use crate::input::Action;

/// Parsed key binding (key code + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

/// Runtime keymap for key-to-action lookup
#[derive(Debug)]
pub struct Keymap {
    bindings: HashMap<KeyBinding, Action>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&KeymapConfig::default())
    }
}

impl Keymap {
    /// Create a keymap from configuration
    pub fn from_config(config: &KeymapConfig) -> Self {
        let mut bindings = HashMap::new();

        let mut add_binding = |key_str: &str, action: Action| {
            match parse_key_binding(key_str) {
                Some(binding) => {
                    if let Some(existing) = bindings.get(&binding) {
                        warn!(
                            "Key conflict: '{}' already bound to {:?}, ignoring binding to {:?}",
                            key_str, existing, action
                        );
                    } else {
                        bindings.insert(binding, action);
                    }
                }
                None => warn!("Invalid key binding: '{}', ignoring", key_str),
            }
        };

        add_binding(&config.quit, Action::Quit);
        add_binding(&config.toggle_fullscreen, Action::ToggleFullscreen);
        add_binding(&config.toggle_guides, Action::ToggleGuides);

        // Ctrl+C and Esc always quit
        bindings.insert(KeyBinding::ctrl(KeyCode::Char('c')), Action::Quit);
        bindings
            .entry(KeyBinding::simple(KeyCode::Esc))
            .or_insert(Action::Quit);

        Self { bindings }
    }

    /// Get action for a key binding
    pub fn get(&self, binding: &KeyBinding) -> Option<&Action> {
        self.bindings.get(binding)
    }

    /// First key bound to `action`, rendered for the hint bar
    pub fn describe(&self, action: Action) -> Option<String> {
        let mut keys: Vec<String> = self
            .bindings
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|(binding, _)| describe_binding(binding))
            .collect();
        // HashMap order is random; prefer the shortest (usually the configured) key
        keys.sort_by_key(|k| (k.len(), k.clone()));
        keys.into_iter().next()
    }
}

fn describe_binding(binding: &KeyBinding) -> String {
    let key = match binding.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        other => format!("{:?}", other),
    };
    if binding.modifiers.contains(KeyModifiers::CONTROL) {
        format!("C-{}", key)
    } else {
        key
    }
}

/// Parse Vim-style key notation into KeyBinding
/// Supported formats:
/// - Single char: "q", "f", etc.
/// - Uppercase (Shift): "F", "G", etc.
/// - Ctrl: "<C-q>"
/// - Shift: "<S-f>", "<S-Tab>"
/// - Special keys: "<CR>", "<Esc>", "<Tab>", "<Space>", "<F11>", arrows
pub fn parse_key_binding(s: &str) -> Option<KeyBinding> {
    let s = s.trim();

    if s.len() > 2 && s.starts_with('<') && s.ends_with('>') {
        let inner = &s[1..s.len() - 1];
        return parse_special_key(inner);
    }

    let mut chars = s.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    if c.is_ascii_uppercase() {
        return Some(KeyBinding::shift(KeyCode::Char(c)));
    }
    Some(KeyBinding::simple(KeyCode::Char(c)))
}

/// Parse special key notation (content inside <...>)
fn parse_special_key(inner: &str) -> Option<KeyBinding> {
    if let Some(rest) = inner.strip_prefix("C-") {
        let key = parse_key_name(rest)?;
        return Some(KeyBinding::ctrl(key));
    }

    if let Some(rest) = inner.strip_prefix("S-") {
        // Shifted letters arrive as uppercase chars
        let key = match parse_key_name(rest)? {
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_uppercase()),
            other => other,
        };
        return Some(KeyBinding::shift(key));
    }

    parse_key_name(inner).map(KeyBinding::simple)
}

/// Parse a key name (without modifiers)
fn parse_key_name(name: &str) -> Option<KeyCode> {
    match name.to_lowercase().as_str() {
        "cr" | "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "tab" => Some(KeyCode::Tab),
        "space" | "spc" => Some(KeyCode::Char(' ')),
        "bs" | "backspace" => Some(KeyCode::Backspace),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        lower => {
            if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                if (1..=12).contains(&n) {
                    return Some(KeyCode::F(n));
                }
            }
            // Single character after modifier (e.g., "q" in "<C-q>")
            let mut chars = name.chars();
            let c = chars.next()?;
            if chars.next().is_none() {
                Some(KeyCode::Char(c.to_ascii_lowercase()))
            } else {
                None
            }
        }
    }
}
