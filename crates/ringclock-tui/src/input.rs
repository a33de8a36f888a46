use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleFullscreen,
    ToggleGuides,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, keymap: &Keymap) -> Action {
    // Terminals report Shift+letter as an uppercase char, with or without SHIFT set
    let binding = match key.code {
        KeyCode::Char(c) if c.is_ascii_uppercase() => KeyBinding::shift(KeyCode::Char(c)),
        KeyCode::Char(c) => {
            KeyBinding::new(KeyCode::Char(c), key.modifiers.difference(KeyModifiers::SHIFT))
        }
        code => KeyBinding::new(code, key.modifiers),
    };

    keymap.get(&binding).copied().unwrap_or(Action::None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_default_bindings() {
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(press(KeyCode::Char('q'), KeyModifiers::NONE), &keymap),
            Action::Quit
        );
        assert_eq!(
            handle_key_event(press(KeyCode::Char('f'), KeyModifiers::NONE), &keymap),
            Action::ToggleFullscreen
        );
        assert_eq!(
            handle_key_event(press(KeyCode::Char('g'), KeyModifiers::NONE), &keymap),
            Action::ToggleGuides
        );
    }

    #[test]
    fn test_ctrl_c_and_esc_always_quit() {
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL), &keymap),
            Action::Quit
        );
        assert_eq!(
            handle_key_event(press(KeyCode::Esc, KeyModifiers::NONE), &keymap),
            Action::Quit
        );
    }

    #[test]
    fn test_unbound_key() {
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(press(KeyCode::Char('x'), KeyModifiers::NONE), &keymap),
            Action::None
        );
    }

    #[test]
    fn test_uppercase_with_shift_modifier() {
        let config = ringclock_core::config::KeymapConfig {
            toggle_fullscreen: "F".to_string(),
            ..Default::default()
        };
        let keymap = Keymap::from_config(&config);
        assert_eq!(
            handle_key_event(press(KeyCode::Char('F'), KeyModifiers::SHIFT), &keymap),
            Action::ToggleFullscreen
        );
        assert_eq!(
            handle_key_event(press(KeyCode::Char('F'), KeyModifiers::NONE), &keymap),
            Action::ToggleFullscreen
        );
    }
}
