use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    /// Inactive digits close to the active slot
    pub digit: Color,
    /// Inactive digits far from the active slot
    pub digit_dim: Color,
    /// Digits sitting at the active slot
    pub active: Color,
    /// Ring guide circles
    pub guide: Color,
    /// Hint bar text
    pub hint: Color,
    /// Hint bar background
    pub hint_bg: Color,
    /// Border and highlights
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        crate::themes::gruvbox::dark()
    }
}
