use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::animator::COUNTDOWN_STEP;
use crate::layout::ANGLE_STEP_DEG;
use crate::time::{ClockTime, TIME_TICK};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub clock: ClockConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockConfig {
    /// Interval between time polls in milliseconds
    #[serde(default = "default_time_tick")]
    pub time_tick_ms: u64,
    /// Interval between rollover countdown steps in milliseconds
    #[serde(default = "default_countdown_step")]
    pub countdown_step_ms: u64,
    /// Angle between neighbouring digits on a ring
    #[serde(default = "default_angle_step")]
    pub angle_step_deg: f64,
    /// Run a simulated clock from this time ("HH:MM:SS") instead of the wall clock
    #[serde(default)]
    pub start_time: Option<String>,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            time_tick_ms: default_time_tick(),
            countdown_step_ms: default_countdown_step(),
            angle_step_deg: default_angle_step(),
            start_time: None,
        }
    }
}

impl ClockConfig {
    /// Parsed `start_time`, if one is configured
    pub fn start_time(&self) -> crate::Result<Option<ClockTime>> {
        self.start_time
            .as_deref()
            .map(|s| s.parse::<ClockTime>())
            .transpose()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Draw a faint circle under each ring
    #[serde(default = "default_true")]
    pub show_ring_guides: bool,
    /// Idle time before the hint bar hides in fullscreen
    #[serde(default = "default_hint_timeout")]
    pub hint_timeout_ms: u64,
    /// Start in fullscreen mode
    #[serde(default)]
    pub start_fullscreen: bool,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_ring_guides: default_true(),
            hint_timeout_ms: default_hint_timeout(),
            start_fullscreen: false,
            theme: ThemeConfig::default(),
        }
    }
}

/// Theme configuration
/// Can be specified as a simple string (theme name) or as a full struct with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Theme name (e.g., "gruvbox-dark", "nord")
    pub name: String,
    /// Optional color overrides
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

// Accept either a bare theme name or a table with 'name' and 'colors'
impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string (theme name) or a map with 'name' and optional 'colors'")
            }

            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig {
                    name: value.to_string(),
                    colors: ThemeColorOverrides::default(),
                })
            }

            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut colors: Option<ThemeColorOverrides> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => name = Some(map.next_value()?),
                        "colors" => colors = Some(map.next_value()?),
                        _ => {
                            let _: de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

fn default_theme_name() -> String {
    "gruvbox-dark".to_string()
}

/// Optional color overrides, each a hex string ("#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Background
    pub background: Option<String>,
    /// Inactive digits close to the active slot
    pub digit: Option<String>,
    /// Inactive digits far from the active slot
    pub digit_dim: Option<String>,
    /// Digits sitting at the active slot
    pub active: Option<String>,
    /// Ring guide circles
    pub guide: Option<String>,
    /// Hint bar text
    pub hint: Option<String>,
    /// Hint bar background
    pub hint_bg: Option<String>,
    /// Border and highlights
    pub accent: Option<String>,
}

/// Keymap configuration using Vim-style notation
/// Format: "q", "<C-c>" (Ctrl+c), "<S-f>" (Shift+f), "<Esc>", "<Space>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Enter/leave fullscreen
    #[serde(default = "default_key_toggle_fullscreen")]
    pub toggle_fullscreen: String,
    /// Show/hide ring guides
    #[serde(default = "default_key_toggle_guides")]
    pub toggle_guides: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            toggle_fullscreen: default_key_toggle_fullscreen(),
            toggle_guides: default_key_toggle_guides(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_toggle_fullscreen() -> String { "f".to_string() }
fn default_key_toggle_guides() -> String { "g".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ringclock")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_time_tick() -> u64 {
    TIME_TICK.as_millis() as u64
}

fn default_countdown_step() -> u64 {
    COUNTDOWN_STEP.as_millis() as u64
}

fn default_angle_step() -> f64 {
    ANGLE_STEP_DEG
}

fn default_hint_timeout() -> u64 {
    2000
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, falling back to defaults when it is missing
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/ringclock/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("ringclock")
            .join("config.toml")
    }

    /// Get the log file path
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("ringclock.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_follow_engine_constants() {
        let config = AppConfig::default();
        assert_eq!(config.clock.time_tick_ms, 1000);
        assert_eq!(config.clock.countdown_step_ms, 100);
        assert_eq!(config.clock.angle_step_deg, 20.0);
        assert_eq!(config.ui.hint_timeout_ms, 2000);
        assert_eq!(config.keymap.quit, "q");
        assert_eq!(config.ui.theme.name, "gruvbox-dark");
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.general.log_level, "info");
        assert!(config.ui.show_ring_guides);
        assert!(config.clock.start_time().unwrap().is_none());
    }

    #[test]
    fn test_partial_sections() {
        let config = AppConfig::from_toml(
            r#"
            [clock]
            countdown_step_ms = 50
            start_time = "23:59:55"

            [ui]
            theme = "nord"
            "#,
        )
        .unwrap();
        assert_eq!(config.clock.countdown_step_ms, 50);
        assert_eq!(config.clock.time_tick_ms, 1000);
        assert_eq!(
            config.clock.start_time().unwrap(),
            Some(ClockTime::new(23, 59, 55).unwrap())
        );
        assert_eq!(config.ui.theme.name, "nord");
    }

    #[test]
    fn test_theme_table_with_overrides() {
        let config = AppConfig::from_toml(
            r##"
            [ui.theme]
            name = "dracula"
            colors = { active = "#ff0000" }
            "##,
        )
        .unwrap();
        assert_eq!(config.ui.theme.name, "dracula");
        assert_eq!(config.ui.theme.colors.active.as_deref(), Some("#ff0000"));
        assert!(config.ui.theme.colors.digit.is_none());
    }

    #[test]
    fn test_theme_overrides_cover_dim_digits_and_hint_background() {
        let config = AppConfig::from_toml(
            r##"
            [ui.theme]
            name = "nord"
            colors = { digit_dim = "#333333", hint_bg = "#111111" }
            "##,
        )
        .unwrap();
        assert_eq!(config.ui.theme.colors.digit_dim.as_deref(), Some("#333333"));
        assert_eq!(config.ui.theme.colors.hint_bg.as_deref(), Some("#111111"));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = AppConfig::from_toml("[clock\n").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_bad_start_time() {
        let config = AppConfig::from_toml("[clock]\nstart_time = \"99:00\"\n").unwrap();
        assert!(config.clock.start_time().is_err());
    }

    #[test]
    fn test_round_trips_through_toml() {
        let config = AppConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed = AppConfig::from_toml(&text).unwrap();
        assert_eq!(parsed.keymap.toggle_fullscreen, "f");
        assert_eq!(parsed.ui.theme.name, config.ui.theme.name);
    }
}
