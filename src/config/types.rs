use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::display::ResolutionMode;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub popup: PopupConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Confirmation popup behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopupConfig {
    /// Seconds shown on the countdown before an unconfirmed change reverts (default: 10).
    #[serde(default = "default_countdown_seconds")]
    pub countdown_seconds: u32,
    /// Ignore selections that equal the applied value instead of asking again (default: false).
    #[serde(default)]
    pub skip_unchanged: bool,
    /// Offer an exit button next to accept/revert (default: true).
    #[serde(default = "default_exit_button")]
    pub exit_button: bool,
}

/// Simulated display the panel runs against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Initial window mode label, resolved like a list selection.
    #[serde(default = "default_window_mode")]
    pub window_mode: String,
    /// Mode the display starts in.
    #[serde(default = "default_current_mode")]
    pub current: ResolutionMode,
    /// Supported modes in enumeration order (lowest first).
    #[serde(default = "default_modes")]
    pub modes: Vec<ResolutionMode>,
    /// Modes the display refuses to switch to.
    #[serde(default)]
    pub unsupported: Vec<ResolutionMode>,
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when RUST_LOG is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Defaults to the platform cache directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_countdown_seconds() -> u32 {
    10
}

fn default_exit_button() -> bool {
    true
}

fn default_window_mode() -> String {
    "Windowed".to_string()
}

fn default_current_mode() -> ResolutionMode {
    ResolutionMode::new(1920, 1080, 60)
}

fn default_modes() -> Vec<ResolutionMode> {
    vec![
        ResolutionMode::new(1280, 720, 60),
        ResolutionMode::new(1600, 900, 60),
        ResolutionMode::new(1920, 1080, 60),
        ResolutionMode::new(1920, 1080, 144),
        ResolutionMode::new(2560, 1440, 60),
        ResolutionMode::new(2560, 1440, 165),
    ]
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            countdown_seconds: default_countdown_seconds(),
            skip_unchanged: false,
            exit_button: default_exit_button(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            window_mode: default_window_mode(),
            current: default_current_mode(),
            modes: default_modes(),
            unsupported: Vec::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
