use std::fmt;

use serde::{Deserialize, Serialize};

pub const EXCLUSIVE_FULLSCREEN_LABEL: &str = "Exclusive Fullscreen";
pub const WINDOWED_LABEL: &str = "Windowed";
pub const BORDERLESS_LABEL: &str = "Borderless Fullscreen Window";

/// How the application window occupies the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WindowMode {
    ExclusiveFullscreen,
    Windowed,
    #[default]
    BorderlessFullscreenWindow,
}

impl WindowMode {
    /// Option order of the window-mode list.
    pub const ALL: [WindowMode; 3] = [
        WindowMode::ExclusiveFullscreen,
        WindowMode::Windowed,
        WindowMode::BorderlessFullscreenWindow,
    ];

    /// Text shown in the window-mode list.
    pub fn label(self) -> &'static str {
        match self {
            WindowMode::ExclusiveFullscreen => EXCLUSIVE_FULLSCREEN_LABEL,
            WindowMode::Windowed => WINDOWED_LABEL,
            WindowMode::BorderlessFullscreenWindow => BORDERLESS_LABEL,
        }
    }

    /// The windowing system's own name for the mode.
    pub fn native_name(self) -> &'static str {
        match self {
            WindowMode::ExclusiveFullscreen => "ExclusiveFullScreen",
            WindowMode::Windowed => "Windowed",
            WindowMode::BorderlessFullscreenWindow => "FullScreenWindow",
        }
    }

    /// Position of the mode in [`WindowMode::ALL`].
    pub fn index(self) -> usize {
        match self {
            WindowMode::ExclusiveFullscreen => 0,
            WindowMode::Windowed => 1,
            WindowMode::BorderlessFullscreenWindow => 2,
        }
    }

    pub fn labels() -> Vec<String> {
        Self::ALL.iter().map(|mode| mode.label().to_string()).collect()
    }
}

impl fmt::Display for WindowMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Resolve a list label (or a native mode name) to a window mode.
///
/// Anything unrecognised falls back to borderless fullscreen.
pub fn window_mode_from_label(label: &str) -> WindowMode {
    match label {
        EXCLUSIVE_FULLSCREEN_LABEL | "ExclusiveFullScreen" => WindowMode::ExclusiveFullscreen,
        WINDOWED_LABEL => WindowMode::Windowed,
        _ => WindowMode::BorderlessFullscreenWindow,
    }
}
