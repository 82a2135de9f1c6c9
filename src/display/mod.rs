//! Display modes and the service that applies them.

pub mod catalog;
pub mod simulated;
pub mod window_mode;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use catalog::{build_catalog, CatalogError, ResolutionCatalog};
pub use simulated::SimulatedDisplay;
pub use window_mode::{window_mode_from_label, WindowMode};

/// A resolution and refresh rate supported by the active display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolutionMode {
    pub width: u32,
    pub height: u32,
    pub refresh_rate_hz: u32,
}

impl ResolutionMode {
    pub const fn new(width: u32, height: u32, refresh_rate_hz: u32) -> Self {
        Self {
            width,
            height,
            refresh_rate_hz,
        }
    }

    /// True when width and height match, whatever the refresh rate.
    pub fn same_size(&self, width: u32, height: u32) -> bool {
        self.width == width && self.height == height
    }
}

impl fmt::Display for ResolutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} x {} @ {} Hz",
            self.width, self.height, self.refresh_rate_hz
        )
    }
}

/// Errors reported by a [`DisplayService`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisplayError {
    #[error("Display rejected {width} x {height} ({mode}): {reason}")]
    ApplyFailed {
        width: u32,
        height: u32,
        mode: WindowMode,
        reason: String,
    },
}

/// Windowing backend the settings controller talks to.
///
/// Implementations enumerate modes for the active display, report what is
/// currently shown and switch resolution or window mode on request.
pub trait DisplayService {
    /// All supported modes, in the backend's enumeration order.
    fn list_modes(&self) -> Vec<ResolutionMode>;

    fn current_width(&self) -> u32;

    fn current_height(&self) -> u32;

    fn current_window_mode(&self) -> WindowMode;

    /// Switch to `width` x `height` under `mode`.
    fn apply(&mut self, width: u32, height: u32, mode: WindowMode) -> Result<(), DisplayError>;
}
