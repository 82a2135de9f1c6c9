//! In-process display used by the terminal front end.

use std::sync::Arc;

use parking_lot::Mutex;

use super::{window_mode_from_label, DisplayError, DisplayService, ResolutionMode, WindowMode};
use crate::config::DisplayConfig;

#[derive(Debug)]
struct SimulatedInner {
    modes: Vec<ResolutionMode>,
    unsupported: Vec<ResolutionMode>,
    current: ResolutionMode,
    window_mode: WindowMode,
    applied_count: usize,
}

/// Display backed by a configured mode list.
///
/// Clones share the same state, so one handle can drive the controller while
/// another reports what the "screen" currently shows.
#[derive(Debug, Clone)]
pub struct SimulatedDisplay {
    inner: Arc<Mutex<SimulatedInner>>,
}

impl SimulatedDisplay {
    pub fn new(
        modes: Vec<ResolutionMode>,
        current: ResolutionMode,
        window_mode: WindowMode,
    ) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SimulatedInner {
                modes,
                unsupported: Vec::new(),
                current,
                window_mode,
                applied_count: 0,
            })),
        }
    }

    pub fn from_config(config: &DisplayConfig) -> Self {
        let display = Self::new(
            config.modes.clone(),
            config.current,
            window_mode_from_label(&config.window_mode),
        );
        display.inner.lock().unsupported = config.unsupported.clone();
        display
    }

    /// Make `apply` refuse this size.
    pub fn reject(&self, width: u32, height: u32) {
        let mut inner = self.inner.lock();
        let refresh = inner.current.refresh_rate_hz;
        inner
            .unsupported
            .push(ResolutionMode::new(width, height, refresh));
    }

    /// Mode currently on screen.
    pub fn current_mode(&self) -> (ResolutionMode, WindowMode) {
        let inner = self.inner.lock();
        (inner.current, inner.window_mode)
    }

    /// Number of successful `apply` calls so far.
    pub fn applied_count(&self) -> usize {
        self.inner.lock().applied_count
    }
}

impl DisplayService for SimulatedDisplay {
    fn list_modes(&self) -> Vec<ResolutionMode> {
        self.inner.lock().modes.clone()
    }

    fn current_width(&self) -> u32 {
        self.inner.lock().current.width
    }

    fn current_height(&self) -> u32 {
        self.inner.lock().current.height
    }

    fn current_window_mode(&self) -> WindowMode {
        self.inner.lock().window_mode
    }

    fn apply(&mut self, width: u32, height: u32, mode: WindowMode) -> Result<(), DisplayError> {
        let mut inner = self.inner.lock();
        let rejected = |reason: &str| DisplayError::ApplyFailed {
            width,
            height,
            mode,
            reason: reason.to_string(),
        };

        if inner.unsupported.iter().any(|m| m.same_size(width, height)) {
            return Err(rejected("mode not supported by the display"));
        }

        let current_refresh = inner.current.refresh_rate_hz;
        let listed: Vec<&ResolutionMode> = inner
            .modes
            .iter()
            .filter(|m| m.same_size(width, height))
            .collect();
        let refresh = match listed.iter().find(|m| m.refresh_rate_hz == current_refresh) {
            Some(m) => m.refresh_rate_hz,
            None => match listed.first() {
                Some(m) => m.refresh_rate_hz,
                // Windows may take any size; fullscreen needs a real mode.
                None if mode == WindowMode::Windowed => current_refresh,
                None => return Err(rejected("size not offered by the display")),
            },
        };

        inner.current = ResolutionMode::new(width, height, refresh);
        inner.window_mode = mode;
        inner.applied_count += 1;
        tracing::debug!(width, height, refresh, %mode, "Display mode applied");
        Ok(())
    }
}
