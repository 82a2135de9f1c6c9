//! Recording doubles for the controller's collaborators.

#![allow(dead_code, unused_imports)]

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

use vidsettings::display::{DisplayError, DisplayService, ResolutionMode, WindowMode};
use vidsettings::settings::{
    Button, ButtonAction, ControllerOptions, CountdownHandle, CountdownScheduler,
    DisplaySettingsController, SelectionKind, UiSurface,
};

pub type Controller = DisplaySettingsController<MockDisplay, RecordingSurface, ManualScheduler>;

/// One `apply` call as the display saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyCall {
    pub width: u32,
    pub height: u32,
    pub mode: WindowMode,
}

#[derive(Debug, Default)]
struct DisplayInner {
    modes: Vec<ResolutionMode>,
    width: u32,
    height: u32,
    mode: WindowMode,
    calls: Vec<ApplyCall>,
    rejected: Vec<(u32, u32)>,
}

/// Display double. Clones share state, so a test keeps one to inspect.
#[derive(Debug, Clone, Default)]
pub struct MockDisplay {
    inner: Arc<Mutex<DisplayInner>>,
}

impl MockDisplay {
    /// `modes` in enumeration order, currently showing `width` x `height`.
    pub fn new(modes: Vec<ResolutionMode>, width: u32, height: u32, mode: WindowMode) -> Self {
        Self {
            inner: Arc::new(Mutex::new(DisplayInner {
                modes,
                width,
                height,
                mode,
                ..DisplayInner::default()
            })),
        }
    }

    pub fn reject(&self, width: u32, height: u32) {
        self.inner.lock().rejected.push((width, height));
    }

    pub fn accept_all(&self) {
        self.inner.lock().rejected.clear();
    }

    pub fn calls(&self) -> Vec<ApplyCall> {
        self.inner.lock().calls.clone()
    }

    pub fn last_call(&self) -> Option<ApplyCall> {
        self.inner.lock().calls.last().copied()
    }

    pub fn call_count(&self) -> usize {
        self.inner.lock().calls.len()
    }

    pub fn size(&self) -> (u32, u32) {
        let inner = self.inner.lock();
        (inner.width, inner.height)
    }

    pub fn mode(&self) -> WindowMode {
        self.inner.lock().mode
    }
}

impl DisplayService for MockDisplay {
    fn list_modes(&self) -> Vec<ResolutionMode> {
        self.inner.lock().modes.clone()
    }

    fn current_width(&self) -> u32 {
        self.inner.lock().width
    }

    fn current_height(&self) -> u32 {
        self.inner.lock().height
    }

    fn current_window_mode(&self) -> WindowMode {
        self.inner.lock().mode
    }

    fn apply(&mut self, width: u32, height: u32, mode: WindowMode) -> Result<(), DisplayError> {
        let mut inner = self.inner.lock();
        inner.calls.push(ApplyCall {
            width,
            height,
            mode,
        });
        if inner.rejected.contains(&(width, height)) {
            return Err(DisplayError::ApplyFailed {
                width,
                height,
                mode,
                reason: "rejected by test".into(),
            });
        }
        inner.width = width;
        inner.height = height;
        inner.mode = mode;
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct ListRecord {
    pub options: Vec<String>,
    pub selected: usize,
    pub shown: usize,
    pub enabled: bool,
}

#[derive(Debug, Default)]
pub struct SurfaceLog {
    pub lists: HashMap<SelectionKind, ListRecord>,
    pub popup_visible: bool,
    pub popup_shown_count: usize,
    pub countdown_texts: Vec<String>,
    /// Every registered handler per button, so accumulation would show.
    pub handlers: HashMap<Button, Vec<ButtonAction>>,
    pub errors: Vec<String>,
}

/// UI double recording everything the controller does to it.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    log: Arc<Mutex<SurfaceLog>>,
}

impl RecordingSurface {
    pub fn popup_visible(&self) -> bool {
        self.log.lock().popup_visible
    }

    pub fn popup_shown_count(&self) -> usize {
        self.log.lock().popup_shown_count
    }

    pub fn countdown_texts(&self) -> Vec<String> {
        self.log.lock().countdown_texts.clone()
    }

    pub fn handlers(&self, button: Button) -> Vec<ButtonAction> {
        self.log
            .lock()
            .handlers
            .get(&button)
            .cloned()
            .unwrap_or_default()
    }

    /// The single handler on `button`; panics if there are zero or several.
    pub fn sole_handler(&self, button: Button) -> ButtonAction {
        let handlers = self.handlers(button);
        assert_eq!(handlers.len(), 1, "expected one handler on {:?}", button);
        handlers[0]
    }

    pub fn errors(&self) -> Vec<String> {
        self.log.lock().errors.clone()
    }

    pub fn list(&self, kind: SelectionKind) -> ListRecord {
        self.log.lock().lists.get(&kind).cloned().unwrap_or_default()
    }
}

impl UiSurface for RecordingSurface {
    fn set_options(&mut self, list: SelectionKind, options: Vec<String>) {
        let mut log = self.log.lock();
        let record = log.lists.entry(list).or_default();
        record.options = options;
        record.selected = 0;
        record.shown = 0;
    }

    fn option_label(&self, list: SelectionKind, index: usize) -> Option<String> {
        self.log
            .lock()
            .lists
            .get(&list)
            .and_then(|record| record.options.get(index).cloned())
    }

    fn option_count(&self, list: SelectionKind) -> usize {
        self.log
            .lock()
            .lists
            .get(&list)
            .map_or(0, |record| record.options.len())
    }

    fn set_selected(&mut self, list: SelectionKind, index: usize) {
        self.log.lock().lists.entry(list).or_default().selected = index;
    }

    fn refresh(&mut self, list: SelectionKind) {
        let mut log = self.log.lock();
        let record = log.lists.entry(list).or_default();
        record.shown = record.selected;
    }

    fn set_enabled(&mut self, list: SelectionKind, enabled: bool) {
        self.log.lock().lists.entry(list).or_default().enabled = enabled;
    }

    fn show_popup(&mut self) {
        let mut log = self.log.lock();
        log.popup_visible = true;
        log.popup_shown_count += 1;
    }

    fn hide_popup(&mut self) {
        self.log.lock().popup_visible = false;
    }

    fn set_countdown_text(&mut self, text: &str) {
        self.log.lock().countdown_texts.push(text.to_string());
    }

    fn clear_handlers(&mut self, button: Button) {
        self.log.lock().handlers.remove(&button);
    }

    fn register_handler(&mut self, button: Button, action: ButtonAction) {
        self.log
            .lock()
            .handlers
            .entry(button)
            .or_default()
            .push(action);
    }

    fn notify_error(&mut self, message: &str) {
        self.log.lock().errors.push(message.to_string());
    }
}

/// Scheduler whose ticks the test delivers by hand.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    started: Arc<Mutex<Vec<u64>>>,
}

impl ManualScheduler {
    pub fn started(&self) -> Vec<u64> {
        self.started.lock().clone()
    }
}

impl CountdownScheduler for ManualScheduler {
    fn start(&mut self, generation: u64) -> CountdownHandle {
        self.started.lock().push(generation);
        CountdownHandle::detached(generation)
    }
}

/// Enumerated lowest first; the catalog lists them in reverse.
pub fn standard_modes() -> Vec<ResolutionMode> {
    vec![
        ResolutionMode::new(1280, 720, 60),
        ResolutionMode::new(1920, 1080, 60),
        ResolutionMode::new(1920, 1080, 144),
    ]
}

pub struct Harness {
    pub controller: Controller,
    pub display: MockDisplay,
    pub surface: RecordingSurface,
    pub scheduler: ManualScheduler,
}

impl Harness {
    pub fn new(display: MockDisplay, options: ControllerOptions) -> Self {
        let surface = RecordingSurface::default();
        let scheduler = ManualScheduler::default();
        let controller = DisplaySettingsController::new(
            display.clone(),
            surface.clone(),
            scheduler.clone(),
            options,
        );
        Self {
            controller,
            display,
            surface,
            scheduler,
        }
    }

    /// Standard modes at 1920 x 1080, windowed, initialized.
    pub fn standard() -> Self {
        let mut harness = Self::new(
            MockDisplay::new(standard_modes(), 1920, 1080, WindowMode::Windowed),
            ControllerOptions::default(),
        );
        harness
            .controller
            .initialize()
            .expect("initialize should succeed");
        harness
    }

    /// Deliver one tick to the live countdown.
    pub fn tick(&mut self) -> Result<(), DisplayError> {
        let generation = self
            .controller
            .countdown_generation()
            .expect("no countdown running");
        self.controller.on_countdown_tick(generation)
    }

    pub fn press(&mut self, button: Button) -> Result<(), DisplayError> {
        let action = self.surface.sole_handler(button);
        self.controller.on_button(action)
    }
}
