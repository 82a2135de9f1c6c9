use crate::display::{DisplayError, DisplayService, ResolutionMode, SimulatedDisplay, WindowMode};
use crate::settings::{
    Button, CountdownScheduler, DisplaySettingsController, SelectionKind, SettingsState,
};
use crate::ui::surface::{OptionListView, TuiSurface};

/// Popup buttons in the order focus cycles through them.
const POPUP_BUTTONS: [Button; 2] = [Button::Accept, Button::Revert];

/// Terminal settings panel: two lists plus the confirmation popup.
pub struct App<S> {
    controller: DisplaySettingsController<SimulatedDisplay, TuiSurface, S>,
    should_quit: bool,
    focus: SelectionKind,
    resolution_cursor: usize,
    window_mode_cursor: usize,
    popup_button: usize,
}

impl<S: CountdownScheduler> App<S> {
    pub fn new(controller: DisplaySettingsController<SimulatedDisplay, TuiSurface, S>) -> Self {
        let mut app = Self {
            controller,
            should_quit: false,
            focus: SelectionKind::Resolution,
            resolution_cursor: 0,
            window_mode_cursor: 0,
            popup_button: 0,
        };
        app.sync_cursors();
        if !app.surface().list(SelectionKind::Resolution).enabled {
            app.focus = SelectionKind::WindowMode;
        }
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit || self.controller.exit_requested()
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn surface(&self) -> &TuiSurface {
        self.controller.ui()
    }

    pub fn settings(&self) -> &SettingsState {
        self.controller.state()
    }

    pub fn popup_visible(&self) -> bool {
        self.surface().popup_visible()
    }

    pub fn focus(&self) -> SelectionKind {
        self.focus
    }

    pub fn cursor(&self, kind: SelectionKind) -> usize {
        match kind {
            SelectionKind::Resolution => self.resolution_cursor,
            SelectionKind::WindowMode => self.window_mode_cursor,
        }
    }

    pub fn list(&self, kind: SelectionKind) -> &OptionListView {
        self.surface().list(kind)
    }

    /// Button that Enter presses while the popup is open.
    pub fn focused_button(&self) -> Button {
        POPUP_BUTTONS[self.popup_button % POPUP_BUTTONS.len()]
    }

    pub fn has_exit_button(&self) -> bool {
        self.surface().handler(Button::Exit).is_some()
    }

    /// Mode the display is actually showing right now.
    pub fn live_mode(&self) -> (ResolutionMode, WindowMode) {
        self.controller.display().current_mode()
    }

    pub fn live_size(&self) -> (u32, u32) {
        let display = self.controller.display();
        (display.current_width(), display.current_height())
    }

    pub fn screen_mode(&self) -> WindowMode {
        self.controller.screen_mode()
    }

    pub fn toggle_focus(&mut self) {
        let resolution_enabled = self.list(SelectionKind::Resolution).enabled;
        self.focus = match self.focus {
            SelectionKind::Resolution => SelectionKind::WindowMode,
            SelectionKind::WindowMode if resolution_enabled => SelectionKind::Resolution,
            SelectionKind::WindowMode => SelectionKind::WindowMode,
        };
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.list(self.focus).options.len();
        if len == 0 {
            return;
        }
        let cursor = match self.focus {
            SelectionKind::Resolution => &mut self.resolution_cursor,
            SelectionKind::WindowMode => &mut self.window_mode_cursor,
        };
        *cursor = (*cursor as isize + delta).rem_euclid(len as isize) as usize;
    }

    pub fn move_button_focus(&mut self, delta: isize) {
        let len = POPUP_BUTTONS.len() as isize;
        self.popup_button = (self.popup_button as isize + delta).rem_euclid(len) as usize;
    }

    /// Select the option under the cursor of the focused list.
    pub fn select_focused(&mut self) {
        self.controller.ui_mut().dismiss_notice();
        let kind = self.focus;
        let index = self.cursor(kind);
        let result = self.controller.on_selection_changed(kind, index);
        self.settle(result);
        self.popup_button = 0;
    }

    /// Fire whatever handler `button` currently holds.
    pub fn press(&mut self, button: Button) {
        let Some(action) = self.surface().handler(button) else {
            tracing::trace!(?button, "Button has no handler");
            return;
        };
        let result = self.controller.on_button(action);
        self.settle(result);
    }

    pub fn press_focused(&mut self) {
        self.press(self.focused_button());
    }

    pub fn on_tick(&mut self) {
        let result = self.controller.on_fixed_update();
        self.settle(result);
    }

    pub fn on_countdown_tick(&mut self, generation: u64) {
        let result = self.controller.on_countdown_tick(generation);
        self.settle(result);
    }

    /// Failures are already on screen; only the cursors need catching up.
    fn settle(&mut self, result: Result<(), DisplayError>) {
        if let Err(err) = result {
            tracing::debug!(error = %err, "Settings action failed");
        }
        self.sync_cursors();
    }

    fn sync_cursors(&mut self) {
        self.resolution_cursor = self.list(SelectionKind::Resolution).shown;
        self.window_mode_cursor = self.list(SelectionKind::WindowMode).shown;
    }
}
