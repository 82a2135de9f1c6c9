//! Widget model behind the terminal panel.

use std::collections::HashMap;

use crate::settings::{Button, ButtonAction, SelectionKind, UiSurface};

/// One option list.
///
/// `selected` is what the controller set last; `shown` only catches up on
/// `refresh`, like a dropdown that redraws its caption on request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionListView {
    pub options: Vec<String>,
    pub selected: usize,
    pub shown: usize,
    pub enabled: bool,
}

impl OptionListView {
    pub fn shown_label(&self) -> Option<&str> {
        self.options.get(self.shown).map(String::as_str)
    }
}

#[derive(Debug, Default)]
pub struct TuiSurface {
    resolution: OptionListView,
    window_mode: OptionListView,
    popup_visible: bool,
    countdown_text: String,
    handlers: HashMap<Button, ButtonAction>,
    notice: Option<String>,
}

impl TuiSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self, kind: SelectionKind) -> &OptionListView {
        match kind {
            SelectionKind::Resolution => &self.resolution,
            SelectionKind::WindowMode => &self.window_mode,
        }
    }

    fn list_mut(&mut self, kind: SelectionKind) -> &mut OptionListView {
        match kind {
            SelectionKind::Resolution => &mut self.resolution,
            SelectionKind::WindowMode => &mut self.window_mode,
        }
    }

    pub fn popup_visible(&self) -> bool {
        self.popup_visible
    }

    pub fn countdown_text(&self) -> &str {
        &self.countdown_text
    }

    /// Action registered for `button`, if any.
    pub fn handler(&self, button: Button) -> Option<ButtonAction> {
        self.handlers.get(&button).copied()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

impl UiSurface for TuiSurface {
    fn set_options(&mut self, list: SelectionKind, options: Vec<String>) {
        let view = self.list_mut(list);
        view.options = options;
        view.selected = 0;
        view.shown = 0;
    }

    fn option_label(&self, list: SelectionKind, index: usize) -> Option<String> {
        self.list(list).options.get(index).cloned()
    }

    fn option_count(&self, list: SelectionKind) -> usize {
        self.list(list).options.len()
    }

    fn set_selected(&mut self, list: SelectionKind, index: usize) {
        self.list_mut(list).selected = index;
    }

    fn refresh(&mut self, list: SelectionKind) {
        let view = self.list_mut(list);
        view.shown = view.selected;
    }

    fn set_enabled(&mut self, list: SelectionKind, enabled: bool) {
        self.list_mut(list).enabled = enabled;
    }

    fn show_popup(&mut self) {
        self.popup_visible = true;
    }

    fn hide_popup(&mut self) {
        self.popup_visible = false;
    }

    fn set_countdown_text(&mut self, text: &str) {
        self.countdown_text = text.to_string();
    }

    fn clear_handlers(&mut self, button: Button) {
        self.handlers.remove(&button);
    }

    fn register_handler(&mut self, button: Button, action: ButtonAction) {
        self.handlers.insert(button, action);
    }

    fn notify_error(&mut self, message: &str) {
        self.notice = Some(message.to_string());
    }
}
