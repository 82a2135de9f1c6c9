//! Widgets the settings controller drives.

/// Which option list a selection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionKind {
    Resolution,
    WindowMode,
}

/// Buttons on the confirmation popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Accept,
    Revert,
    Exit,
}

/// What a registered button does when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Keep `index` as the applied value of `kind`.
    Accept { kind: SelectionKind, index: usize },
    /// Re-apply `index`, the value active before the selection.
    Revert { kind: SelectionKind, index: usize },
    Exit,
}

/// UI toolkit seam: two option lists, a popup with a countdown label and
/// three buttons, and a place to show errors.
///
/// Each button holds at most one handler. The controller clears before it
/// registers, so handlers never pile up across popups.
pub trait UiSurface {
    fn set_options(&mut self, list: SelectionKind, options: Vec<String>);

    /// Text of option `index`, if the list has one.
    fn option_label(&self, list: SelectionKind, index: usize) -> Option<String>;

    fn option_count(&self, list: SelectionKind) -> usize;

    fn set_selected(&mut self, list: SelectionKind, index: usize);

    /// Redraw the list's shown value after `set_selected`.
    fn refresh(&mut self, list: SelectionKind);

    fn set_enabled(&mut self, list: SelectionKind, enabled: bool);

    fn show_popup(&mut self);

    fn hide_popup(&mut self);

    fn set_countdown_text(&mut self, text: &str);

    fn clear_handlers(&mut self, button: Button);

    fn register_handler(&mut self, button: Button, action: ButtonAction);

    fn notify_error(&mut self, message: &str);
}
