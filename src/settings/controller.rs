//! Resolution and window mode selection with confirm-or-revert.

use crate::config::PopupConfig;
use crate::display::{
    build_catalog, window_mode_from_label, CatalogError, DisplayError, DisplayService,
    ResolutionCatalog, ResolutionMode, WindowMode,
};
use crate::settings::countdown::{CountdownHandle, CountdownScheduler};
use crate::settings::intent::ConfirmIntent;
use crate::settings::reducer::ConfirmReducer;
use crate::settings::state::{PendingSelection, SettingsState};
use crate::settings::surface::{Button, ButtonAction, SelectionKind, UiSurface};
use crate::ui::mvi::Reducer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerOptions {
    /// Countdown start value, in seconds.
    pub countdown_seconds: u32,
    /// Treat reselecting the applied option as a no-op.
    pub skip_unchanged: bool,
    pub exit_button: bool,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self::from(&PopupConfig::default())
    }
}

impl From<&PopupConfig> for ControllerOptions {
    fn from(config: &PopupConfig) -> Self {
        Self {
            countdown_seconds: config.countdown_seconds,
            skip_unchanged: config.skip_unchanged,
            exit_button: config.exit_button,
        }
    }
}

/// Owns the applied display configuration and the confirmation popup.
///
/// All methods run on the UI thread. Every change the user selects is shown
/// right away, then kept on accept or undone on revert or when the
/// countdown runs out.
pub struct DisplaySettingsController<D, U, S> {
    display: D,
    ui: U,
    scheduler: S,
    options: ControllerOptions,
    catalog: ResolutionCatalog,
    state: SettingsState,
    /// Mode used for every resolution change, pending or not.
    screen_mode: WindowMode,
    countdown: Option<CountdownHandle>,
    next_generation: u64,
    /// Window mode changes are applied once more on the next fixed update.
    reapply_on_fixed_update: bool,
    exit_requested: bool,
}

impl<D, U, S> DisplaySettingsController<D, U, S>
where
    D: DisplayService,
    U: UiSurface,
    S: CountdownScheduler,
{
    pub fn new(display: D, ui: U, scheduler: S, options: ControllerOptions) -> Self {
        Self {
            screen_mode: display.current_window_mode(),
            display,
            ui,
            scheduler,
            options,
            catalog: ResolutionCatalog::default(),
            state: SettingsState::default(),
            countdown: None,
            next_generation: 0,
            reapply_on_fixed_update: false,
            exit_requested: false,
        }
    }

    /// Fill both lists from the display and seed the applied values.
    ///
    /// An empty resolution list disables resolution selection. A failure to
    /// re-apply the current window mode is reported but leaves the controller
    /// usable.
    pub fn initialize(&mut self) -> Result<(), DisplayError> {
        match build_catalog(&self.display) {
            Ok((catalog, initial)) => {
                self.ui
                    .set_options(SelectionKind::Resolution, catalog.labels());
                self.ui.set_selected(SelectionKind::Resolution, initial);
                self.ui.refresh(SelectionKind::Resolution);
                self.ui.set_enabled(SelectionKind::Resolution, true);
                self.catalog = catalog;
                self.state.applied_resolution_index = Some(initial);
            }
            Err(CatalogError::Empty) => {
                tracing::warn!("Display reported no resolutions, disabling resolution selection");
                self.ui.set_options(SelectionKind::Resolution, Vec::new());
                self.ui.set_enabled(SelectionKind::Resolution, false);
                self.catalog = ResolutionCatalog::default();
                self.state.applied_resolution_index = None;
            }
        }

        self.ui
            .set_options(SelectionKind::WindowMode, WindowMode::labels());
        self.ui.set_enabled(SelectionKind::WindowMode, true);

        if self.options.exit_button {
            self.ui.clear_handlers(Button::Exit);
            self.ui.register_handler(Button::Exit, ButtonAction::Exit);
        }

        let native = self.display.current_window_mode().native_name();
        let result = self.apply_window_mode_label(native);
        self.state.applied_window_mode_index = self.screen_mode.index();

        tracing::info!(
            resolution = ?self.applied_resolution(),
            window_mode = %self.screen_mode,
            "Display settings initialized"
        );

        result.map(|_| ()).inspect_err(|err| self.report(err))
    }

    /// A list selection changed.
    ///
    /// Ignored while a popup is open. Otherwise the selection is previewed and
    /// the popup opens; if the display rejects it the list snaps back and the
    /// error is returned.
    pub fn on_selection_changed(
        &mut self,
        kind: SelectionKind,
        index: usize,
    ) -> Result<(), DisplayError> {
        if self.state.confirm.is_popup_open() {
            tracing::debug!(?kind, index, "Selection ignored while confirmation is pending");
            return Ok(());
        }

        let Some(applied) = self.state.applied_index(kind) else {
            tracing::debug!(?kind, index, "Selection ignored, list disabled");
            return Ok(());
        };

        if index >= self.ui.option_count(kind) {
            tracing::warn!(?kind, index, "Selection out of range");
            return Ok(());
        }

        if self.options.skip_unchanged && index == applied {
            tracing::debug!(?kind, index, "Selection equals applied value");
            return Ok(());
        }

        if let Err(err) = self.preview(kind, index) {
            self.ui.set_selected(kind, applied);
            self.ui.refresh(kind);
            self.report(&err);
            return Err(err);
        }

        self.open_popup(PendingSelection { kind, index }, applied);
        Ok(())
    }

    /// A popup button handler fired.
    pub fn on_button(&mut self, action: ButtonAction) -> Result<(), DisplayError> {
        if action == ButtonAction::Exit {
            tracing::info!("Exit requested from settings panel");
            self.exit_requested = true;
            return Ok(());
        }

        if !self.state.confirm.is_popup_open() {
            tracing::debug!(?action, "Button ignored, no confirmation pending");
            return Ok(());
        }

        match action {
            ButtonAction::Accept { kind, index } => {
                self.commit(kind, index);
                Ok(())
            }
            ButtonAction::Revert { kind, index } => self.revert(kind, index),
            ButtonAction::Exit => Ok(()),
        }
    }

    /// One countdown period elapsed for the countdown tagged `generation`.
    pub fn on_countdown_tick(&mut self, generation: u64) -> Result<(), DisplayError> {
        let live = self.countdown.as_ref().map(CountdownHandle::generation);
        if live != Some(generation) {
            tracing::trace!(generation, ?live, "Stale countdown tick");
            return Ok(());
        }

        self.dispatch(ConfirmIntent::Tick);

        if self.state.confirm.is_expired() {
            let (Some(pending), Some(revert_to)) = (
                self.state.confirm.pending(),
                self.state.confirm.revert_target(),
            ) else {
                return Ok(());
            };
            tracing::info!(kind = ?pending.kind, revert_to, "Confirmation timed out, reverting");
            return self.revert(pending.kind, revert_to);
        }

        if let Some(remaining) = self.state.confirm.remaining() {
            tracing::debug!(remaining, "Countdown tick");
            self.ui.set_countdown_text(&remaining.to_string());
        }
        Ok(())
    }

    /// Fixed-timestep tick from the host loop.
    ///
    /// Re-applies the current size under the selected window mode once after
    /// each window mode change, when the switch has had a frame to settle.
    pub fn on_fixed_update(&mut self) -> Result<(), DisplayError> {
        if !std::mem::take(&mut self.reapply_on_fixed_update) {
            return Ok(());
        }
        let (width, height) = (self.display.current_width(), self.display.current_height());
        self.display
            .apply(width, height, self.screen_mode)
            .inspect_err(|err| self.report(err))
    }

    pub fn state(&self) -> &SettingsState {
        &self.state
    }

    pub fn catalog(&self) -> &ResolutionCatalog {
        &self.catalog
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Window mode currently in effect, including a pending one.
    pub fn screen_mode(&self) -> WindowMode {
        self.screen_mode
    }

    pub fn applied_resolution(&self) -> Option<ResolutionMode> {
        self.state
            .applied_resolution_index
            .and_then(|index| self.catalog.get(index))
            .copied()
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    pub fn countdown_generation(&self) -> Option<u64> {
        self.countdown.as_ref().map(CountdownHandle::generation)
    }

    fn dispatch(&mut self, intent: ConfirmIntent) {
        self.state.confirm =
            ConfirmReducer::reduce(std::mem::take(&mut self.state.confirm), intent);
    }

    fn preview(&mut self, kind: SelectionKind, index: usize) -> Result<(), DisplayError> {
        match kind {
            SelectionKind::Resolution => self.set_resolution(index),
            SelectionKind::WindowMode => self.set_window_mode(index),
        }
    }

    fn set_resolution(&mut self, index: usize) -> Result<(), DisplayError> {
        let Some(mode) = self.catalog.get(index).copied() else {
            return Ok(());
        };
        self.display
            .apply(mode.width, mode.height, self.screen_mode)?;
        self.ui.set_selected(SelectionKind::Resolution, index);
        self.ui.refresh(SelectionKind::Resolution);
        Ok(())
    }

    fn set_window_mode(&mut self, index: usize) -> Result<(), DisplayError> {
        let label = self
            .ui
            .option_label(SelectionKind::WindowMode, index)
            .unwrap_or_default();
        self.apply_window_mode_label(&label)?;
        self.reapply_on_fixed_update = true;
        Ok(())
    }

    /// Resolve `label` and apply it at the current size.
    fn apply_window_mode_label(&mut self, label: &str) -> Result<WindowMode, DisplayError> {
        let mode = window_mode_from_label(label);
        let (width, height) = (self.display.current_width(), self.display.current_height());
        self.display.apply(width, height, mode)?;
        self.screen_mode = mode;
        self.ui.set_selected(SelectionKind::WindowMode, mode.index());
        self.ui.refresh(SelectionKind::WindowMode);
        Ok(mode)
    }

    fn open_popup(&mut self, pending: PendingSelection, revert_to: usize) {
        self.ui.show_popup();
        self.ui.clear_handlers(Button::Accept);
        self.ui.clear_handlers(Button::Revert);
        self.ui.register_handler(
            Button::Accept,
            ButtonAction::Accept {
                kind: pending.kind,
                index: pending.index,
            },
        );
        self.ui.register_handler(
            Button::Revert,
            ButtonAction::Revert {
                kind: pending.kind,
                index: revert_to,
            },
        );

        let countdown_seconds = self.options.countdown_seconds;
        self.dispatch(ConfirmIntent::Open {
            pending,
            revert_to,
            countdown_seconds,
        });

        let generation = self.next_generation;
        self.next_generation += 1;
        if let Some(previous) = self.countdown.replace(self.scheduler.start(generation)) {
            previous.cancel();
        }
        self.ui.set_countdown_text(&countdown_seconds.to_string());

        tracing::info!(
            kind = ?pending.kind,
            index = pending.index,
            revert_to,
            countdown_seconds,
            "Previewing display change"
        );
    }

    fn commit(&mut self, kind: SelectionKind, index: usize) {
        match kind {
            SelectionKind::Resolution => self.state.applied_resolution_index = Some(index),
            SelectionKind::WindowMode => self.state.applied_window_mode_index = index,
        }
        self.close_popup();
        tracing::info!(?kind, index, "Display change accepted");
    }

    fn revert(&mut self, kind: SelectionKind, index: usize) -> Result<(), DisplayError> {
        if let Err(err) = self.preview(kind, index) {
            // Keep the popup so the user can accept what is shown or retry.
            self.stop_countdown();
            self.dispatch(ConfirmIntent::Hold);
            self.ui.set_countdown_text("0");
            self.report(&err);
            return Err(err);
        }
        self.close_popup();
        tracing::info!(?kind, index, "Display change reverted");
        Ok(())
    }

    fn close_popup(&mut self) {
        self.ui.hide_popup();
        self.ui.clear_handlers(Button::Accept);
        self.ui.clear_handlers(Button::Revert);
        self.stop_countdown();
        self.dispatch(ConfirmIntent::Close);
    }

    fn stop_countdown(&mut self) {
        if let Some(handle) = self.countdown.take() {
            handle.cancel();
        }
    }

    fn report(&mut self, err: &DisplayError) {
        tracing::warn!(error = %err, "Display change failed");
        self.ui.notify_error(&err.to_string());
    }
}
