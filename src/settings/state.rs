use crate::settings::surface::SelectionKind;
use crate::ui::mvi::UiState;

/// The change waiting for the user's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingSelection {
    pub kind: SelectionKind,
    pub index: usize,
}

/// Confirmation popup workflow.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ConfirmState {
    #[default]
    Idle,
    AwaitingConfirmation {
        pending: PendingSelection,
        /// Index of `pending.kind` that was applied before the selection.
        revert_to: usize,
        /// Seconds left on the countdown. Negative only for the instant
        /// between the final tick and the automatic revert.
        remaining: i32,
    },
}

impl UiState for ConfirmState {}

impl ConfirmState {
    pub fn is_popup_open(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    pub fn pending(&self) -> Option<PendingSelection> {
        match self {
            Self::AwaitingConfirmation { pending, .. } => Some(*pending),
            Self::Idle => None,
        }
    }

    pub fn revert_target(&self) -> Option<usize> {
        match self {
            Self::AwaitingConfirmation { revert_to, .. } => Some(*revert_to),
            Self::Idle => None,
        }
    }

    pub fn remaining(&self) -> Option<i32> {
        match self {
            Self::AwaitingConfirmation { remaining, .. } => Some(*remaining),
            Self::Idle => None,
        }
    }

    /// True once the countdown has run past zero.
    pub fn is_expired(&self) -> bool {
        matches!(self.remaining(), Some(remaining) if remaining < 0)
    }
}

/// Applied display configuration plus the confirmation workflow.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SettingsState {
    /// `None` when the display reported no resolutions.
    pub applied_resolution_index: Option<usize>,
    pub applied_window_mode_index: usize,
    pub confirm: ConfirmState,
}

impl SettingsState {
    pub fn applied_index(&self, kind: SelectionKind) -> Option<usize> {
        match kind {
            SelectionKind::Resolution => self.applied_resolution_index,
            SelectionKind::WindowMode => Some(self.applied_window_mode_index),
        }
    }
}
