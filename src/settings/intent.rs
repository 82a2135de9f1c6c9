use crate::settings::state::PendingSelection;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ConfirmIntent {
    /// A previewed selection needs confirming. Ignored while a popup is open.
    Open {
        pending: PendingSelection,
        revert_to: usize,
        countdown_seconds: u32,
    },
    /// One second passed on the countdown.
    Tick,
    /// The countdown stopped without closing the popup (a revert failed).
    /// Clamps the remaining time to zero.
    Hold,
    /// Accepted or reverted.
    Close,
}

impl Intent for ConfirmIntent {}
