//! Confirm-or-revert workflow for display changes.

pub mod controller;
pub mod countdown;
pub mod intent;
pub mod reducer;
pub mod state;
pub mod surface;

pub use controller::{ControllerOptions, DisplaySettingsController};
pub use countdown::{CountdownHandle, CountdownScheduler, TickSink, TokioScheduler};
pub use intent::ConfirmIntent;
pub use reducer::ConfirmReducer;
pub use state::{ConfirmState, PendingSelection, SettingsState};
pub use surface::{Button, ButtonAction, SelectionKind, UiSurface};
