//! Video settings panel with a confirm-or-revert workflow.
//!
//! The [`settings::DisplaySettingsController`] previews resolution and window
//! mode changes through a [`display::DisplayService`], asks the user to keep
//! them through a [`settings::UiSurface`] popup, and reverts automatically once
//! the countdown runs out.

pub mod config;
pub mod display;
pub mod logging;
pub mod settings;
pub mod ui;
