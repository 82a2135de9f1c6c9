mod common;

use common::{standard_modes, ApplyCall, Harness, MockDisplay};
use vidsettings::display::{ResolutionMode, WindowMode};
use vidsettings::settings::{Button, ButtonAction, ControllerOptions, SelectionKind};

#[test]
fn initial_index_matches_size_and_ignores_refresh_rate() {
    let harness = Harness::standard();
    let catalog = harness.controller.catalog();

    assert_eq!(catalog[0], ResolutionMode::new(1920, 1080, 144));
    assert_eq!(catalog[1], ResolutionMode::new(1920, 1080, 60));
    assert_eq!(catalog[2], ResolutionMode::new(1280, 720, 60));
    // Display runs at 60 Hz but the 144 Hz entry is selected.
    assert_eq!(harness.controller.state().applied_resolution_index, Some(0));
    assert_eq!(harness.surface.list(SelectionKind::Resolution).shown, 0);
}

#[test]
fn initialize_fills_lists_and_reapplies_current_mode() {
    let harness = Harness::standard();

    let resolution = harness.surface.list(SelectionKind::Resolution);
    assert!(resolution.enabled);
    assert_eq!(resolution.options[2], "1280 x 720 @ 60 Hz");

    let window_mode = harness.surface.list(SelectionKind::WindowMode);
    assert_eq!(
        window_mode.options,
        vec!["Exclusive Fullscreen", "Windowed", "Borderless Fullscreen Window"]
    );
    assert_eq!(window_mode.shown, 1);
    assert_eq!(harness.controller.state().applied_window_mode_index, 1);

    assert_eq!(
        harness.display.calls(),
        vec![ApplyCall {
            width: 1920,
            height: 1080,
            mode: WindowMode::Windowed
        }]
    );
    assert!(!harness.surface.popup_visible());
}

#[test]
fn initialize_resolves_native_exclusive_name() {
    let mut harness = Harness::new(
        MockDisplay::new(standard_modes(), 1920, 1080, WindowMode::ExclusiveFullscreen),
        ControllerOptions::default(),
    );
    harness.controller.initialize().unwrap();

    assert_eq!(harness.controller.screen_mode(), WindowMode::ExclusiveFullscreen);
    assert_eq!(harness.controller.state().applied_window_mode_index, 0);
}

#[test]
fn selecting_resolution_previews_and_accept_commits() {
    let mut harness = Harness::standard();

    harness
        .controller
        .on_selection_changed(SelectionKind::Resolution, 2)
        .unwrap();

    assert!(harness.surface.popup_visible());
    assert_eq!(harness.surface.countdown_texts(), vec!["10"]);
    assert_eq!(
        harness.display.last_call(),
        Some(ApplyCall {
            width: 1280,
            height: 720,
            mode: WindowMode::Windowed
        })
    );
    assert_eq!(harness.controller.state().confirm.remaining(), Some(10));
    // Not committed until accepted.
    assert_eq!(harness.controller.state().applied_resolution_index, Some(0));

    harness.tick().unwrap();
    harness.press(Button::Accept).unwrap();

    assert_eq!(harness.controller.state().applied_resolution_index, Some(2));
    assert!(!harness.surface.popup_visible());
    assert!(!harness.controller.state().confirm.is_popup_open());
    assert_eq!(harness.controller.countdown_generation(), None);
    assert!(harness.surface.handlers(Button::Accept).is_empty());
    assert!(harness.surface.handlers(Button::Revert).is_empty());
}

#[test]
fn unanswered_popup_reverts_after_countdown() {
    let mut harness = Harness::standard();
    harness
        .controller
        .on_selection_changed(SelectionKind::Resolution, 2)
        .unwrap();

    for _ in 0..10 {
        harness.tick().unwrap();
        assert!(harness.surface.popup_visible());
    }
    assert_eq!(harness.display.size(), (1280, 720));

    harness.tick().unwrap();

    let expected: Vec<String> = (0..=10).rev().map(|n| n.to_string()).collect();
    assert_eq!(harness.surface.countdown_texts(), expected);
    assert_eq!(
        harness.display.last_call(),
        Some(ApplyCall {
            width: 1920,
            height: 1080,
            mode: WindowMode::Windowed
        })
    );
    assert_eq!(harness.controller.state().applied_resolution_index, Some(0));
    assert_eq!(harness.surface.list(SelectionKind::Resolution).shown, 0);
    assert!(!harness.surface.popup_visible());
    assert_eq!(harness.controller.countdown_generation(), None);
}

#[test]
fn short_countdown_display_sequence() {
    let mut harness = Harness::new(
        MockDisplay::new(standard_modes(), 1920, 1080, WindowMode::Windowed),
        ControllerOptions {
            countdown_seconds: 2,
            ..ControllerOptions::default()
        },
    );
    harness.controller.initialize().unwrap();
    harness
        .controller
        .on_selection_changed(SelectionKind::Resolution, 1)
        .unwrap();

    harness.tick().unwrap();
    harness.tick().unwrap();
    assert!(harness.surface.popup_visible());
    harness.tick().unwrap();

    assert_eq!(harness.surface.countdown_texts(), vec!["2", "1", "0"]);
    assert!(!harness.surface.popup_visible());
}

#[test]
fn manual_revert_restores_previous_value_after_some_ticks() {
    let mut harness = Harness::standard();
    harness
        .controller
        .on_selection_changed(SelectionKind::Resolution, 2)
        .unwrap();
    for _ in 0..5 {
        harness.tick().unwrap();
    }

    assert_eq!(
        harness.surface.sole_handler(Button::Revert),
        ButtonAction::Revert {
            kind: SelectionKind::Resolution,
            index: 0
        }
    );
    harness.press(Button::Revert).unwrap();

    assert_eq!(harness.display.size(), (1920, 1080));
    assert_eq!(harness.controller.state().applied_resolution_index, Some(0));
    assert!(!harness.surface.popup_visible());
    assert_eq!(harness.controller.countdown_generation(), None);
}

#[test]
fn selection_while_awaiting_confirmation_is_ignored() {
    let mut harness = Harness::standard();
    harness
        .controller
        .on_selection_changed(SelectionKind::Resolution, 2)
        .unwrap();
    harness.tick().unwrap();
    harness.tick().unwrap();
    let before = harness.controller.state().confirm.clone();
    let calls = harness.display.call_count();

    harness
        .controller
        .on_selection_changed(SelectionKind::Resolution, 1)
        .unwrap();
    harness
        .controller
        .on_selection_changed(SelectionKind::WindowMode, 0)
        .unwrap();

    assert_eq!(harness.controller.state().confirm, before);
    assert_eq!(harness.controller.state().confirm.remaining(), Some(8));
    assert_eq!(harness.display.call_count(), calls);
    assert_eq!(harness.scheduler.started().len(), 1);
    assert_eq!(harness.surface.popup_shown_count(), 1);
    assert_eq!(
        harness.surface.sole_handler(Button::Accept),
        ButtonAction::Accept {
            kind: SelectionKind::Resolution,
            index: 2
        }
    );
}

#[test]
fn accepting_twice_changes_nothing_the_second_time() {
    let mut harness = Harness::standard();
    harness
        .controller
        .on_selection_changed(SelectionKind::Resolution, 1)
        .unwrap();
    let accept = harness.surface.sole_handler(Button::Accept);

    harness.controller.on_button(accept).unwrap();
    let after_first = harness.controller.state().clone();
    let calls = harness.display.call_count();

    harness.controller.on_button(accept).unwrap();

    assert_eq!(harness.controller.state(), &after_first);
    assert_eq!(after_first.applied_resolution_index, Some(1));
    assert_eq!(harness.display.call_count(), calls);
}

#[test]
fn handlers_do_not_accumulate_across_popups() {
    let mut harness = Harness::standard();
    for index in [1, 2, 0] {
        harness
            .controller
            .on_selection_changed(SelectionKind::Resolution, index)
            .unwrap();
        assert_eq!(harness.surface.handlers(Button::Accept).len(), 1);
        assert_eq!(harness.surface.handlers(Button::Revert).len(), 1);
        harness.press(Button::Accept).unwrap();
    }
    assert_eq!(harness.controller.state().applied_resolution_index, Some(0));
    assert_eq!(harness.scheduler.started(), vec![0, 1, 2]);
}

#[test]
fn stale_countdown_ticks_are_ignored() {
    let mut harness = Harness::standard();
    harness
        .controller
        .on_selection_changed(SelectionKind::Resolution, 1)
        .unwrap();
    let first = harness.controller.countdown_generation().unwrap();
    harness.press(Button::Accept).unwrap();

    harness
        .controller
        .on_selection_changed(SelectionKind::Resolution, 2)
        .unwrap();
    let second = harness.controller.countdown_generation().unwrap();
    assert_ne!(first, second);

    for _ in 0..20 {
        harness.controller.on_countdown_tick(first).unwrap();
    }

    assert!(harness.surface.popup_visible());
    assert_eq!(harness.controller.state().confirm.remaining(), Some(10));
}

#[test]
fn reselecting_applied_option_still_asks_by_default() {
    let mut harness = Harness::standard();
    harness
        .controller
        .on_selection_changed(SelectionKind::Resolution, 0)
        .unwrap();
    assert!(harness.surface.popup_visible());
}

#[test]
fn skip_unchanged_ignores_reselection() {
    let mut harness = Harness::new(
        MockDisplay::new(standard_modes(), 1920, 1080, WindowMode::Windowed),
        ControllerOptions {
            skip_unchanged: true,
            ..ControllerOptions::default()
        },
    );
    harness.controller.initialize().unwrap();
    let calls = harness.display.call_count();

    harness
        .controller
        .on_selection_changed(SelectionKind::Resolution, 0)
        .unwrap();
    harness
        .controller
        .on_selection_changed(SelectionKind::WindowMode, 1)
        .unwrap();

    assert!(!harness.surface.popup_visible());
    assert_eq!(harness.display.call_count(), calls);
}

#[test]
fn rejected_preview_reports_and_stays_idle() {
    let mut harness = Harness::standard();
    harness.display.reject(1280, 720);

    let result = harness
        .controller
        .on_selection_changed(SelectionKind::Resolution, 2);

    assert!(result.is_err());
    assert!(!harness.surface.popup_visible());
    assert!(!harness.controller.state().confirm.is_popup_open());
    assert_eq!(harness.controller.countdown_generation(), None);
    assert_eq!(harness.surface.errors().len(), 1);
    assert!(harness.surface.errors()[0].contains("1280 x 720"));
    assert_eq!(harness.surface.list(SelectionKind::Resolution).shown, 0);
    assert_eq!(harness.display.size(), (1920, 1080));
}

#[test]
fn failed_revert_keeps_popup_and_stops_countdown() {
    let mut harness = Harness::standard();
    harness
        .controller
        .on_selection_changed(SelectionKind::Resolution, 2)
        .unwrap();
    harness.display.reject(1920, 1080);

    for _ in 0..10 {
        harness.tick().unwrap();
    }
    assert!(harness.tick().is_err());

    assert!(harness.surface.popup_visible());
    assert_eq!(harness.controller.countdown_generation(), None);
    assert_eq!(harness.controller.state().confirm.remaining(), Some(0));
    assert_eq!(harness.surface.errors().len(), 1);

    // A second attempt succeeds once the display cooperates.
    harness.display.accept_all();
    harness.press(Button::Revert).unwrap();
    assert!(!harness.surface.popup_visible());
    assert_eq!(harness.display.size(), (1920, 1080));
}

#[test]
fn window_mode_change_reapplies_on_next_fixed_update() {
    let mut harness = Harness::standard();
    harness
        .controller
        .on_selection_changed(SelectionKind::WindowMode, 0)
        .unwrap();

    let preview = ApplyCall {
        width: 1920,
        height: 1080,
        mode: WindowMode::ExclusiveFullscreen,
    };
    assert_eq!(harness.display.last_call(), Some(preview));
    assert_eq!(harness.controller.screen_mode(), WindowMode::ExclusiveFullscreen);
    let calls = harness.display.call_count();

    harness.controller.on_fixed_update().unwrap();
    assert_eq!(harness.display.call_count(), calls + 1);
    assert_eq!(harness.display.last_call(), Some(preview));

    harness.controller.on_fixed_update().unwrap();
    assert_eq!(harness.display.call_count(), calls + 1);

    harness.press(Button::Accept).unwrap();
    assert_eq!(harness.controller.state().applied_window_mode_index, 0);
}

#[test]
fn resolution_change_uses_pending_window_mode_after_accept() {
    let mut harness = Harness::standard();
    harness
        .controller
        .on_selection_changed(SelectionKind::WindowMode, 2)
        .unwrap();
    harness.press(Button::Accept).unwrap();

    harness
        .controller
        .on_selection_changed(SelectionKind::Resolution, 2)
        .unwrap();
    assert_eq!(
        harness.display.last_call(),
        Some(ApplyCall {
            width: 1280,
            height: 720,
            mode: WindowMode::BorderlessFullscreenWindow
        })
    );
}

#[test]
fn window_mode_revert_restores_previous_mode() {
    let mut harness = Harness::standard();
    harness
        .controller
        .on_selection_changed(SelectionKind::WindowMode, 2)
        .unwrap();
    assert_eq!(harness.display.mode(), WindowMode::BorderlessFullscreenWindow);

    harness.press(Button::Revert).unwrap();

    assert_eq!(harness.display.mode(), WindowMode::Windowed);
    assert_eq!(harness.controller.screen_mode(), WindowMode::Windowed);
    assert_eq!(harness.controller.state().applied_window_mode_index, 1);
    assert_eq!(harness.surface.list(SelectionKind::WindowMode).shown, 1);
}

#[test]
fn empty_catalog_disables_resolution_selection() {
    let mut harness = Harness::new(
        MockDisplay::new(Vec::new(), 1920, 1080, WindowMode::Windowed),
        ControllerOptions::default(),
    );
    harness.controller.initialize().unwrap();

    assert!(!harness.surface.list(SelectionKind::Resolution).enabled);
    assert_eq!(harness.controller.state().applied_resolution_index, None);
    assert!(harness.controller.catalog().is_empty());

    harness
        .controller
        .on_selection_changed(SelectionKind::Resolution, 0)
        .unwrap();
    assert!(!harness.surface.popup_visible());

    harness
        .controller
        .on_selection_changed(SelectionKind::WindowMode, 0)
        .unwrap();
    assert!(harness.surface.popup_visible());
}

#[test]
fn out_of_range_selection_is_ignored() {
    let mut harness = Harness::standard();
    harness
        .controller
        .on_selection_changed(SelectionKind::Resolution, 7)
        .unwrap();
    harness
        .controller
        .on_selection_changed(SelectionKind::WindowMode, 3)
        .unwrap();
    assert!(!harness.surface.popup_visible());
}

#[test]
fn exit_button_is_optional() {
    let harness = Harness::standard();
    assert_eq!(
        harness.surface.handlers(Button::Exit),
        vec![ButtonAction::Exit]
    );

    let mut without = Harness::new(
        MockDisplay::new(standard_modes(), 1920, 1080, WindowMode::Windowed),
        ControllerOptions {
            exit_button: false,
            ..ControllerOptions::default()
        },
    );
    without.controller.initialize().unwrap();
    assert!(without.surface.handlers(Button::Exit).is_empty());
}

#[test]
fn exit_button_requests_exit_without_touching_popup() {
    let mut harness = Harness::standard();
    harness
        .controller
        .on_selection_changed(SelectionKind::Resolution, 1)
        .unwrap();
    harness.press(Button::Exit).unwrap();

    assert!(harness.controller.exit_requested());
    assert!(harness.surface.popup_visible());
}
