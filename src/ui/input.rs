use crate::settings::{Button, CountdownScheduler};
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key<S: CountdownScheduler>(app: &mut App<S>, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.popup_visible() {
        match key.code {
            KeyCode::Left | KeyCode::BackTab => app.move_button_focus(-1),
            KeyCode::Right | KeyCode::Tab => app.move_button_focus(1),
            KeyCode::Enter | KeyCode::Char(' ') => app.press_focused(),
            KeyCode::Char('a') | KeyCode::Char('y') => app.press(Button::Accept),
            KeyCode::Char('r') | KeyCode::Char('n') | KeyCode::Esc => app.press(Button::Revert),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(1),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => app.toggle_focus(),
        KeyCode::Enter | KeyCode::Char(' ') => app.select_focused(),
        KeyCode::Char('q') | KeyCode::Esc => {
            if app.has_exit_button() {
                app.press(Button::Exit);
            } else {
                app.request_quit();
            }
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
