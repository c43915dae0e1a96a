use crate::app::modal::CloseReason;
use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

pub fn handle_common_events(key: KeyEvent, app: &mut App) -> bool {
    let keys = &app.keys;

    // Quit ('q')
    if keys.matches(key, &keys.quit) {
        // Close popups first, then quit (Neovim-style)
        if app.show_keyhints {
            app.show_keyhints = false;
        } else if app.modal.is_open() {
            app.close_modal(CloseReason::QuitKey);
        } else {
            app.is_running = false;
        }
        return true;
    }

    if keys.matches(key, &keys.toggle_keyhints) {
        app.show_keyhints = !app.show_keyhints;
        return true;
    }

    // Esc dismisses the hints before anything underneath
    if key.code == KeyCode::Esc && app.show_keyhints {
        app.show_keyhints = false;
        return true;
    }

    false
}
