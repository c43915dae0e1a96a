use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Live-filtering text input. Every keystroke re-filters the grid.
pub fn handle_search_events(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => app.search_active = false,
        KeyCode::Esc => {
            app.set_query("");
            app.search_active = false;
        }
        KeyCode::Backspace => app.pop_query_char(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_query_char(c)
        }
        _ => {}
    }
}
