use crate::app::modal::CloseReason;
use crate::app::App;
use crossterm::event::KeyEvent;

pub fn handle_modal_events(key: KeyEvent, app: &mut App) {
    let keys = app.keys.clone();

    if keys.matches(key, &keys.close) {
        app.close_modal(CloseReason::Button);
    } else if keys.matches(key, &keys.close_alt) {
        app.close_modal(CloseReason::Escape);
    } else if keys.matches(key, &keys.open_in_browser) {
        app.open_in_browser();
    }
}
