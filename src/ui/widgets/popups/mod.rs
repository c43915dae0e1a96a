use crate::app::App;
use ratatui::Frame;

pub mod help;
pub mod player;
pub mod toast;

pub fn render(f: &mut Frame, app: &mut App) {
    // PLAYER MODAL
    if app.modal.is_open() {
        player::render(f, app);
    } else {
        app.modal_area = None;
        app.close_button_area = None;
    }

    // TOAST NOTIFICATION
    if app.toast.is_some() {
        toast::render(f, app);
    }

    // FOOTER / WHICHKEY POPUP
    if app.show_keyhints {
        help::render(f, app);
    }
}
