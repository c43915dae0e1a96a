use crate::app::modal::CloseReason;
use crate::app::App;
use crate::ui::utils::contains;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// Left clicks against the hit areas of the last frame. Returns `true`
/// when a tile was opened.
pub fn handle_mouse_events(mouse: MouseEvent, app: &mut App) -> bool {
    let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
        return false;
    };
    let (col, row) = (mouse.column, mouse.row);

    if app.modal.is_open() {
        if app.close_button_area.is_some_and(|r| contains(r, col, row)) {
            app.close_modal(CloseReason::Button);
        } else if !app.modal_area.is_some_and(|r| contains(r, col, row)) {
            app.close_modal(CloseReason::Backdrop);
        }
        return false;
    }

    let hit = |areas: &[(ratatui::layout::Rect, String)]| {
        areas
            .iter()
            .find(|(r, _)| contains(*r, col, row))
            .map(|(_, id)| id.clone())
    };

    if let Some(id) = hit(&app.tile_areas) {
        return app.open_item(&id);
    }
    if let Some(folder) = hit(&app.folder_areas) {
        app.set_folder(&folder);
        return false;
    }
    if let Some(chip) = app
        .chip_areas
        .iter()
        .find(|(r, _)| contains(*r, col, row))
        .map(|(_, chip)| *chip)
    {
        app.apply_quick_filter(chip);
    }
    false
}
