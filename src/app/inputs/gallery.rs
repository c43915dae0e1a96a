use crate::app::App;
use crate::catalog::{Provider, QuickFilter};
use crossterm::event::KeyEvent;

/// Grid, folder and filter keys. Returns `true` when the player was opened.
pub fn handle_gallery_events(key: KeyEvent, app: &mut App) -> bool {
    let keys = app.keys.clone();

    if keys.matches(key, &keys.search) {
        app.search_active = true;
        return false;
    }

    // Folders 📁
    if keys.matches(key, &keys.folder_next) {
        app.next_folder();
        return false;
    }
    if keys.matches(key, &keys.folder_prev) {
        app.prev_folder();
        return false;
    }

    // Quick filters
    let chip = if keys.matches(key, &keys.quick_all) {
        Some(QuickFilter::All)
    } else if keys.matches(key, &keys.quick_youtube) {
        Some(QuickFilter::Provider(Provider::Youtube))
    } else if keys.matches(key, &keys.quick_tiktok) {
        Some(QuickFilter::Provider(Provider::TikTok))
    } else if keys.matches(key, &keys.quick_instagram) {
        Some(QuickFilter::Provider(Provider::Instagram))
    } else {
        None
    };
    if let Some(chip) = chip {
        app.apply_quick_filter(chip);
        return false;
    }

    // Grid navigation
    if keys.matches_any(key, &[&keys.nav_up, &keys.nav_up_alt]) {
        app.move_selection(0, -1);
    } else if keys.matches_any(key, &[&keys.nav_down, &keys.nav_down_alt]) {
        app.move_selection(0, 1);
    } else if keys.matches_any(key, &[&keys.nav_left, &keys.nav_left_alt]) {
        app.move_selection(-1, 0);
    } else if keys.matches_any(key, &[&keys.nav_right, &keys.nav_right_alt]) {
        app.move_selection(1, 0);
    } else if keys.matches(key, &keys.open) {
        return app.open_selected();
    }

    false
}
