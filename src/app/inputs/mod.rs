use crate::app::events::AppEvent;
use crate::app::App;
use crate::thumbs::preview::spawn_preview;
use crossterm::event::{KeyEvent, MouseEvent};
use reqwest::Client;
use tokio::sync::mpsc;

pub mod common;
pub mod gallery;
pub mod modal;
pub mod mouse;
pub mod search;

pub fn handle_event(key: KeyEvent, app: &mut App, tx: &mpsc::Sender<AppEvent>, client: &Client) {
    // 1. Search box captures everything while focused
    if app.search_active && !app.modal.is_open() {
        search::handle_search_events(key, app);
        return;
    }

    // 2. Global keys (quit, help)
    if common::handle_common_events(key, app) {
        return;
    }

    // 3. Player overlay is modal: the grid underneath gets nothing
    if app.modal.is_open() {
        modal::handle_modal_events(key, app);
        return;
    }

    if gallery::handle_gallery_events(key, app) {
        request_preview(app, tx, client);
    }
}

pub fn handle_mouse(mouse: MouseEvent, app: &mut App, tx: &mpsc::Sender<AppEvent>, client: &Client) {
    if mouse::handle_mouse_events(mouse, app) {
        request_preview(app, tx, client);
    }
}

/// Start the open item's preview download if it has not been asked for yet
pub fn request_preview(app: &mut App, tx: &mpsc::Sender<AppEvent>, client: &Client) {
    if let Some(url) = app.take_preview_request() {
        tracing::debug!(%url, "preview requested");
        spawn_preview(client, &url, tx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::UserConfig;
    use crate::app::modal::CloseReason;
    use crate::catalog::{Catalog, MediaItem};
    use crate::thumbs::ThumbnailCache;
    use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};
    use ratatui::layout::Rect;

    fn app() -> App {
        let catalog = Catalog::in_order(vec![
            MediaItem::tiktok("b", "Fashion", "Y1", None),
            MediaItem::instagram("c", "Cooking", "https://www.instagram.com/p/C/"),
        ])
        .unwrap();
        App::new(catalog, UserConfig::default(), ThumbnailCache::new())
    }

    fn press(app: &mut App, code: KeyCode) {
        let (tx, _rx) = mpsc::channel(8);
        handle_event(KeyEvent::new(code, KeyModifiers::NONE), app, &tx, &Client::new());
    }

    fn click(app: &mut App, column: u16, row: u16) {
        let (tx, _rx) = mpsc::channel(8);
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(mouse, app, &tx, &Client::new());
    }

    #[test]
    fn test_search_mode_captures_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        assert!(app.search_active);
        for c in "q2".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert!(app.is_running);
        assert_eq!(app.view.search_query, "q2");
        assert!(app.visible.is_empty());

        press(&mut app, KeyCode::Esc);
        assert!(!app.search_active);
        assert_eq!(app.view.search_query, "");
        assert_eq!(app.visible.len(), 2);
    }

    #[test]
    fn test_quick_filter_and_folder_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.view.search_query, "tiktok");
        press(&mut app, KeyCode::Char('0'));
        assert_eq!(app.view.search_query, "");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.view.active_folder, "Fashion");
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.view.active_folder, "All");
    }

    #[test]
    fn test_open_close_and_quit_order() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert!(app.modal.is_open());

        // Grid keys are ignored while the player is up
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.selected, 0);

        press(&mut app, KeyCode::Char('x'));
        assert!(!app.modal.is_open());

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('?'));
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.show_keyhints && app.modal.is_open());
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.modal.is_open() && app.is_running);
        assert_eq!(app.modal.last_close(), Some(CloseReason::QuitKey));
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.is_running);
    }

    #[test]
    fn test_mouse_tile_backdrop_and_folder() {
        let mut app = app();
        app.tile_areas = vec![(Rect::new(0, 0, 10, 5), "c".to_string())];
        app.folder_areas = vec![(Rect::new(20, 0, 10, 1), "Cooking".to_string())];

        click(&mut app, 3, 3);
        assert!(matches!(app.modal.focused(), Some(item) if item.id == "c"));

        app.modal_area = Some(Rect::new(10, 10, 20, 10));
        app.close_button_area = Some(Rect::new(27, 10, 3, 1));
        click(&mut app, 15, 15);
        assert!(app.modal.is_open());
        click(&mut app, 28, 10);
        assert!(!app.modal.is_open());

        click(&mut app, 3, 3);
        click(&mut app, 0, 30);
        assert!(!app.modal.is_open());

        click(&mut app, 22, 0);
        assert_eq!(app.view.active_folder, "Cooking");
    }

    #[test]
    fn test_click_while_searching_hands_keys_to_player() {
        let mut app = app();
        app.tile_areas = vec![(Rect::new(0, 0, 10, 5), "c".to_string())];

        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Char('i'));
        assert!(app.search_active);
        click(&mut app, 3, 3);
        assert!(app.modal.is_open());
        assert!(!app.search_active);

        // Player keys, not the search box
        press(&mut app, KeyCode::Char('x'));
        assert!(!app.modal.is_open());
        assert_eq!(app.view.search_query, "i");

        click(&mut app, 3, 3);
        press(&mut app, KeyCode::Esc);
        assert!(!app.modal.is_open());
        assert_eq!(app.view.search_query, "i");
        assert_eq!(app.modal.last_close(), Some(CloseReason::Escape));
    }
}
