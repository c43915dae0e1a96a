//! Full-frame rendering against ratatui's TestBackend

use ratatui::backend::TestBackend;
use ratatui::Terminal;
use vaultfeed::app::config::{InstagramRenderMode, UserConfig};
use vaultfeed::app::App;
use vaultfeed::catalog::{Catalog, MediaItem};
use vaultfeed::thumbs::ThumbnailCache;
use vaultfeed::ui;

const TEST_WIDTH: u16 = 100;
const TEST_HEIGHT: u16 = 30;

fn app(mode: InstagramRenderMode) -> App {
    let catalog = Catalog::in_order(vec![
        MediaItem::youtube("a", "Cooking", "X1").titled("Pasta Night"),
        MediaItem::tiktok("b", "Fashion", "Y1", Some("https://www.tiktok.com/@u/video/Y1")),
        MediaItem::instagram("c", "Fashion", "https://www.instagram.com/p/C/").titled("Boots"),
    ])
    .unwrap();
    let config = UserConfig {
        instagram_render_mode: mode,
        ..UserConfig::default()
    };
    App::new(catalog, config, ThumbnailCache::new())
}

fn draw(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::ui(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_gallery_frame_records_hit_areas() {
    let mut app = app(InstagramRenderMode::Inline);
    let screen = draw(&mut app, TEST_WIDTH, TEST_HEIGHT);

    assert!(screen.contains("Folders"));
    assert!(screen.contains("Pasta Night"));
    assert!(screen.contains("Press / to search"));
    assert!(screen.contains("3 of 3 clips"));

    assert_eq!(app.tile_areas.len(), 3);
    assert_eq!(app.folder_areas.len(), 3);
    assert_eq!(app.chip_areas.len(), 4);
    assert!(app.grid_columns >= 2);
    assert!(app.modal_area.is_none());
}

#[test]
fn test_narrow_terminal_hides_sidebar() {
    let mut app = app(InstagramRenderMode::Inline);
    let screen = draw(&mut app, 40, 20);
    assert!(!screen.contains("Folders"));
    assert!(app.folder_areas.is_empty());
    assert_eq!(app.grid_columns, 1);
}

#[test]
fn test_player_frame_shows_embed_and_close_button() {
    let mut app = app(InstagramRenderMode::Modal);
    app.open_item("b");
    let screen = draw(&mut app, TEST_WIDTH, TEST_HEIGHT);

    assert!(screen.contains("https://www.tiktok.com/embed/Y1"));
    assert!(screen.contains("✕"));
    let modal = app.modal_area.unwrap();
    let close = app.close_button_area.unwrap();
    assert!(close.x >= modal.x && close.x + close.width <= modal.x + modal.width);

    app.close_modal(vaultfeed::app::modal::CloseReason::Button);
    draw(&mut app, TEST_WIDTH, TEST_HEIGHT);
    assert!(app.modal_area.is_none());
}

#[test]
fn test_tiny_terminal_player_still_owns_clicks() {
    let mut app = app(InstagramRenderMode::Modal);
    app.open_item("b");
    let screen = draw(&mut app, 12, 6);

    assert!(screen.contains("TikTok"));
    assert_eq!(app.modal_area, Some(ratatui::layout::Rect::new(0, 0, 12, 6)));
    assert!(app.close_button_area.is_none());
}

#[test]
fn test_empty_result_message() {
    let mut app = app(InstagramRenderMode::Inline);
    app.set_query("nothing matches this");
    let screen = draw(&mut app, TEST_WIDTH, TEST_HEIGHT);
    assert!(screen.contains("No clips match"));
    assert!(app.tile_areas.is_empty());
}
