use super::config::{InstagramRenderMode, UserConfig};
use super::keys::KeyConfig;
use super::modal::{CloseReason, ModalPlayer};
use crate::catalog::{Catalog, MediaItem, Provider, QuickFilter, ALL_FOLDERS};
use crate::embed::{MountPoint, TerminalHost, TileSlots};
use crate::thumbs::preview::{PreviewResult, PreviewState};
use crate::thumbs::{thumbnail_for, Thumbnail, ThumbnailCache};
use crate::ui::theme::Theme;
use ratatui::layout::Rect;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// What the user is currently looking at: the two filter inputs 🔎
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryView {
    pub search_query: String,
    pub active_folder: String,
}

impl Default for GalleryView {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            active_folder: ALL_FOLDERS.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub start_time: Instant,
    pub deadline: Instant,
}

pub struct App {
    pub theme: Theme,
    pub keys: KeyConfig,
    pub config: UserConfig,

    pub is_running: bool,

    /// Read-only after startup
    pub catalog: Catalog,
    pub view: GalleryView,
    /// `catalog` filtered by `view`, in catalog order
    pub visible: Vec<Arc<MediaItem>>,
    pub folders: Vec<String>,
    pub selected: usize,

    pub search_active: bool,
    pub show_keyhints: bool,
    pub toast: Option<Toast>,

    /// Player overlay 🎬
    pub modal: ModalPlayer,
    pub host: TerminalHost,
    pub tiles: TileSlots,
    pub thumbs: ThumbnailCache,
    /// Preview images by URL
    pub previews: HashMap<String, PreviewState>,

    // Hit areas from the last frame, for mouse clicks 🖱️
    pub tile_areas: Vec<(Rect, String)>,
    pub folder_areas: Vec<(Rect, String)>,
    pub chip_areas: Vec<(Rect, QuickFilter)>,
    pub modal_area: Option<Rect>,
    pub close_button_area: Option<Rect>,
    pub grid_columns: usize,
}

impl App {
    pub fn new(catalog: Catalog, config: UserConfig, thumbs: ThumbnailCache) -> Self {
        let inline = match config.instagram_render_mode {
            InstagramRenderMode::Inline => vec![Provider::Instagram],
            InstagramRenderMode::Modal => Vec::new(),
        };
        let folders = catalog.folders();

        let mut app = Self {
            theme: config.theme.clone(),
            keys: config.keys.clone(),
            config,
            is_running: true,
            catalog,
            view: GalleryView::default(),
            visible: Vec::new(),
            folders,
            selected: 0,
            search_active: false,
            show_keyhints: false,
            toast: None,
            modal: ModalPlayer::new(),
            host: TerminalHost::new(),
            tiles: TileSlots::new(inline),
            thumbs,
            previews: HashMap::new(),
            tile_areas: Vec::new(),
            folder_areas: Vec::new(),
            chip_areas: Vec::new(),
            modal_area: None,
            close_button_area: None,
            grid_columns: 1,
        };
        app.refresh();
        app
    }

    /// Recompute the visible list after a filter change and bring inline
    /// tile embeds in line with it.
    pub fn refresh(&mut self) {
        self.visible = self
            .catalog
            .filter(&self.view.active_folder, &self.view.search_query);
        self.tiles.reconcile(&self.visible, &mut self.host);

        if self.selected >= self.visible.len() {
            self.selected = self.visible.len().saturating_sub(1);
        }
    }

    pub fn selected_item(&self) -> Option<&Arc<MediaItem>> {
        self.visible.get(self.selected)
    }

    // ━━━ Search ━━━

    pub fn set_query(&mut self, query: &str) {
        if self.view.search_query == query {
            return;
        }
        self.view.search_query = query.to_string();
        self.selected = 0;
        self.refresh();
    }

    pub fn push_query_char(&mut self, c: char) {
        let mut query = self.view.search_query.clone();
        query.push(c);
        self.set_query(&query);
    }

    pub fn pop_query_char(&mut self) {
        let mut query = self.view.search_query.clone();
        query.pop();
        self.set_query(&query);
    }

    pub fn apply_quick_filter(&mut self, chip: QuickFilter) {
        self.set_query(&chip.query());
    }

    /// Chip matching the current query, for highlighting
    pub fn active_chip(&self) -> Option<QuickFilter> {
        QuickFilter::active_for(&self.view.search_query)
    }

    // ━━━ Folders ━━━

    /// Unknown names are ignored
    pub fn set_folder(&mut self, folder: &str) {
        if !self.folders.iter().any(|f| f == folder) || self.view.active_folder == folder {
            return;
        }
        self.view.active_folder = folder.to_string();
        self.selected = 0;
        self.refresh();
    }

    fn folder_index(&self) -> usize {
        self.folders
            .iter()
            .position(|f| *f == self.view.active_folder)
            .unwrap_or(0)
    }

    pub fn next_folder(&mut self) {
        if self.folders.is_empty() {
            return;
        }
        let idx = (self.folder_index() + 1) % self.folders.len();
        let name = self.folders[idx].clone();
        self.set_folder(&name);
    }

    pub fn prev_folder(&mut self) {
        if self.folders.is_empty() {
            return;
        }
        let len = self.folders.len();
        let idx = (self.folder_index() + len - 1) % len;
        let name = self.folders[idx].clone();
        self.set_folder(&name);
    }

    // ━━━ Grid ━━━

    /// Move by `dx` columns and `dy` rows, clamped to the grid.
    pub fn move_selection(&mut self, dx: isize, dy: isize) {
        if self.visible.is_empty() {
            return;
        }
        let cols = self.grid_columns.max(1) as isize;
        let last = self.visible.len() as isize - 1;
        let target = self.selected as isize + dx + dy * cols;
        self.selected = target.clamp(0, last) as usize;
    }

    // ━━━ Player ━━━

    pub fn open_selected(&mut self) -> bool {
        match self.selected_item() {
            Some(item) => {
                let id = item.id.clone();
                self.open_item(&id)
            }
            None => false,
        }
    }

    /// Open the player on catalog item `id`. Unknown ids are logged and
    /// leave the player untouched.
    pub fn open_item(&mut self, id: &str) -> bool {
        let Some(item) = self.catalog.get(id).cloned() else {
            tracing::warn!(id, "open requested for unknown item");
            return false;
        };
        if let Some(pos) = self.visible.iter().position(|i| i.id == id) {
            self.selected = pos;
        }
        // Keys belong to the player from here on
        self.search_active = false;
        self.modal.open_with(item, &mut self.host);
        true
    }

    pub fn close_modal(&mut self, reason: CloseReason) -> bool {
        self.modal.close(reason, &mut self.host)
    }

    /// Hand the open player's embed to the system browser
    pub fn open_in_browser(&mut self) {
        match self.host.open_in_browser(&MountPoint::Modal) {
            Ok(Some(url)) => {
                tracing::info!(%url, "opened in browser");
                self.show_toast("🌐 Opened in browser");
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(error = %e, "browser launch failed");
                self.show_toast("⚠️ Could not launch browser");
            }
        }
    }

    pub fn thumbnail(&self, item: &MediaItem) -> Thumbnail {
        thumbnail_for(item, &self.thumbs)
    }

    /// URL of the open item's preview image, if it still needs fetching.
    /// Marks it as loading so it is requested once.
    pub fn take_preview_request(&mut self) -> Option<String> {
        let item = self.modal.focused()?;
        let Thumbnail::Url(url) = self.thumbnail(item) else {
            return None;
        };
        if self.previews.contains_key(&url) {
            return None;
        }
        self.previews.insert(url.clone(), PreviewState::Loading);
        Some(url)
    }

    pub fn on_preview_loaded(&mut self, url: String, result: PreviewResult) {
        let state = match result {
            Ok(img) => PreviewState::Loaded(img),
            Err(_) => PreviewState::Failed,
        };
        self.previews.insert(url, state);
    }

    /// Preview state for the open item, `None` when it has no image at all
    pub fn modal_preview(&self) -> Option<PreviewState> {
        let item = self.modal.focused()?;
        match self.thumbnail(item) {
            Thumbnail::Url(url) => Some(
                self.previews
                    .get(&url)
                    .cloned()
                    .unwrap_or(PreviewState::Loading),
            ),
            Thumbnail::Placeholder => None,
        }
    }

    // ━━━ Popups ━━━

    pub fn show_toast(&mut self, message: &str) {
        let now = Instant::now();
        let deadline = now + Duration::from_millis(2000);

        if let Some(ref mut current) = self.toast {
            // Keep start_time so the entrance animation does not replay
            current.message = message.to_string();
            current.deadline = deadline;
        } else {
            self.toast = Some(Toast {
                message: message.to_string(),
                start_time: now,
                deadline,
            });
        }
    }

    /// Called every tick to update state
    pub fn on_tick(&mut self) {
        if let Some(ref toast) = self.toast {
            if Instant::now() > toast.deadline {
                self.toast = None;
            }
        }
    }

    /// Tear down every live embed before exit
    pub fn teardown(&mut self) {
        self.modal.close(CloseReason::Quit, &mut self.host);
        self.tiles.unmount_all(&mut self.host);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modal::ModalState;

    fn app_with(mode: InstagramRenderMode) -> App {
        let items = vec![
            MediaItem::youtube("a", "Cooking", "X1").titled("Pasta"),
            MediaItem::tiktok("b", "Fashion", "Y1", Some("https://www.tiktok.com/@u/video/Y1")),
            MediaItem::instagram("c", "Fashion", "https://www.instagram.com/p/C/").titled("Boots"),
        ];
        let catalog = Catalog::in_order(items).unwrap();
        let config = UserConfig {
            instagram_render_mode: mode,
            ..UserConfig::default()
        };
        App::new(catalog, config, ThumbnailCache::new())
    }

    fn ids(app: &App) -> Vec<&str> {
        app.visible.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_starts_unfiltered() {
        let app = app_with(InstagramRenderMode::Inline);
        assert_eq!(ids(&app), ["a", "b", "c"]);
        assert_eq!(app.folders, ["All", "Cooking", "Fashion"]);
        assert!(app.tiles.is_mounted("c"));
    }

    #[test]
    fn test_folder_cycle_and_reconcile() {
        let mut app = app_with(InstagramRenderMode::Inline);
        app.next_folder();
        assert_eq!(app.view.active_folder, "Cooking");
        assert_eq!(ids(&app), ["a"]);
        assert!(!app.tiles.is_mounted("c"));

        app.next_folder();
        app.next_folder();
        assert_eq!(app.view.active_folder, "All");
        app.prev_folder();
        assert_eq!(app.view.active_folder, "Fashion");
        assert_eq!(ids(&app), ["b", "c"]);
        assert!(app.tiles.is_mounted("c"));
    }

    #[test]
    fn test_modal_render_mode_has_no_tile_embeds() {
        let app = app_with(InstagramRenderMode::Modal);
        assert!(app.tiles.is_empty());
        assert_eq!(app.host.live_count(), 0);
    }

    #[test]
    fn test_query_editing_and_quick_filters() {
        let mut app = app_with(InstagramRenderMode::Inline);
        for c in "TIK".chars() {
            app.push_query_char(c);
        }
        assert_eq!(ids(&app), ["b"]);
        app.pop_query_char();
        app.pop_query_char();
        assert_eq!(app.view.search_query, "T");
        assert_eq!(app.visible.len(), 3);

        app.apply_quick_filter(QuickFilter::Provider(Provider::Instagram));
        assert_eq!(ids(&app), ["c"]);
        assert_eq!(app.active_chip(), Some(QuickFilter::Provider(Provider::Instagram)));

        app.apply_quick_filter(QuickFilter::All);
        assert_eq!(app.visible.len(), 3);
    }

    #[test]
    fn test_selection_clamps() {
        let mut app = app_with(InstagramRenderMode::Inline);
        app.grid_columns = 2;
        app.move_selection(0, 1);
        assert_eq!(app.selected, 2);
        app.move_selection(5, 5);
        assert_eq!(app.selected, 2);
        app.move_selection(-1, -1);
        assert_eq!(app.selected, 0);

        app.selected = 2;
        app.set_folder("Cooking");
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_open_replace_close() {
        let mut app = app_with(InstagramRenderMode::Modal);
        assert!(app.open_item("a"));
        assert!(app.open_item("b"));
        assert!(matches!(app.modal.state(), ModalState::Open(item) if item.id == "b"));
        assert_eq!(app.host.live_count(), 1);
        assert_eq!(app.selected, 1);

        assert!(!app.open_item("zzz"));
        assert!(app.close_modal(CloseReason::Backdrop));
        assert_eq!(app.host.live_count(), 0);
    }

    #[test]
    fn test_preview_requested_once() {
        let mut app = app_with(InstagramRenderMode::Modal);
        app.open_item("a");
        let url = app.take_preview_request().unwrap();
        assert_eq!(url, "https://img.youtube.com/vi/X1/hqdefault.jpg");
        assert!(app.take_preview_request().is_none());

        app.on_preview_loaded(url, Err(Arc::from("boom")));
        assert!(matches!(app.modal_preview(), Some(PreviewState::Failed)));

        // TikTok without a resolved thumbnail has nothing to fetch
        app.open_item("b");
        assert!(app.take_preview_request().is_none());
        assert!(app.modal_preview().is_none());
    }

    #[test]
    fn test_teardown_unmounts_everything() {
        let mut app = app_with(InstagramRenderMode::Inline);
        app.open_item("a");
        assert_eq!(app.host.live_count(), 2);
        app.teardown();
        assert_eq!(app.host.live_count(), 0);
    }

    #[test]
    fn test_toast_keeps_start_time() {
        let mut app = app_with(InstagramRenderMode::Inline);
        app.show_toast("one");
        let start = app.toast.as_ref().unwrap().start_time;
        app.show_toast("two");
        let toast = app.toast.as_ref().unwrap();
        assert_eq!(toast.message, "two");
        assert_eq!(toast.start_time, start);
    }
}
