use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Below this width the folder sidebar is hidden (Tab still cycles folders)
pub const SIDEBAR_MIN_WIDTH: u16 = 60;
pub const SIDEBAR_WIDTH: u16 = 20;

pub const TILE_WIDTH: u16 = 26;
pub const TILE_HEIGHT: u16 = 7;

pub struct MainLayout {
    pub body_area: Rect,
    pub footer_area: Rect,
}

pub fn get_main_layout(area: Rect) -> MainLayout {
    // Footer needs 1 line at the bottom always.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    MainLayout {
        body_area: chunks[0],
        footer_area: chunks[1],
    }
}

pub struct GalleryLayout {
    pub sidebar: Option<Rect>,
    pub toolbar: Rect,
    pub grid: Rect,
}

pub fn get_gallery_layout(area: Rect) -> GalleryLayout {
    let (sidebar, main) = if area.width >= SIDEBAR_MIN_WIDTH {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(area);
        (Some(chunks[0]), chunks[1])
    } else {
        (None, area)
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search + quick filters
            Constraint::Min(0),    // Tiles
        ])
        .split(main);

    GalleryLayout {
        sidebar,
        toolbar: chunks[0],
        grid: chunks[1],
    }
}

/// Tile grid geometry for a given area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    pub columns: usize,
    pub visible_rows: usize,
    pub tile_width: u16,
}

pub fn grid_geometry(area: Rect) -> GridGeometry {
    let columns = (area.width / TILE_WIDTH).max(1) as usize;
    // Spread leftover width across the columns
    let tile_width = (area.width / columns as u16).max(1);
    GridGeometry {
        columns,
        visible_rows: (area.height / TILE_HEIGHT).max(1) as usize,
        tile_width,
    }
}

/// First grid row to draw so that `selected` stays on screen
pub fn scroll_row(selected: usize, geometry: GridGeometry) -> usize {
    let row = selected / geometry.columns;
    row.saturating_sub(geometry.visible_rows.saturating_sub(1))
}
