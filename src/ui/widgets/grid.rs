use crate::app::App;
use crate::catalog::MediaItem;
use crate::embed::MountPoint;
use crate::thumbs::Thumbnail;
use crate::ui::layout::{grid_geometry, scroll_row, TILE_HEIGHT};
use crate::ui::utils::truncate;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use std::sync::Arc;

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let geometry = grid_geometry(area);
    app.grid_columns = geometry.columns;
    app.tile_areas.clear();

    if app.visible.is_empty() {
        let theme = &app.theme;
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "No clips match",
                Style::default().fg(theme.overlay),
            )),
            Line::from(Span::styled(
                "Try another folder or search",
                Style::default().fg(theme.surface),
            )),
        ];
        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
        return;
    }

    let first_row = scroll_row(app.selected, geometry);
    let start = first_row * geometry.columns;
    let end = (start + geometry.columns * geometry.visible_rows).min(app.visible.len());

    let mut hit_areas = Vec::with_capacity(end - start);
    for (offset, item) in app.visible[start..end].iter().enumerate() {
        let col = (offset % geometry.columns) as u16;
        let row = (offset / geometry.columns) as u16;
        let tile = Rect::new(
            area.x + col * geometry.tile_width,
            area.y + row * TILE_HEIGHT,
            geometry.tile_width,
            TILE_HEIGHT,
        )
        .intersection(area);
        if tile.is_empty() {
            continue;
        }

        render_tile(f, tile, app, item, start + offset == app.selected);
        hit_areas.push((tile, item.id.clone()));
    }
    app.tile_areas = hit_areas;
}

fn render_tile(f: &mut Frame, area: Rect, app: &App, item: &Arc<MediaItem>, selected: bool) {
    let theme = &app.theme;
    let provider = item.provider();

    let border = if selected { theme.yellow } else { theme.surface };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title(Span::styled(
            format!(" {} ", provider.label()),
            Style::default()
                .fg(theme.provider(provider))
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(Color::Reset));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let w = inner.width as usize;
    let title_style = if selected {
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text)
    };

    // Picture area: a live inline embed, a known thumbnail, or a placeholder
    let tile_mount = MountPoint::Tile(item.id.clone());
    let picture = match app.host.content(&tile_mount) {
        Some(content) => Line::from(vec![
            Span::styled("▶ ", Style::default().fg(theme.green)),
            Span::styled(
                truncate(&content.src, w.saturating_sub(2)),
                Style::default().fg(theme.overlay),
            ),
        ]),
        None => match app.thumbnail(item) {
            Thumbnail::Url(url) => Line::from(vec![
                Span::styled("🖼 ", Style::default().fg(theme.blue)),
                Span::styled(
                    truncate(&url, w.saturating_sub(3)),
                    Style::default().fg(theme.overlay),
                ),
            ]),
            Thumbnail::Placeholder => Line::from(Span::styled(
                "◌ no preview",
                Style::default().fg(theme.surface),
            )),
        },
    };

    let lines = vec![
        Line::from(Span::styled(truncate(item.display_title(), w), title_style)),
        Line::from(Span::styled(
            truncate(&item.folder, w),
            Style::default().fg(theme.overlay),
        )),
        Line::from(""),
        picture,
    ];
    f.render_widget(Paragraph::new(lines), inner);
}
