use crate::app::App;
use crate::catalog::ALL_FOLDERS;
use crate::ui::utils::truncate;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Folder list 📁. Each row is clickable.
pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Span::styled(
            " Folders ",
            Style::default().fg(theme.blue).add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Left)
        .border_style(Style::default().fg(theme.surface))
        .style(Style::default().bg(Color::Reset));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let w = inner.width as usize;
    let mut lines: Vec<Line> = Vec::new();
    let mut hit_areas = Vec::new();

    for (i, folder) in app.folders.iter().enumerate() {
        if i as u16 >= inner.height {
            break;
        }
        let active = *folder == app.view.active_folder;
        let count = if folder == ALL_FOLDERS {
            app.catalog.len()
        } else {
            app.catalog.items().iter().filter(|item| item.folder == *folder).count()
        };

        let dot = if active { "●" } else { "○" };
        let count_text = format!("{} ", count);
        let name_w = w.saturating_sub(3 + count_text.len());
        let name = truncate(folder, name_w);
        let pad = name_w.saturating_sub(unicode_width::UnicodeWidthStr::width(name.as_str()));

        let (fg, modifier) = if active {
            (theme.green, Modifier::BOLD)
        } else {
            (theme.text, Modifier::empty())
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", dot), Style::default().fg(fg)),
            Span::styled(name, Style::default().fg(fg).add_modifier(modifier)),
            Span::raw(" ".repeat(pad)),
            Span::styled(count_text, Style::default().fg(theme.overlay)),
        ]));

        hit_areas.push((
            Rect::new(inner.x, inner.y + i as u16, inner.width, 1),
            folder.clone(),
        ));
    }

    f.render_widget(Paragraph::new(lines), inner);
    app.folder_areas = hit_areas;
}
