use crate::app::App;
use crate::catalog::QuickFilter;
use crate::ui::utils::truncate;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Search box on the left, quick-filter chips on the right 🔍
pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = &app.theme;

    let border = if app.search_active {
        theme.green
    } else {
        theme.surface
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(Color::Reset));
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Chips, right-aligned: " All  YouTube  TikTok  Instagram "
    let active_chip = app.active_chip();
    let labels: Vec<(QuickFilter, String)> = QuickFilter::CHIPS
        .iter()
        .map(|chip| (*chip, format!(" {} ", chip.label())))
        .collect();
    let chips_width: u16 = labels.iter().map(|(_, l)| l.width() as u16 + 1).sum();
    let show_chips = inner.width > chips_width + 12;

    let mut chip_areas = Vec::new();
    if show_chips {
        let mut x = inner.x + inner.width - chips_width;
        let mut spans = Vec::new();
        for (chip, label) in &labels {
            let w = label.width() as u16;
            let style = if Some(*chip) == active_chip {
                Style::default()
                    .fg(theme.base)
                    .bg(theme.blue)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.overlay)
            };
            spans.push(Span::styled(label.clone(), style));
            spans.push(Span::raw(" "));
            chip_areas.push((Rect::new(x, inner.y, w, 1), *chip));
            x += w + 1;
        }
        f.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Right),
            inner,
        );
    }

    let search_w = if show_chips {
        inner.width.saturating_sub(chips_width + 1)
    } else {
        inner.width
    } as usize;
    let query = &app.view.search_query;
    let (text, color) = if app.search_active {
        (format!(" {}▏", query), theme.green)
    } else if !query.is_empty() {
        (format!(" {}", query), theme.text)
    } else {
        (" Press / to search...".to_string(), theme.overlay)
    };
    let search = Paragraph::new(Line::from(vec![
        Span::styled(" 🔍", Style::default().fg(color)),
        Span::styled(truncate(&text, search_w.saturating_sub(3)), Style::default().fg(color)),
    ]));
    f.render_widget(
        search,
        Rect::new(inner.x, inner.y, search_w as u16, inner.height.min(1)),
    );

    app.chip_areas = chip_areas;
}
