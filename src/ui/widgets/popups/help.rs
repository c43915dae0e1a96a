use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub fn render(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let k = &app.keys;

    // 🎹 WhichKey-style floating popup, bottom-right
    let pair = |a: &str, b: &str| format!("{}/{}", k.display(a), k.display(b));

    let (title, keys): (&str, Vec<(String, &str, &str)>) = if app.modal.is_open() {
        (
            "Player",
            vec![
                (pair(&k.close, &k.close_alt), "✕", "Close"),
                (k.display(&k.open_in_browser), "🌐", "Open in browser"),
            ],
        )
    } else {
        (
            "Gallery",
            vec![
                (
                    format!(
                        "{}{}{}{}",
                        k.display(&k.nav_left),
                        k.display(&k.nav_down),
                        k.display(&k.nav_up),
                        k.display(&k.nav_right)
                    ),
                    "🧭",
                    "Move",
                ),
                (k.display(&k.open), "▶️", "Open player"),
                (k.display(&k.search), "🔍", "Search"),
                (pair(&k.folder_next, &k.folder_prev), "📁", "Folder"),
                (
                    format!(
                        "{}-{}",
                        k.display(&k.quick_all),
                        k.display(&k.quick_instagram)
                    ),
                    "🏷️",
                    "Quick filter",
                ),
            ],
        )
    };

    let global_keys: Vec<(String, &str, &str)> = vec![
        (k.display(&k.toggle_keyhints), "❓", "Toggle keys"),
        (k.display(&k.quit), "🚪", "Quit"),
    ];

    let mut lines: Vec<Line> = Vec::new();

    for (key, icon, desc) in &keys {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {:<7} ", key),
                Style::default()
                    .fg(theme.yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("   ", Style::default().fg(theme.overlay)),
            Span::styled(format!("{} ", icon), Style::default()),
            Span::styled(*desc, Style::default().fg(theme.text)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "────── Global ──────",
        Style::default().fg(theme.blue).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    for (key, icon, desc) in &global_keys {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {:<7} ", key),
                Style::default()
                    .fg(theme.green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("   ", Style::default().fg(theme.overlay)),
            Span::styled(format!("{} ", icon), Style::default()),
            Span::styled(*desc, Style::default().fg(theme.text)),
        ]));
    }

    // Fit content exactly 📏
    let content_width = keys
        .iter()
        .chain(global_keys.iter())
        .map(|(k, _i, d)| 2 + k.width().max(7) + 3 + 3 + d.width())
        .max()
        .unwrap_or(20)
        .max(22);

    let max_height = f.area().height.saturating_sub(4);
    let popup_height = (lines.len() as u16 + 2).min(max_height);
    let popup_width = (content_width as u16 + 4).min(f.area().width.saturating_sub(2));

    let popup_x = f.area().width.saturating_sub(popup_width + 1);
    let popup_y = f.area().height.saturating_sub(popup_height + 2);
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);

    let popup = Paragraph::new(lines).alignment(Alignment::Left).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.blue))
            .title(format!(" {} ", title))
            .title_alignment(Alignment::Left)
            .style(Style::default().bg(Color::Reset)),
    );
    f.render_widget(popup, popup_area);
}
