use crate::app::App;
use crate::embed::MountPoint;
use crate::thumbs::preview::{render_half_blocks, PreviewState};
use crate::ui::utils::{fit_aspect, truncate};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const CLOSE_LABEL: &str = " ✕ ";

/// Player overlay 🎬: preview art sized to the configured aspect ratio,
/// the live embed descriptor and a clickable close button.
pub fn render(f: &mut Frame, app: &mut App) {
    let Some(item) = app.modal.focused().cloned() else {
        return;
    };
    let screen = f.area();
    let area = Rect::new(
        screen.x + screen.width / 10,
        screen.y + screen.height / 10,
        screen.width - screen.width / 5,
        screen.height - screen.height / 5,
    );
    if area.width < 10 || area.height < 6 {
        render_compact(f, app, &item, screen);
        return;
    }

    let theme = &app.theme;
    let provider = item.provider();
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.blue))
        .title(Span::styled(
            format!(" {} ", truncate(item.display_title(), area.width as usize / 2)),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Left)
        .style(Style::default().bg(Color::Reset));
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Close button sits on the top border, right corner
    let close_w = unicode_width::UnicodeWidthStr::width(CLOSE_LABEL) as u16;
    let close_area = Rect::new(area.x + area.width - close_w - 2, area.y, close_w, 1);
    f.render_widget(
        Paragraph::new(Span::styled(
            CLOSE_LABEL,
            Style::default().fg(theme.red).add_modifier(Modifier::BOLD),
        )),
        close_area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(5)])
        .split(inner);

    // Preview
    let preview_area = fit_aspect(chunks[0], app.config.modal_aspect_ratio.ratio());
    match app.modal_preview() {
        Some(PreviewState::Loaded(img)) => {
            let lines = render_half_blocks(&img, preview_area.width, preview_area.height);
            f.render_widget(Paragraph::new(lines), preview_area);
        }
        Some(PreviewState::Loading) => {
            let p = Paragraph::new("\n\nLoading...")
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.yellow));
            f.render_widget(p, preview_area);
        }
        Some(PreviewState::Failed) | None => {
            let p = Paragraph::new(format!("\n\n▶\n{}", provider.label()))
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(theme.surface)),
                )
                .style(Style::default().fg(theme.overlay));
            f.render_widget(p, preview_area);
        }
    }

    // Embed details
    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("{} ", provider.label()),
            Style::default()
                .fg(theme.provider(provider))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("· {}", item.folder), Style::default().fg(theme.overlay)),
    ])];
    match app.host.content(&MountPoint::Modal) {
        Some(content) => {
            let mode = if content.autoplay && provider == crate::catalog::Provider::Youtube {
                "autoplay · muted"
            } else if content.autoplay {
                "autoplay"
            } else {
                "click to play"
            };
            lines.push(Line::from(vec![
                Span::styled("▶ ", Style::default().fg(theme.green)),
                Span::styled(content.title, Style::default().fg(theme.text)),
                Span::styled(format!("  ({})", mode), Style::default().fg(theme.overlay)),
            ]));
            lines.push(Line::from(Span::styled(
                content.src.clone(),
                Style::default().fg(theme.cyan),
            )));
        }
        None => lines.push(Line::from(Span::styled(
            "embed not mounted",
            Style::default().fg(theme.red),
        ))),
    }
    lines.push(Line::from(vec![
        Span::styled(
            app.keys.display(&app.keys.open_in_browser),
            Style::default().fg(theme.yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" open in browser  ", Style::default().fg(theme.overlay)),
        Span::styled(
            app.keys.display(&app.keys.close),
            Style::default().fg(theme.yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" close", Style::default().fg(theme.overlay)),
    ]));
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chunks[1],
    );

    app.modal_area = Some(area);
    app.close_button_area = Some(close_area);
}

/// Too small for the overlay: one status line over the whole screen, which
/// also swallows clicks so nothing underneath reacts.
fn render_compact(f: &mut Frame, app: &mut App, item: &crate::catalog::MediaItem, screen: Rect) {
    let theme = &app.theme;
    let provider = item.provider();
    f.render_widget(Clear, screen);
    let line = Line::from(vec![
        Span::styled(
            format!("▶ {} ", provider.label()),
            Style::default()
                .fg(theme.provider(provider))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{} close", app.keys.display(&app.keys.close)),
            Style::default().fg(theme.overlay),
        ),
    ]);
    f.render_widget(
        Paragraph::new(line),
        Rect::new(screen.x, screen.y, screen.width, screen.height.min(1)),
    );

    app.modal_area = Some(screen);
    app.close_button_area = None;
}

