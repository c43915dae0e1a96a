use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Instant;
use unicode_width::UnicodeWidthStr;

const SLIDE_MS: u128 = 300;

pub fn render(f: &mut Frame, app: &App) {
    let Some(ref toast) = app.toast else {
        return;
    };
    let theme = &app.theme;
    let screen = f.area();
    let now = Instant::now();

    // Auto-dismiss handled in App::on_tick()
    let message = &toast.message;
    let width = (message.width() as u16 + 6).min(screen.width.saturating_sub(4));
    let height = 3;
    let mut x = screen.width.saturating_sub(width + 1); // Top-right fixed

    let entrance_elapsed = now.duration_since(toast.start_time).as_millis();
    let time_remaining = toast.deadline.saturating_duration_since(now).as_millis();

    // Slide in from the right, slide back out before the deadline 🌊
    if entrance_elapsed < SLIDE_MS {
        let t = entrance_elapsed as f32 / SLIDE_MS as f32;
        let ease = 1.0 - (1.0 - t).powi(3); // Cubic Out
        x += (width as f32 * (1.0 - ease)) as u16;
    } else if time_remaining < SLIDE_MS {
        let t = (SLIDE_MS - time_remaining) as f32 / SLIDE_MS as f32;
        let ease = t.powi(3); // Cubic In
        x += (width as f32 * ease) as u16;
    }

    if x >= screen.width {
        return;
    }

    // Clip to screen bounds to avoid panic
    let visible_area = Rect::new(x, 1, width, height).intersection(screen);
    if visible_area.is_empty() {
        return;
    }
    f.render_widget(Clear, visible_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.blue))
        .style(Style::default().bg(Color::Reset));
    let style = Style::default().fg(theme.blue).add_modifier(Modifier::BOLD);

    let text = Paragraph::new(Line::from(vec![Span::styled(message.as_str(), style)]))
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(text, visible_area);
}
