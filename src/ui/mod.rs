pub mod layout;
pub mod theme;
pub mod utils;
pub mod widgets;

pub use theme::Theme;

use crate::app::App;
use ratatui::Frame;

pub fn ui(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // 1. Layout
    let main_layout = layout::get_main_layout(area);
    let gallery = layout::get_gallery_layout(main_layout.body_area);

    // 2. Folders (Left)
    app.folder_areas.clear();
    if let Some(sidebar) = gallery.sidebar {
        widgets::sidebar::render(f, sidebar, app);
    }

    // 3. Search + quick filters
    widgets::toolbar::render(f, gallery.toolbar, app);

    // 4. Tiles
    widgets::grid::render(f, gallery.grid, app);

    // 5. Footer Hint (if no popup active)
    if !app.show_keyhints {
        use ratatui::layout::Alignment;
        use ratatui::style::{Modifier, Style};
        use ratatui::text::{Line, Span};
        use ratatui::widgets::Paragraph;

        let theme = &app.theme;
        let status = format!(
            " {} of {} clips · {}",
            app.visible.len(),
            app.catalog.len(),
            app.view.active_folder
        );
        let hint = Line::from(vec![
            Span::styled(
                " ? ",
                Style::default()
                    .fg(theme.overlay)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("keys", Style::default().fg(theme.overlay)),
        ]);
        f.render_widget(
            Paragraph::new(Span::styled(status, Style::default().fg(theme.overlay))),
            main_layout.footer_area,
        );
        f.render_widget(
            Paragraph::new(hint).alignment(Alignment::Right),
            main_layout.footer_area,
        );
    }

    // 6. Popups (Overlays)
    widgets::popups::render(f, app);
}
