//! UI rendering for the workbench.
//!
//! Layout, top to bottom:
//! - title bar: app name, current file (with dirty marker), busy labels
//! - main area: file sidebar | editor | result panels
//! - status line: keybind hints
//!
//! Modal dialogs and the toast render last, over everything else.

mod dialogs;
mod editor_pane;
mod panels;
mod sidebar;
mod theme;
mod toast;

pub use theme::Palette;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{status_hints, App};

/// Render one frame.
pub fn render(frame: &mut Frame, app: &mut App) {
    let palette = Palette::for_theme(app.theme);
    let area = frame.area();

    frame.render_widget(
        ratatui::widgets::Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let [title_area, main_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    render_title_bar(frame, app, &palette, title_area);

    let [sidebar_area, editor_area, output_area] = Layout::horizontal([
        Constraint::Length(24),
        Constraint::Percentage(45),
        Constraint::Min(24),
    ])
    .areas(main_area);

    sidebar::render(frame, app, &palette, sidebar_area);
    editor_pane::render(frame, app, &palette, editor_area);
    panels::render(frame, app, &palette, output_area);

    render_status_line(frame, &palette, status_area);

    dialogs::render(frame, app, &palette, area);
    toast::render(frame, app, &palette, area);
}

fn render_title_bar(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let dirty_marker = if app.session.is_dirty() { " *" } else { "" };
    let mut spans = vec![
        Span::styled(
            " codebench ",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", Style::default().fg(palette.dim)),
        Span::styled(
            format!("{}{}", app.session.display_name(), dirty_marker),
            Style::default().fg(palette.text),
        ),
    ];

    let busy = app.ops.busy_kinds();
    if !busy.is_empty() {
        let labels: Vec<&str> = busy.iter().map(|kind| kind.label()).collect();
        spans.push(Span::styled(
            format!("  [{}…]", labels.join(", ")),
            Style::default().fg(palette.warning),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_status_line(frame: &mut Frame, palette: &Palette, area: Rect) {
    let line = Line::from(Span::styled(
        format!(" {}", status_hints()),
        Style::default().fg(palette.dim),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

/// A centered rect of at most `width` x `height` inside `area`.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::BackendClient;
    use crate::config::Settings;
    use ratatui::{backend::TestBackend, Terminal};

    fn test_app() -> App {
        App::new(BackendClient::new(), Settings::default(), None)
    }

    #[test]
    fn test_render_smoke() {
        let mut app = test_app();
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, &mut app)).unwrap();
    }

    #[test]
    fn test_render_tiny_terminal_does_not_panic() {
        let mut app = test_app();
        app.toast
            .notify("Code executed successfully", crate::state::Severity::Success);

        let backend = TestBackend::new(20, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, &mut app)).unwrap();

        // Shorter than the toast box itself.
        let backend = TestBackend::new(20, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, &mut app)).unwrap();
    }

    #[test]
    fn test_render_with_dialogs_and_toast() {
        let mut app = test_app();
        app.browser.set_files(vec!["a.py".into(), "examples/demo_plot.py".into()]);
        app.toast
            .notify("Code executed successfully", crate::state::Severity::Success);
        app.dialog = crate::app::Dialog::OpenFile;
        app.open_dialog.open();
        app.open_dialog.set_entries(vec!["a.py".into()]);

        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, &mut app)).unwrap();
    }

    #[test]
    fn test_centered_rect_fits_inside() {
        let area = Rect::new(0, 0, 100, 30);
        let rect = centered_rect(60, 10, area);
        assert_eq!(rect.width, 60);
        assert_eq!(rect.height, 10);
        assert!(rect.x + rect.width <= area.width);

        // Requested size larger than the area is clamped, not panicking.
        let rect = centered_rect(200, 50, area);
        assert_eq!(rect.width, 100);
        assert_eq!(rect.height, 30);
    }
}
