//! Editor pane: the textarea plus a lint-flag gutter.
//!
//! The gutter is a one-column strip to the left of the textarea. Its
//! rows must track the textarea's scroll position, which the widget
//! keeps private, so the editor wrapper mirrors the scroll algorithm
//! and this module asks it for the viewport top row each frame.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::{App, Focus};

use super::Palette;

pub fn render(frame: &mut Frame, app: &mut App, palette: &Palette, area: Rect) {
    let focused = app.focus == Focus::Editor && app.dialog == crate::app::Dialog::None;
    let border_color = if focused {
        palette.border_focused
    } else {
        palette.border
    };

    let title = format!(
        " {}{} ",
        app.session.display_name(),
        if app.session.is_dirty() { " *" } else { "" }
    );
    let block = Block::bordered()
        .title(title)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width < 2 || inner.height == 0 {
        return;
    }

    let [gutter_area, text_area] =
        Layout::horizontal([Constraint::Length(1), Constraint::Min(1)]).areas(inner);

    let top_row = app.editor.update_viewport(text_area.height as usize);
    render_flag_gutter(frame, app, palette, gutter_area, top_row);

    frame.render_widget(app.editor.inner(), text_area);
}

fn render_flag_gutter(frame: &mut Frame, app: &App, palette: &Palette, area: Rect, top_row: usize) {
    if app.editor.flagged_lines().is_empty() {
        return;
    }

    let lines: Vec<Line> = (0..area.height as usize)
        .map(|row| {
            // Gutter rows are 1-based lines, offset by the viewport.
            let line_number = top_row + row + 1;
            if line_number <= app.editor.line_count() && app.editor.is_flagged(line_number) {
                Line::from(Span::styled("▸", Style::default().fg(palette.warning)))
            } else {
                Line::from(" ")
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}
