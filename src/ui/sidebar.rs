//! Sidebar: the backend file listing plus the derived Examples group.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::{App, Focus};

use super::Palette;

pub fn render(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let focused = app.focus == Focus::Files;
    let border_color = if focused {
        palette.border_focused
    } else {
        palette.border
    };

    let block = Block::bordered()
        .title(" Files ")
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();

    if !app.browser.loaded {
        lines.push(Line::from(Span::styled(
            " Loading…",
            Style::default().fg(palette.dim).add_modifier(Modifier::ITALIC),
        )));
    } else if app.browser.is_empty() {
        lines.push(Line::from(Span::styled(
            " No files available",
            Style::default().fg(palette.dim),
        )));
    } else {
        for (index, name) in app.browser.files.iter().enumerate() {
            let is_cursor = focused && index == app.browser.selected;
            let is_current = app.session.current_file() == Some(name.as_str());

            let marker = if is_current { "● " } else { "  " };
            let mut style = Style::default().fg(palette.text);
            if is_current {
                style = style.fg(palette.accent);
            }
            if is_cursor {
                style = style.bg(palette.selection_bg).add_modifier(Modifier::BOLD);
            }
            lines.push(Line::from(Span::styled(
                format!("{}{}", marker, name),
                style,
            )));
        }

        if !app.browser.examples.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                " Examples",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            )));
            for (offset, example) in app.browser.examples.iter().enumerate() {
                let is_cursor =
                    focused && app.browser.files.len() + offset == app.browser.selected;
                let mut style = Style::default().fg(palette.dim);
                if is_cursor {
                    style = style
                        .fg(palette.text)
                        .bg(palette.selection_bg)
                        .add_modifier(Modifier::BOLD);
                }
                lines.push(Line::from(Span::styled(
                    format!("   {}", example.display),
                    style,
                )));
            }
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
