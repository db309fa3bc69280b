//! Modal dialogs: open-file picker, save-as prompt, confirmations.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

use crate::app::{App, Dialog};
use crate::state::browser::MAX_VISIBLE_ROWS;

use super::{centered_rect, Palette};

pub fn render(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    match app.dialog {
        Dialog::None => {}
        Dialog::OpenFile => render_open_dialog(frame, app, palette, area),
        Dialog::SaveAs => render_save_dialog(frame, app, palette, area),
        Dialog::ConfirmNew => render_confirm(
            frame,
            palette,
            area,
            " New File ",
            "Discard unsaved changes and start a new file?",
        ),
        Dialog::ConfirmQuit => render_confirm(
            frame,
            palette,
            area,
            " Quit ",
            "Quit with unsaved changes?",
        ),
    }
}

fn render_open_dialog(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let dialog = &app.open_dialog;
    // Query + list viewport + scroll markers + hint, plus borders.
    let height = (MAX_VISIBLE_ROWS as u16 + 6).min(area.height);
    let dialog_area = centered_rect(56, height, area);

    frame.render_widget(Clear, dialog_area);
    let block = Block::bordered()
        .title(" Open File ")
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.dialog_bg));
    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(vec![
        Span::styled(" > ", Style::default().fg(palette.accent)),
        Span::styled(dialog.query.clone(), Style::default().fg(palette.text)),
        Span::styled("█", Style::default().fg(palette.dim)),
    ]));
    lines.push(Line::from(""));

    if dialog.loading {
        lines.push(Line::from(Span::styled(
            " Loading…",
            Style::default().fg(palette.dim).add_modifier(Modifier::ITALIC),
        )));
    } else if let Some(error) = &dialog.error {
        lines.push(Line::from(Span::styled(
            format!(" Error: {}", error),
            Style::default().fg(palette.error),
        )));
    } else if dialog.filtered.is_empty() {
        let message = if dialog.query.is_empty() {
            " No files available".to_string()
        } else {
            format!(" No files matching \"{}\"", dialog.query)
        };
        lines.push(Line::from(Span::styled(
            message,
            Style::default().fg(palette.dim),
        )));
    } else {
        if dialog.has_more_above() {
            lines.push(Line::from(Span::styled(
                format!(" + {} more above", dialog.scroll_offset),
                Style::default().fg(palette.dim),
            )));
        }
        for (rel_idx, entry) in dialog.visible_entries().iter().enumerate() {
            let is_cursor = dialog.scroll_offset + rel_idx == dialog.selected_index;
            let (marker, style) = if is_cursor {
                (
                    " ▶ ",
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("   ", Style::default().fg(palette.text))
            };
            lines.push(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(entry.clone(), style),
            ]));
        }
        if dialog.has_more_below() {
            let remaining =
                dialog.filtered.len() - (dialog.scroll_offset + dialog.visible_entries().len());
            lines.push(Line::from(Span::styled(
                format!(" + {} more below", remaining),
                Style::default().fg(palette.dim),
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(hint_line(palette, &[("↑↓", "nav"), ("Enter", "open"), ("Esc", "cancel")]));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_save_dialog(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let dialog_area = centered_rect(48, 6, area);
    frame.render_widget(Clear, dialog_area);

    let block = Block::bordered()
        .title(" Save File ")
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.dialog_bg));
    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let lines = vec![
        Line::from(Span::styled(
            " File name:",
            Style::default().fg(palette.dim),
        )),
        Line::from(vec![
            Span::styled(" > ", Style::default().fg(palette.accent)),
            Span::styled(app.save_name.clone(), Style::default().fg(palette.text)),
            Span::styled("█", Style::default().fg(palette.dim)),
        ]),
        Line::from(""),
        hint_line(palette, &[("Enter", "save"), ("Esc", "cancel")]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_confirm(frame: &mut Frame, palette: &Palette, area: Rect, title: &str, message: &str) {
    let width = (message.chars().count() as u16 + 6).max(30);
    let dialog_area = centered_rect(width, 5, area);
    frame.render_widget(Clear, dialog_area);

    let block = Block::bordered()
        .title(title.to_string())
        .border_style(Style::default().fg(palette.warning))
        .style(Style::default().bg(palette.dialog_bg));
    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let lines = vec![
        Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(palette.text),
        )),
        Line::from(""),
        hint_line(palette, &[("y/Enter", "yes"), ("n/Esc", "no")]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn hint_line<'a>(palette: &Palette, hints: &[(&'a str, &'a str)]) -> Line<'a> {
    let mut spans = vec![Span::raw(" ")];
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(palette.dim)));
        }
        spans.push(Span::styled(*key, Style::default().fg(palette.accent)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(palette.dim),
        ));
    }
    Line::from(spans)
}
