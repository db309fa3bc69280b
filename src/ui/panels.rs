//! Result panels: Output, Errors, and Visuals tabs.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Focus};
use crate::state::output::FigureEntry;
use crate::state::Panel;

use super::Palette;

const PANELS: [Panel; 3] = [Panel::Output, Panel::Errors, Panel::Visuals];

pub fn render(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let focused = app.focus == Focus::Output;
    let border_color = if focused {
        palette.border_focused
    } else {
        palette.border
    };

    let block = Block::bordered()
        .title(" Results ")
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 {
        return;
    }

    let [tabs_area, body_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).areas(inner);

    render_tabs(frame, app, palette, tabs_area);

    match app.output.active {
        Panel::Visuals => render_visuals(frame, app, palette, body_area),
        _ => {
            let text = app.output.active_text().unwrap_or("");
            let body = Paragraph::new(text)
                .style(Style::default().fg(palette.text))
                .wrap(Wrap { trim: false });
            frame.render_widget(body, body_area);
        }
    }
}

fn render_tabs(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, panel) in PANELS.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(palette.dim)));
        }
        let label = match panel {
            Panel::Visuals if !app.output.figures.is_empty() => {
                format!("{} ({})", panel.title(), app.output.figures.len())
            }
            _ => panel.title().to_string(),
        };
        let style = if panel == app.output.active {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(palette.dim)
        };
        spans.push(Span::styled(label, style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_visuals(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    if app.output.figures.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No visualizations",
            Style::default().fg(palette.dim),
        ));
        frame.render_widget(empty, area);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for figure in &app.output.figures {
        lines.push(figure_line(figure, palette));
        if let Some(path) = &figure.path {
            lines.push(Line::from(Span::styled(
                format!("    saved to {}", path.display()),
                Style::default().fg(palette.dim),
            )));
        }
        lines.push(Line::from(""));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn figure_line<'a>(figure: &FigureEntry, palette: &Palette) -> Line<'a> {
    let description = match figure.dimensions {
        Some((w, h)) => format!(
            "Figure {}: {}x{} px, {}",
            figure.index + 1,
            w,
            h,
            format_bytes(figure.byte_size)
        ),
        None => format!("Figure {}: could not be decoded", figure.index + 1),
    };
    let color = if figure.dimensions.is_some() {
        palette.text
    } else {
        palette.error
    };
    Line::from(vec![
        Span::styled("  ▦ ", Style::default().fg(palette.accent)),
        Span::styled(description, Style::default().fg(color)),
    ])
}

fn format_bytes(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.0 MB");
    }

    #[test]
    fn test_figure_line_describes_decoded_figure() {
        let palette = Palette::dark();
        let figure = FigureEntry {
            index: 0,
            dimensions: Some((640, 480)),
            byte_size: 2048,
            path: None,
            bytes: Vec::new(),
        };
        let line = figure_line(&figure, &palette);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("Figure 1: 640x480 px, 2.0 KB"));
    }

    #[test]
    fn test_figure_line_marks_undecodable() {
        let palette = Palette::dark();
        let figure = FigureEntry {
            index: 2,
            dimensions: None,
            byte_size: 0,
            path: None,
            bytes: Vec::new(),
        };
        let line = figure_line(&figure, &palette);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("Figure 3: could not be decoded"));
    }
}
