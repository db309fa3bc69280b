//! Toast overlay, anchored to the bottom-right corner.

use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::state::{Severity, ToastPhase};

use super::Palette;

pub fn render(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let Some((toast, phase)) = app.toast.current(Instant::now()) else {
        return;
    };

    // Too small to hold the bordered box; skip rather than draw outside
    // the buffer.
    if area.height < 3 || area.width < 4 {
        return;
    }

    let text = format!(" {} {} ", toast.severity.icon(), toast.message);
    let width = (text.chars().count() as u16 + 2).min(area.width);
    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + area.height.saturating_sub(4),
        width,
        height: 3,
    };

    frame.render_widget(Clear, toast_area);

    let color = match toast.severity {
        Severity::Success => palette.success,
        Severity::Error => palette.error,
        Severity::Warning => palette.warning,
        Severity::Info => palette.info,
    };
    let mut style = Style::default().fg(color);
    if phase == ToastPhase::Leaving {
        style = style.add_modifier(Modifier::DIM);
    }

    let block = Block::bordered()
        .border_style(style)
        .style(Style::default().bg(palette.dialog_bg));
    let inner = block.inner(toast_area);
    frame.render_widget(block, toast_area);
    frame.render_widget(Paragraph::new(Line::from(Span::styled(text, style))), inner);
}
