//! Field rendering utilities for forms

use crate::inquiry::{FieldKind, InquiryField};
use crate::state::{display_value, label, placeholder};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw one inquiry field
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: InquiryField,
    value: &str,
    is_active: bool,
    is_invalid: bool,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let border_style = if is_invalid {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display = display_value(field, value);
    let cursor = if is_active { "▌" } else { "" };
    let is_choice = field.kind() == FieldKind::Choice;

    let content = if display.is_empty() && !is_active {
        Paragraph::new(Span::styled(
            placeholder(field),
            Style::default().fg(Color::DarkGray),
        ))
    } else if field.kind() == FieldKind::Multiline {
        let mut lines: Vec<Line> = display
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        // `lines()` drops a trailing empty line the cursor should sit on
        if display.ends_with('\n') || lines.is_empty() {
            lines.push(Line::from(""));
        }
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            }
        }
        Paragraph::new(lines)
    } else if is_choice && is_active {
        let shown = if display.is_empty() {
            placeholder(field).to_string()
        } else {
            display
        };
        Paragraph::new(Line::from(vec![
            Span::styled("◀ ", Style::default().fg(Color::Cyan)),
            Span::styled(shown, style),
            Span::styled(" ▶", Style::default().fg(Color::Cyan)),
        ]))
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", label(field)))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
