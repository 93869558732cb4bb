//! Layout components (header tabs, status bar)

use crate::app::App;
use crate::inquiry::FormPhase;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Header tabs and the function keys that select them
const TABS: &[(&str, &str)] = &[("F1", "Inquiry"), ("F2", "Portfolio")];

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the brand and view tabs
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        " DE-SIGN PLUS ",
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    for (idx, (key, label)) in TABS.iter().enumerate() {
        let is_selected = match idx {
            0 => matches!(app.state.current_view, View::Contact),
            _ => matches!(
                app.state.current_view,
                View::Portfolio | View::ProjectDetail
            ),
        };

        let style = if is_selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        spans.push(Span::raw("  "));
        spans.push(Span::styled(format!("{key} {label}"), style));
    }

    spans.push(Span::styled(
        format!("  │ {}", app.state.current_view.title()),
        Style::default().fg(Color::Gray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Submission indicator
    let indicator = match app.state.inquiry.form.phase() {
        FormPhase::Submitting => Span::styled(" ● ", Style::default().fg(Color::Yellow)),
        FormPhase::Idle => Span::styled(" ○ ", Style::default().fg(Color::Green)),
    };
    spans.push(indicator);

    // View-specific hints
    let hints = get_view_hints(&app.state.current_view);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::White)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> &'static str {
    match view {
        View::Contact => "Tab:next  ←/→:choose  ^S:submit  ^U:clear",
        View::Portfolio => "j/k:nav  Enter:view  Esc:back",
        View::ProjectDetail => "j/k:scroll  i:start inquiry  Esc:back",
        View::NotFound => "Enter:home  Esc:back",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_reserves_header_and_status() {
        let (header, content, status) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height, 1);
        assert_eq!(status.height, 1);
        assert_eq!(content.height, 22);
        assert_eq!(status.y, 23);
    }

    #[test]
    fn test_every_view_has_hints() {
        for view in [
            View::Contact,
            View::Portfolio,
            View::ProjectDetail,
            View::NotFound,
        ] {
            assert!(!get_view_hints(&view).is_empty());
        }
    }
}
