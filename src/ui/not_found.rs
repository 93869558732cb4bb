//! Not-found view for unknown case study ids

use crate::app::{App, NOT_FOUND_REDIRECT};
use crate::ui::components::{render_dialog, DialogConfig, DialogPosition};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders},
    Frame,
};

/// Draw the 404 dialog over an empty content block
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
        area,
    );

    let message = not_found_message(app.state.missing_project_id.as_deref());
    let hint = vec![
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to go home"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "404 | Page Not Found",
            title_color: Color::Yellow,
            border_color: Color::Yellow,
            message: &message,
            hint: Some(hint),
            max_width: 60,
            position: DialogPosition::Center,
        },
    );
}

fn not_found_message(id: Option<&str>) -> String {
    let subject = match id {
        Some(id) => format!("No case study matches {id:?}."),
        None => "The page you are looking for does not exist.".to_string(),
    };
    format!(
        "{subject}\nReturning to the inquiry form in {} seconds.",
        NOT_FOUND_REDIRECT.as_secs()
    )
}
