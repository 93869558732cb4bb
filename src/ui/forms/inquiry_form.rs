//! Project inquiry form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::inquiry::InquiryField;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows of the form; paired fields share a row
const ROWS: &[&[InquiryField]] = &[
    &[InquiryField::FirstName, InquiryField::LastName],
    &[InquiryField::Company, InquiryField::Position],
    &[InquiryField::Email, InquiryField::Phone],
    &[InquiryField::Service],
    &[InquiryField::Budget],
    &[InquiryField::Timeline, InquiryField::Location],
    &[InquiryField::Objectives],
    &[InquiryField::Inspiration],
];

/// Draw the inquiry form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Project Inquiry Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Subtitle
            Constraint::Length(3),             // Name
            Constraint::Length(3),             // Company
            Constraint::Length(3),             // Contact
            Constraint::Length(3),             // Service
            Constraint::Length(3),             // Budget
            Constraint::Length(3),             // Timeline / location
            Constraint::Min(4),                // Objectives
            Constraint::Min(4),                // Inspiration
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // Confidentiality note
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "All information provided is strictly confidential",
            Style::default().fg(Color::DarkGray),
        ))),
        chunks[0],
    );

    let state = &app.state.inquiry;
    let active = state.active();

    for (row, fields) in ROWS.iter().enumerate() {
        let row_area = chunks[row + 1];
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, fields.len() as u32); fields.len()])
            .split(row_area);

        for (cell, field) in cells.iter().zip(fields.iter()) {
            draw_field(
                frame,
                *cell,
                *field,
                state.form.record().get(*field),
                active == Some(*field),
                state.is_invalid(*field),
            );
        }
    }

    let submitting = state.form.is_submitting();
    let label = if submitting {
        "Submitting..."
    } else {
        "Submit Confidential Inquiry"
    };
    render_button(
        frame,
        chunks[9],
        label,
        state.is_submit_button_active(),
        !submitting,
    );

    frame.render_widget(
        Paragraph::new(Span::styled(
            "We will never share your details without explicit consent.",
            Style::default().fg(Color::DarkGray),
        )),
        chunks[10],
    );
}
