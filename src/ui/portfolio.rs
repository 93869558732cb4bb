//! Portfolio list and case study views

use crate::app::App;
use crate::portfolio::Project;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Draw the portfolio list
pub fn draw_list(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Portfolio ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if app.catalog.is_empty() {
        let message = Paragraph::new("No case studies available.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(message, area);
        return;
    }

    let items: Vec<ListItem> = app
        .catalog
        .projects()
        .iter()
        .enumerate()
        .map(|(idx, project)| {
            let is_selected = idx == app.state.selected_index;
            let prefix = if is_selected { "▸ " } else { "  " };
            let style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            let title = Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(
                    &project.title,
                    style.fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(&project.sub_title, Style::default().fg(Color::Cyan)),
            ]);
            let meta = Line::from(vec![
                Span::raw("    "),
                Span::styled(project.tags.join(" · "), Style::default().fg(Color::DarkGray)),
            ]);

            ListItem::new(vec![title, meta])
        })
        .collect();

    let list = List::new(items).block(block);
    let mut list_state = ListState::default().with_selected(Some(app.state.selected_index));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Draw the selected case study
pub fn draw_detail(frame: &mut Frame, area: Rect, app: &App) {
    let project = app
        .state
        .selected_project_id
        .as_deref()
        .and_then(|id| app.catalog.find_project(id));

    let Some(project) = project else {
        let message = Paragraph::new("Case study not found")
            .style(Style::default().fg(Color::Red))
            .block(
                Block::default()
                    .title(" Case Study ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        frame.render_widget(message, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    let lines = detail_lines(project);
    let scroll = clamp_scroll(app.state.scroll_offset, lines.len());
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" {} ", project.title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, chunks[0]);

    let cta = Paragraph::new(Line::from(vec![
        Span::styled(
            " i ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " Start your project with us",
            Style::default().fg(Color::Cyan),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(cta, chunks[1]);
}

/// Keep the offset on a content line and inside `u16`
fn clamp_scroll(offset: usize, line_count: usize) -> u16 {
    let last = line_count.saturating_sub(1).min(u16::MAX as usize);
    offset.min(last) as u16
}

fn section(title: &str) -> Line<'_> {
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

fn fact<'a>(label: &'a str, value: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label:<10}"), Style::default().fg(Color::DarkGray)),
        Span::raw(value),
    ])
}

fn detail_lines(project: &Project) -> Vec<Line<'_>> {
    let mut lines = vec![
        Line::from(Span::styled(
            project.sub_title.to_uppercase(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(project.description.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            project.tags.join(" · "),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
        fact("Cost", &project.cost),
        fact("Timeline", &project.timeline),
        fact("Quantity", &project.quantity),
    ];

    if let Some(client) = &project.client {
        lines.push(fact("Client", client));
    }
    if let Some(outcome) = &project.outcome {
        lines.push(fact("Outcome", outcome));
    }
    if let Some(pieces) = &project.pieces_created {
        lines.push(fact("Pieces", pieces));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "─".repeat(40),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));
    lines.push(section("The Challenge"));
    lines.push(Line::from(project.challenge.plain_description()));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("“{}”", project.challenge.quote.quote),
        Style::default().add_modifier(Modifier::ITALIC),
    )));
    lines.push(Line::from(Span::styled(
        format!("  {}", project.challenge.quote.role),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));
    lines.push(section("Client Testimonial"));
    lines.push(Line::from(Span::styled(
        format!("“{}”", project.quote.quote),
        Style::default().add_modifier(Modifier::ITALIC),
    )));
    lines.push(Line::from(Span::styled(
        format!("  {}, {}", project.quote.role, project.quote.company),
        Style::default().fg(Color::DarkGray),
    )));

    lines
}
