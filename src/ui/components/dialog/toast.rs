//! Toast notification overlay

use super::base::{render_dialog, DialogConfig, DialogPosition};
use crate::inquiry::NotificationKind;
use crate::state::Toast;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render a notification in the top-right corner
pub fn render_toast(frame: &mut Frame, toast: &Toast) {
    let notification = &toast.notification;
    let color = match notification.kind {
        NotificationKind::Success => Color::Green,
        NotificationKind::Failure => Color::Red,
    };

    let hint = vec![
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to dismiss"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: &notification.title,
            title_color: color,
            border_color: color,
            message: &notification.description,
            hint: Some(hint),
            max_width: 48,
            position: DialogPosition::TopRight,
        },
    );
}
