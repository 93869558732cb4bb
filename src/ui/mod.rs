//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod not_found;
mod portfolio;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    match &app.state.current_view {
        View::Contact => forms::draw_inquiry_form(frame, main_area, app),
        View::Portfolio => portfolio::draw_list(frame, main_area, app),
        View::ProjectDetail => portfolio::draw_detail(frame, main_area, app),
        View::NotFound => not_found::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Toasts float above everything else
    if let Some(toast) = app.state.toasts.latest() {
        components::render_toast(frame, toast);
    }
}
