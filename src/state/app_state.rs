//! Application state definitions

use super::forms::InquiryFormState;
use super::toast::ToastQueue;
use std::time::Duration;

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Contact,
    Portfolio,
    ProjectDetail,
    NotFound,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Contact => "Project Inquiry",
            Self::Portfolio => "Portfolio",
            Self::ProjectDetail => "Case Study",
            Self::NotFound => "Not Found",
        }
    }
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_history: Vec<View>,

    // Inquiry form
    pub inquiry: InquiryFormState,

    // Portfolio
    pub selected_index: usize,
    pub selected_project_id: Option<String>,
    /// Id that matched nothing, shown on the not-found view
    pub missing_project_id: Option<String>,

    // UI state
    pub scroll_offset: usize,
    pub toasts: ToastQueue,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(notification_duration: Duration) -> Self {
        Self {
            inquiry: InquiryFormState::new(notification_duration),
            ..Default::default()
        }
    }

    /// Switch view, remembering where we came from.
    ///
    /// Revisiting a view already in the history unwinds back to it, so the
    /// history never holds a view twice. The not-found view is never recorded.
    pub fn navigate(&mut self, view: View) {
        if self.current_view != view {
            if let Some(pos) = self.view_history.iter().position(|v| *v == view) {
                self.view_history.truncate(pos);
            } else if self.current_view != View::NotFound {
                self.view_history.push(self.current_view.clone());
            }
            self.current_view = view;
        }
        self.scroll_offset = 0;
    }

    /// Return to the previous view. Returns false at the root.
    pub fn go_back(&mut self) -> bool {
        match self.view_history.pop() {
            Some(view) => {
                self.current_view = view;
                self.scroll_offset = 0;
                true
            }
            None => false,
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Scroll down
    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    /// Scroll up
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }
}
