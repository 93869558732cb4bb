//! Application state and core logic

use crate::config::AppConfig;
use crate::inquiry::transport::{
    build_transport, SubmissionReceipt, SubmissionTransport, TransportError,
};
use crate::inquiry::{
    ChannelSink, FieldKind, InquiryField, Notification, PendingSubmission, SubmitError,
    SubmitOutcome,
};
use crate::portfolio::ProjectCatalog;
use crate::state::{AppState, Form, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// How long the not-found view waits before returning to the form
pub const NOT_FOUND_REDIRECT: Duration = Duration::from_secs(10);

/// A transport call that has resolved, waiting to be applied to the form
#[derive(Debug)]
pub struct Completion {
    pending: PendingSubmission,
    result: Result<SubmissionReceipt, TransportError>,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Portfolio case studies
    pub catalog: ProjectCatalog,
    /// Where inquiries are delivered
    transport: Arc<dyn SubmissionTransport>,
    /// Notification sink handed to the form
    sink: ChannelSink,
    notifications: mpsc::UnboundedReceiver<Notification>,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions: mpsc::UnboundedReceiver<Completion>,
    /// When the not-found view was entered
    not_found_since: Option<Instant>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance from configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        let catalog = match &config.portfolio_path {
            Some(path) => ProjectCatalog::from_path(path)?,
            None => ProjectCatalog::builtin()?,
        };
        let transport = build_transport(config);

        Ok(Self::with_parts(
            AppState::new(config.toast_duration()),
            catalog,
            transport,
        ))
    }

    pub fn with_parts(
        state: AppState,
        catalog: ProjectCatalog,
        transport: Arc<dyn SubmissionTransport>,
    ) -> Self {
        let (sink, notifications) = ChannelSink::new();
        let (completions_tx, completions) = mpsc::unbounded_channel();

        Self {
            state,
            catalog,
            transport,
            sink,
            notifications,
            completions_tx,
            completions,
            not_found_since: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Apply background results and expire toasts
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    fn tick_at(&mut self, now: Instant) {
        while let Ok(completion) = self.completions.try_recv() {
            self.finish_submission(completion);
        }

        while let Ok(notification) = self.notifications.try_recv() {
            self.state.toasts.push(notification, now);
        }
        self.state.toasts.prune(now);

        if let Some(since) = self.not_found_since {
            if now.duration_since(since) >= NOT_FOUND_REDIRECT {
                tracing::debug!("Redirecting from not-found view");
                self.go_home();
            }
        }
    }

    /// Start submitting the inquiry form.
    ///
    /// The transport runs on its own task; input keeps flowing while it does.
    pub fn submit_inquiry(&mut self) {
        let pending = match self.state.inquiry.form.begin_submission() {
            Ok(pending) => pending,
            Err(SubmitError::InFlight) => return,
            Err(SubmitError::Invalid(errors)) => {
                let issues: Vec<_> = errors.issues().iter().map(|i| i.to_string()).collect();
                self.state.status_message = Some(format!("Please check: {}", issues.join(", ")));

                let fields: Vec<_> = errors.fields().collect();
                if let Some(first) = fields.first() {
                    if let Some(index) = InquiryField::ALL.iter().position(|f| f == first) {
                        self.state.inquiry.set_active_field(index);
                    }
                }
                self.state.inquiry.invalid_fields = fields;
                return;
            }
        };

        self.state.inquiry.invalid_fields.clear();
        self.state.status_message = Some("Submitting inquiry...".to_string());

        let transport = Arc::clone(&self.transport);
        let record = pending.record().clone();
        let tx = self.completions_tx.clone();

        tokio::spawn(async move {
            let call = tokio::spawn(async move { transport.submit(&record).await });
            let result = match call.await {
                Ok(result) => result,
                Err(err) => Err(TransportError::Aborted(err.to_string())),
            };
            if tx.send(Completion { pending, result }).is_err() {
                tracing::warn!("Submission finished after the app shut down");
            }
        });
    }

    fn finish_submission(&mut self, completion: Completion) {
        let outcome = self.state.inquiry.form.complete_submission(
            completion.pending,
            completion.result,
            &self.sink,
        );
        tracing::debug!(delivered = outcome.is_delivered(), "Submission applied to form");

        self.state.status_message = Some(match outcome {
            SubmitOutcome::Delivered(receipt) => {
                self.state.inquiry.set_active_field(0);
                format!("Reference {}", receipt.reference)
            }
            SubmitOutcome::Failed(err) => err.to_string(),
        });
    }

    /// Show a case study, or the not-found view when the id matches nothing
    pub fn open_project(&mut self, id: &str) {
        match self.catalog.lookup(id) {
            Ok(project) => {
                self.state.selected_project_id = Some(project.id.clone());
                self.state.missing_project_id = None;
                self.state.navigate(View::ProjectDetail);
            }
            Err(err) => {
                tracing::info!("{err}");
                self.state.selected_project_id = None;
                self.state.missing_project_id = Some(id.to_string());
                self.state.navigate(View::NotFound);
                self.not_found_since = Some(Instant::now());
            }
        }
    }

    fn go_home(&mut self) {
        self.not_found_since = None;
        self.state.view_history.clear();
        self.state.current_view = View::Contact;
        self.state.scroll_offset = 0;
    }

    fn leave_view(&mut self) {
        self.not_found_since = None;
        if !self.state.go_back() {
            self.state.navigate(View::Contact);
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.quit = true;
                return;
            }
            KeyCode::F(1) => {
                self.not_found_since = None;
                self.state.navigate(View::Contact);
                return;
            }
            KeyCode::F(2) => {
                self.not_found_since = None;
                self.state.navigate(View::Portfolio);
                return;
            }
            KeyCode::Esc => {
                if self.state.toasts.dismiss().is_none() {
                    self.leave_view();
                }
                return;
            }
            _ => {}
        }

        match self.state.current_view {
            View::Contact => self.handle_contact_key(key),
            View::Portfolio => self.handle_portfolio_key(key),
            View::ProjectDetail => self.handle_detail_key(key),
            View::NotFound => self.handle_not_found_key(key),
        }
    }

    fn handle_contact_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let on_button = self.state.inquiry.is_submit_button_active();

        match key.code {
            KeyCode::Char('s') if ctrl => self.submit_inquiry(),
            KeyCode::Enter if on_button => self.submit_inquiry(),
            code => {
                let form = &mut self.state.inquiry;
                match code {
                    KeyCode::Char('u') if ctrl => form.clear_active(),
                    KeyCode::Tab | KeyCode::Down => form.next_field(),
                    KeyCode::BackTab | KeyCode::Up => form.prev_field(),
                    KeyCode::Left => form.cycle_active_choice(false),
                    KeyCode::Right => form.cycle_active_choice(true),
                    KeyCode::Enter => {
                        if form.active().is_some_and(|f| f.kind() == FieldKind::Multiline) {
                            form.input_newline();
                        } else {
                            form.next_field();
                        }
                    }
                    KeyCode::Backspace => form.backspace(),
                    KeyCode::Char(c) if !ctrl => form.input_char(c),
                    _ => {}
                }
            }
        }
    }

    fn handle_portfolio_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.state.move_selection_down(self.catalog.len());
            }
            KeyCode::Up | KeyCode::Char('k') => self.state.move_selection_up(),
            KeyCode::Enter => {
                if let Some(id) = self
                    .catalog
                    .projects()
                    .get(self.state.selected_index)
                    .map(|p| p.id.clone())
                {
                    self.open_project(&id);
                }
            }
            KeyCode::Char('q') => self.leave_view(),
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.state.scroll_down(),
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_up(),
            // "Start your project" call to action
            KeyCode::Char('i') => self.state.navigate(View::Contact),
            KeyCode::Char('q') => self.leave_view(),
            _ => {}
        }
    }

    fn handle_not_found_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Char('h')) {
            self.go_home();
        }
    }
}
