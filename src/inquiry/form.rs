//! Inquiry form state machine
//!
//! The form is either `Idle` or `Submitting`. Submission is split in two so
//! the caller can keep handling input while the transport call is in flight:
//! [`InquiryForm::begin_submission`] flips to `Submitting` synchronously and
//! hands out a [`PendingSubmission`]; [`InquiryForm::complete_submission`]
//! consumes it with the transport result and always lands back on `Idle`.

use super::notify::{Notification, NotificationSink};
use super::record::{InquiryField, InquiryRecord, ValidationErrors};
use super::transport::{SubmissionReceipt, SubmissionTransport, TransportError};
use std::time::{Duration, Instant};
use thiserror::Error;

/// How long submission notifications stay visible by default
pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_millis(5000);

const SUCCESS_TITLE: &str = "Inquiry Submitted Successfully!";
const SUCCESS_DESCRIPTION: &str = "Thank you for your inquiry. We will respond within 24 hours.";
const FAILURE_TITLE: &str = "Submission Failed";
const FAILURE_DESCRIPTION: &str = "There was an error submitting your form. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
}

/// Why a submission did not start. Neither case changes the form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("a submission is already in progress")]
    InFlight,

    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}

/// How a finished submission turned out
#[derive(Debug)]
pub enum SubmitOutcome {
    Delivered(SubmissionReceipt),
    Failed(TransportError),
}

impl SubmitOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered(_))
    }
}

/// Token for a submission in flight. Only [`InquiryForm::begin_submission`]
/// creates one, and [`InquiryForm::complete_submission`] consumes it.
#[derive(Debug)]
pub struct PendingSubmission {
    record: InquiryRecord,
    started: Instant,
}

impl PendingSubmission {
    /// The record as it was when the submission started
    pub fn record(&self) -> &InquiryRecord {
        &self.record
    }
}

#[derive(Debug, Clone)]
pub struct InquiryForm {
    record: InquiryRecord,
    phase: FormPhase,
    notification_duration: Duration,
}

impl InquiryForm {
    pub fn new() -> Self {
        Self::with_notification_duration(DEFAULT_NOTIFICATION_DURATION)
    }

    pub fn with_notification_duration(notification_duration: Duration) -> Self {
        Self {
            record: InquiryRecord::default(),
            phase: FormPhase::Idle,
            notification_duration,
        }
    }

    pub fn record(&self) -> &InquiryRecord {
        &self.record
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Replace one field. Allowed at any time, including mid-submission.
    pub fn update_field(&mut self, field: InquiryField, value: impl Into<String>) {
        self.record.set(field, value.into());
    }

    /// Start a submission if none is running and the record is complete
    pub fn begin_submission(&mut self) -> Result<PendingSubmission, SubmitError> {
        if self.is_submitting() {
            tracing::debug!("Ignoring submit while a submission is in flight");
            return Err(SubmitError::InFlight);
        }

        self.record.validate()?;

        self.phase = FormPhase::Submitting;
        tracing::debug!("Inquiry submission started");

        Ok(PendingSubmission {
            record: self.record.clone(),
            started: Instant::now(),
        })
    }

    /// Apply the transport result, notify the visitor and return to `Idle`.
    ///
    /// A delivered inquiry clears the form. A failed one leaves the record as
    /// it is so nothing typed is lost.
    pub fn complete_submission(
        &mut self,
        pending: PendingSubmission,
        result: Result<SubmissionReceipt, TransportError>,
        sink: &dyn NotificationSink,
    ) -> SubmitOutcome {
        let elapsed_ms = pending.started.elapsed().as_millis() as u64;
        self.phase = FormPhase::Idle;

        match result {
            Ok(receipt) => {
                tracing::info!(
                    reference = %receipt.reference,
                    elapsed_ms,
                    "Inquiry delivered"
                );
                self.record = InquiryRecord::default();
                sink.notify(Notification::success(
                    SUCCESS_TITLE,
                    SUCCESS_DESCRIPTION,
                    self.notification_duration,
                ));
                SubmitOutcome::Delivered(receipt)
            }
            Err(err) => {
                tracing::error!(error = %err, elapsed_ms, "Inquiry submission failed");
                sink.notify(Notification::failure(
                    FAILURE_TITLE,
                    FAILURE_DESCRIPTION,
                    self.notification_duration,
                ));
                SubmitOutcome::Failed(err)
            }
        }
    }

    /// Run a whole submission against `transport`
    #[allow(dead_code)] // the app drives begin/complete itself
    pub async fn submit(
        &mut self,
        transport: &dyn SubmissionTransport,
        sink: &dyn NotificationSink,
    ) -> Result<SubmitOutcome, SubmitError> {
        let pending = self.begin_submission()?;
        let result = transport.submit(pending.record()).await;
        Ok(self.complete_submission(pending, result, sink))
    }
}

impl Default for InquiryForm {
    fn default() -> Self {
        Self::new()
    }
}
