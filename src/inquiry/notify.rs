//! Notification sink abstraction

use std::time::Duration;
use tokio::sync::mpsc;

/// Whether a notification reports success or failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

/// A short-lived message for the visitor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    /// How long the message stays on screen
    pub duration: Duration,
}

impl Notification {
    pub fn success(title: &str, description: &str, duration: Duration) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.to_string(),
            description: description.to_string(),
            duration,
        }
    }

    pub fn failure(title: &str, description: &str, duration: Duration) -> Self {
        Self {
            kind: NotificationKind::Failure,
            title: title.to_string(),
            description: description.to_string(),
            duration,
        }
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration.as_millis() as u64
    }
}

/// Where notifications go. Fire-and-forget: the form never waits on it.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Sink that forwards notifications to the UI loop over a channel
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<Notification>,
}

impl ChannelSink {
    /// Create a sink and the receiver the UI loop drains
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl NotificationSink for ChannelSink {
    fn notify(&self, notification: Notification) {
        tracing::debug!(
            kind = ?notification.kind,
            title = %notification.title,
            duration_ms = notification.duration_ms(),
            "Queueing notification"
        );
        if self.tx.send(notification).is_err() {
            tracing::warn!("Notification dropped: receiver closed");
        }
    }
}
