//! On-screen notification queue

use crate::inquiry::Notification;
use std::collections::VecDeque;
use std::time::Instant;

/// A notification and when it was first shown
#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    pub shown_at: Instant,
}

impl Toast {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= self.notification.duration
    }
}

/// Toasts in arrival order; each disappears after its display duration
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, notification: Notification, now: Instant) {
        self.toasts.push_back(Toast {
            notification,
            shown_at: now,
        });
    }

    /// Drop every toast whose time is up
    pub fn prune(&mut self, now: Instant) {
        self.toasts.retain(|toast| !toast.is_expired(now));
    }

    /// Dismiss the toast currently on screen
    pub fn dismiss(&mut self) -> Option<Toast> {
        self.toasts.pop_back()
    }

    /// Most recent toast, drawn on top
    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.back()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
