//! Trait abstraction for inquiry delivery to enable mocking in tests

use crate::inquiry::InquiryRecord;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

/// Proof that an inquiry was accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub reference: Uuid,
    pub received_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    /// Fresh receipt stamped with the current time
    pub fn issue() -> Self {
        Self {
            reference: Uuid::new_v4(),
            received_at: Utc::now(),
        }
    }
}

/// Errors a transport can report back to the form
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("submission timed out after {0:?}")]
    TimedOut(Duration),

    #[error("failed to write inquiry: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode inquiry: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("submission task aborted: {0}")]
    Aborted(String),
}

/// Delivers one completed inquiry somewhere and reports the outcome
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    async fn submit(&self, record: &InquiryRecord) -> Result<SubmissionReceipt, TransportError>;
}
