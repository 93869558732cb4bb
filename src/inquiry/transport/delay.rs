//! Placeholder transport: logs the inquiry and succeeds after a pause

use super::{SubmissionReceipt, SubmissionTransport, TransportError};
use crate::inquiry::InquiryRecord;
use async_trait::async_trait;
use std::time::Duration;

/// Default pause before the stub reports success
pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone)]
pub struct DelayTransport {
    delay: Duration,
}

impl DelayTransport {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for DelayTransport {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

#[async_trait]
impl SubmissionTransport for DelayTransport {
    async fn submit(&self, record: &InquiryRecord) -> Result<SubmissionReceipt, TransportError> {
        tracing::debug!(company = %record.company, "Inquiry received by stub transport");
        tokio::time::sleep(self.delay).await;
        Ok(SubmissionReceipt::issue())
    }
}
