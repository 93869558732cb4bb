//! Upper bound on how long a transport may take

use super::{SubmissionReceipt, SubmissionTransport, TransportError};
use crate::inquiry::InquiryRecord;
use async_trait::async_trait;
use std::time::Duration;

/// Wraps a transport so a call that never resolves becomes a failure
pub struct TimeoutTransport<T> {
    inner: T,
    limit: Duration,
}

impl<T: SubmissionTransport> TimeoutTransport<T> {
    pub fn new(inner: T, limit: Duration) -> Self {
        Self { inner, limit }
    }
}

#[async_trait]
impl<T: SubmissionTransport> SubmissionTransport for TimeoutTransport<T> {
    async fn submit(&self, record: &InquiryRecord) -> Result<SubmissionReceipt, TransportError> {
        match tokio::time::timeout(self.limit, self.inner.submit(record)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(limit_secs = self.limit.as_secs(), "Inquiry submission timed out");
                Err(TransportError::TimedOut(self.limit))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inquiry::test_support::filled_record;
    use crate::inquiry::transport::{DelayTransport, MockSubmissionTransport};

    #[tokio::test]
    async fn test_slow_transport_times_out() {
        let limit = Duration::from_millis(20);
        let transport = TimeoutTransport::new(DelayTransport::new(Duration::from_secs(60)), limit);

        let result = transport.submit(&filled_record()).await;

        assert!(matches!(result, Err(TransportError::TimedOut(d)) if d == limit));
    }

    #[tokio::test]
    async fn test_fast_transport_passes_through() {
        let mut inner = MockSubmissionTransport::new();
        inner
            .expect_submit()
            .times(1)
            .returning(|_| Err(TransportError::Io(std::io::Error::other("disk full"))));
        let transport = TimeoutTransport::new(inner, Duration::from_secs(5));

        let result = transport.submit(&filled_record()).await;

        assert!(matches!(result, Err(TransportError::Io(err)) if err.to_string() == "disk full"));
    }

    #[test]
    fn test_timed_out_message() {
        let err = TransportError::TimedOut(Duration::from_secs(30));
        assert_eq!(err.to_string(), "submission timed out after 30s");
    }

    #[test]
    fn test_sub_second_limit_keeps_its_unit() {
        let err = TransportError::TimedOut(Duration::from_millis(250));
        assert_eq!(err.to_string(), "submission timed out after 250ms");
    }
}
