//! Submission transports: where a completed inquiry is delivered

mod delay;
mod outbox;
mod timeout;
mod traits;

pub use delay::{DelayTransport, DEFAULT_DELAY};
pub use outbox::OutboxTransport;
pub use timeout::TimeoutTransport;
pub use traits::{SubmissionReceipt, SubmissionTransport, TransportError};

#[cfg(test)]
pub use traits::MockSubmissionTransport;

use crate::config::{AppConfig, TransportKind};
use std::sync::Arc;

/// Assemble the transport described by the configuration.
///
/// A timeout wraps the chosen transport unless the configured limit is zero.
pub fn build_transport(config: &AppConfig) -> Arc<dyn SubmissionTransport> {
    build_transport_for(config.transport_kind(), config)
}

fn build_transport_for(kind: TransportKind, config: &AppConfig) -> Arc<dyn SubmissionTransport> {
    let limit = config.submit_timeout();

    match kind {
        TransportKind::Stub => {
            let delay = config.submit_delay();
            tracing::info!(delay_ms = delay.as_millis() as u64, "Using stub transport");
            wrap(DelayTransport::new(delay), limit)
        }
        TransportKind::Outbox => {
            let outbox = OutboxTransport::new(config.outbox_path());
            tracing::info!(path = %outbox.path().display(), "Using outbox transport");
            wrap(outbox, limit)
        }
    }
}

fn wrap<T: SubmissionTransport + 'static>(
    transport: T,
    limit: Option<std::time::Duration>,
) -> Arc<dyn SubmissionTransport> {
    match limit {
        Some(limit) => Arc::new(TimeoutTransport::new(transport, limit)),
        None => Arc::new(transport),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inquiry::test_support::filled_record;

    #[tokio::test]
    async fn test_build_stub_transport_succeeds() {
        let config = AppConfig {
            submit_delay_ms: Some(1),
            ..Default::default()
        };

        let transport = build_transport_for(TransportKind::Stub, &config);

        assert!(transport.submit(&filled_record()).await.is_ok());
    }

    #[tokio::test]
    async fn test_build_outbox_transport_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("outbox.jsonl");
        let config = AppConfig {
            outbox_path: Some(path.clone()),
            ..Default::default()
        };

        let transport = build_transport_for(TransportKind::Outbox, &config);
        transport.submit(&filled_record()).await.unwrap();

        assert!(path.exists());
    }
}
