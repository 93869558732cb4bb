//! Outbox transport: appends each inquiry as a JSON line to a local file
//!
//! Someone (or something) downstream picks the file up; each line is one
//! self-contained submission with its receipt reference.

use super::{SubmissionReceipt, SubmissionTransport, TransportError};
use crate::inquiry::InquiryRecord;
use async_trait::async_trait;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OutboxEntry<'a> {
    #[serde(flatten)]
    receipt: &'a SubmissionReceipt,
    inquiry: &'a InquiryRecord,
}

#[derive(Debug, Clone)]
pub struct OutboxTransport {
    path: PathBuf,
}

impl OutboxTransport {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SubmissionTransport for OutboxTransport {
    async fn submit(&self, record: &InquiryRecord) -> Result<SubmissionReceipt, TransportError> {
        let receipt = SubmissionReceipt::issue();

        let mut line = serde_json::to_string(&OutboxEntry {
            receipt: &receipt,
            inquiry: record,
        })?;
        line.push('\n');

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        tracing::info!(
            reference = %receipt.reference,
            path = %self.path.display(),
            "Inquiry written to outbox"
        );
        Ok(receipt)
    }
}
