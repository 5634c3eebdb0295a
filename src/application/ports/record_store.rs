use async_trait::async_trait;

use crate::domain::TranscriptionRecord;

/// Structured store for finished transcriptions. Insert-only.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn put(&self, record: &TranscriptionRecord) -> Result<(), RecordStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RecordStoreError {
    #[error("write failed: {0}")]
    WriteFailed(String),
}
