use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{RecordStore, RecordStoreError};
use crate::domain::TranscriptionRecord;

/// In-memory record store for tests and local runs.
#[derive(Default)]
pub struct MockRecordStore {
    records: Mutex<Vec<TranscriptionRecord>>,
    fail_writes: Mutex<bool>,
}

impl MockRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes(&self) {
        *self.fail_writes.lock().unwrap() = true;
    }

    pub fn saved(&self) -> Vec<TranscriptionRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordStore for MockRecordStore {
    async fn put(&self, record: &TranscriptionRecord) -> Result<(), RecordStoreError> {
        if *self.fail_writes.lock().unwrap() {
            return Err(RecordStoreError::WriteFailed(
                "mock write failure".to_string(),
            ));
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}
