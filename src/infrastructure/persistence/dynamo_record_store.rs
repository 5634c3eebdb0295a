use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use tracing::instrument;

use crate::application::ports::{RecordStore, RecordStoreError};
use crate::domain::TranscriptionRecord;

/// DynamoDB-backed record store, keyed by the record's generated id.
pub struct DynamoRecordStore {
    client: Client,
    table_name: String,
}

impl DynamoRecordStore {
    pub fn new(config: &aws_config::SdkConfig, table_name: String) -> Self {
        Self {
            client: Client::new(config),
            table_name,
        }
    }
}

#[async_trait]
impl RecordStore for DynamoRecordStore {
    #[instrument(skip(self, record), fields(record_id = %record.id, table = %self.table_name))]
    async fn put(&self, record: &TranscriptionRecord) -> Result<(), RecordStoreError> {
        let mut item = HashMap::from([
            ("id".to_string(), AttributeValue::S(record.id.to_string())),
            (
                "source_bucket".to_string(),
                AttributeValue::S(record.source_bucket.clone()),
            ),
            (
                "source_key".to_string(),
                AttributeValue::S(record.source_key.clone()),
            ),
            (
                "transcript".to_string(),
                AttributeValue::S(record.transcript.clone()),
            ),
            (
                "timestamp".to_string(),
                AttributeValue::S(record.timestamp.to_rfc3339()),
            ),
            (
                "language".to_string(),
                AttributeValue::S(record.language.clone()),
            ),
        ]);

        // Records without diarization carry no segment attribute at all.
        if !record.speaker_segments.is_empty() {
            let segments = record
                .speaker_segments
                .iter()
                .map(|segment| {
                    AttributeValue::M(HashMap::from([
                        (
                            "speaker".to_string(),
                            AttributeValue::S(segment.speaker.clone()),
                        ),
                        (
                            "start_time".to_string(),
                            AttributeValue::S(segment.start_time.clone()),
                        ),
                        (
                            "end_time".to_string(),
                            AttributeValue::S(segment.end_time.clone()),
                        ),
                        ("text".to_string(), AttributeValue::S(segment.text.clone())),
                    ]))
                })
                .collect();
            item.insert("speaker_segments".to_string(), AttributeValue::L(segments));
        }

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| RecordStoreError::WriteFailed(e.into_service_error().to_string()))?;

        Ok(())
    }
}
