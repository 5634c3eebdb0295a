use serde::Deserialize;

use crate::domain::AudioObject;

/// Invocation payload, in either of the two accepted shapes: a storage
/// bucket event notification, or a direct `{bucket, key}` request.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TranscribeTrigger {
    Storage(StorageEventNotification),
    Direct(DirectInvocation),
}

#[derive(Debug, Deserialize)]
pub struct StorageEventNotification {
    #[serde(rename = "Records")]
    pub records: Vec<StorageEventRecord>,
}

#[derive(Debug, Deserialize)]
pub struct StorageEventRecord {
    pub s3: S3Reference,
}

#[derive(Debug, Deserialize)]
pub struct S3Reference {
    pub bucket: BucketReference,
    pub object: ObjectReference,
}

#[derive(Debug, Deserialize)]
pub struct BucketReference {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ObjectReference {
    pub key: String,
}

#[derive(Debug, Deserialize)]
pub struct DirectInvocation {
    pub bucket: String,
    pub key: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TriggerError {
    #[error("storage event carried no records")]
    EmptyRecords,
}

impl TranscribeTrigger {
    /// Normalize either payload shape to the source audio object. A storage
    /// event is taken to describe one file; only its first record is used.
    pub fn into_audio_object(self) -> Result<AudioObject, TriggerError> {
        match self {
            TranscribeTrigger::Storage(event) => {
                let record = event
                    .records
                    .into_iter()
                    .next()
                    .ok_or(TriggerError::EmptyRecords)?;
                Ok(AudioObject::new(record.s3.bucket.name, record.s3.object.key))
            }
            TranscribeTrigger::Direct(direct) => Ok(AudioObject::new(direct.bucket, direct.key)),
        }
    }
}
