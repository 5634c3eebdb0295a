use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{AudioObject, SpeakerSegment};

/// Persisted output of one successful invocation. Insert-only: never updated
/// or deleted by this service.
#[derive(Debug, Clone)]
pub struct TranscriptionRecord {
    pub id: Uuid,
    pub source_bucket: String,
    pub source_key: String,
    pub transcript: String,
    pub speaker_segments: Vec<SpeakerSegment>,
    pub timestamp: DateTime<Utc>,
    pub language: String,
}

impl TranscriptionRecord {
    pub fn new(
        source: &AudioObject,
        transcript: String,
        speaker_segments: Vec<SpeakerSegment>,
        language: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            source_bucket: source.bucket.clone(),
            source_key: source.key.clone(),
            transcript,
            speaker_segments,
            timestamp: Utc::now(),
            language,
        }
    }
}
