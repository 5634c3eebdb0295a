use async_trait::async_trait;

use crate::domain::{AudioObject, JobName, JobStatus};

/// Managed asynchronous transcription job abstraction.
///
/// Adapters translate their service's error surface into
/// [`TranscriptionServiceError`]; in particular, rate limiting must come back
/// as `Throttled` so the poll loop can recover locally instead of matching
/// on error text.
#[async_trait]
pub trait TranscriptionService: Send + Sync {
    async fn start_job(&self, request: &JobRequest) -> Result<(), TranscriptionServiceError>;

    async fn get_job(&self, job_name: &JobName) -> Result<JobSnapshot, TranscriptionServiceError>;

    async fn delete_job(&self, job_name: &JobName) -> Result<(), TranscriptionServiceError>;
}

#[derive(Debug, Clone)]
pub struct JobRequest {
    pub job_name: JobName,
    pub source: AudioObject,
    pub media_format: String,
    pub language: String,
    pub diarization: Option<DiarizationRequest>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiarizationRequest {
    pub max_speakers: u32,
}

/// One observation of a job's state.
#[derive(Debug, Clone)]
pub struct JobSnapshot {
    pub status: JobStatus,
    pub transcript_uri: Option<String>,
    pub failure_reason: Option<String>,
}

impl JobSnapshot {
    pub fn in_progress() -> Self {
        Self {
            status: JobStatus::InProgress,
            transcript_uri: None,
            failure_reason: None,
        }
    }

    pub fn completed(transcript_uri: impl Into<String>) -> Self {
        Self {
            status: JobStatus::Completed,
            transcript_uri: Some(transcript_uri.into()),
            failure_reason: None,
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            status: JobStatus::Failed,
            transcript_uri: None,
            failure_reason: Some(reason.into()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionServiceError {
    #[error("request throttled: {0}")]
    Throttled(String),
    #[error("job not found: {0}")]
    JobNotFound(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
}
