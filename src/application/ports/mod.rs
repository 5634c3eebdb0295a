mod record_store;
mod transcript_fetcher;
mod transcription_service;

pub use record_store::{RecordStore, RecordStoreError};
pub use transcript_fetcher::{TranscriptFetchError, TranscriptFetcher};
pub use transcription_service::{
    DiarizationRequest, JobRequest, JobSnapshot, TranscriptionService, TranscriptionServiceError,
};
