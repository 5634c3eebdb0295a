use std::sync::Arc;

use uuid::Uuid;

use crate::application::ports::{
    DiarizationRequest, JobRequest, JobSnapshot, RecordStore, RecordStoreError, TranscriptFetchError,
    TranscriptFetcher, TranscriptionService, TranscriptionServiceError,
};
use crate::domain::{
    AudioObject, JobName, JobStatus, SegmentError, TranscriptionRecord,
    reconstruct_speaker_segments,
};

use super::backoff::{Backoff, PollPolicy};

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub language: String,
    pub media_format: String,
    pub diarization: Option<DiarizationRequest>,
    pub poll: PollPolicy,
}

/// Terminal outcome of one invocation. Fatal errors are not outcomes; they
/// surface as [`PipelineError`].
#[derive(Debug)]
pub enum PipelineOutcome {
    Completed { record_id: Uuid, transcript: String },
    JobFailed { reason: String },
    TimedOut,
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("transcription service: {0}")]
    Service(#[from] TranscriptionServiceError),
    #[error("transcript fetch: {0}")]
    Fetch(#[from] TranscriptFetchError),
    #[error("segment reconstruction: {0}")]
    Segments(#[from] SegmentError),
    #[error("record store: {0}")]
    Records(#[from] RecordStoreError),
    #[error("completed job carried no transcript uri")]
    MissingTranscriptUri,
    #[error("transcript document carried no transcript text")]
    MissingTranscriptText,
}

enum PollOutcome {
    Terminal(JobSnapshot),
    TimedOut,
}

/// Full transcription flow for one audio object: submit the job, poll it to
/// a terminal state, fetch and parse the result, reconstruct speaker
/// segments, persist the record, release the job.
pub struct TranscriptionPipeline {
    transcriber: Arc<dyn TranscriptionService>,
    fetcher: Arc<dyn TranscriptFetcher>,
    records: Arc<dyn RecordStore>,
    config: PipelineConfig,
}

impl TranscriptionPipeline {
    pub fn new(
        transcriber: Arc<dyn TranscriptionService>,
        fetcher: Arc<dyn TranscriptFetcher>,
        records: Arc<dyn RecordStore>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            transcriber,
            fetcher,
            records,
            config,
        }
    }

    pub async fn run(&self, source: AudioObject) -> Result<PipelineOutcome, PipelineError> {
        let job_name = JobName::generate();
        tracing::info!(
            job_name = %job_name,
            bucket = %source.bucket,
            key = %source.key,
            "Starting transcription job"
        );

        let request = JobRequest {
            job_name: job_name.clone(),
            source: source.clone(),
            media_format: self.config.media_format.clone(),
            language: self.config.language.clone(),
            diarization: self.config.diarization,
        };
        self.transcriber.start_job(&request).await?;

        let snapshot = match self.poll_until_terminal(&job_name).await? {
            PollOutcome::Terminal(snapshot) => snapshot,
            PollOutcome::TimedOut => {
                // The job is left allocated on the service for inspection.
                tracing::warn!(job_name = %job_name, "Transcription timed out");
                return Ok(PipelineOutcome::TimedOut);
            }
        };

        if snapshot.status == JobStatus::Failed {
            let reason = snapshot
                .failure_reason
                .unwrap_or_else(|| "unknown".to_string());
            tracing::error!(job_name = %job_name, reason = %reason, "Transcription job failed");
            return Ok(PipelineOutcome::JobFailed { reason });
        }

        let transcript_uri = snapshot
            .transcript_uri
            .ok_or(PipelineError::MissingTranscriptUri)?;
        tracing::debug!(job_name = %job_name, uri = %transcript_uri, "Fetching transcript");
        let document = self.fetcher.fetch(&transcript_uri).await?;

        let transcript = document
            .transcript_text()
            .ok_or(PipelineError::MissingTranscriptText)?
            .to_string();
        let speaker_segments = reconstruct_speaker_segments(&document.results)?;

        let record = TranscriptionRecord::new(
            &source,
            transcript,
            speaker_segments,
            self.config.language.clone(),
        );
        let record_id = record.id;
        self.records.put(&record).await?;
        tracing::info!(
            record_id = %record_id,
            segments = record.speaker_segments.len(),
            chars = record.transcript.len(),
            "Transcription record saved"
        );

        if let Err(e) = self.transcriber.delete_job(&job_name).await {
            tracing::warn!(
                job_name = %job_name,
                error = %e,
                "Failed to delete completed transcription job"
            );
        }

        Ok(PipelineOutcome::Completed {
            record_id,
            transcript: record.transcript,
        })
    }

    /// Bounded poll loop. Throttling grows the delay without consuming a
    /// normal backoff step; any other query error is fatal.
    async fn poll_until_terminal(
        &self,
        job_name: &JobName,
    ) -> Result<PollOutcome, TranscriptionServiceError> {
        let mut backoff = Backoff::new(self.config.poll);

        while let Some(delay) = backoff.next_delay() {
            tokio::time::sleep(delay).await;

            match self.transcriber.get_job(job_name).await {
                Ok(snapshot) if snapshot.status.is_terminal() => {
                    tracing::info!(
                        job_name = %job_name,
                        status = %snapshot.status,
                        "Transcription job reached terminal state"
                    );
                    return Ok(PollOutcome::Terminal(snapshot));
                }
                Ok(snapshot) => {
                    tracing::debug!(
                        job_name = %job_name,
                        status = %snapshot.status,
                        slept_secs = backoff.total_slept().as_secs_f64(),
                        "Transcription job still running"
                    );
                    backoff.advance();
                }
                Err(TranscriptionServiceError::Throttled(message)) => {
                    backoff.throttled();
                    tracing::warn!(
                        job_name = %job_name,
                        error = %message,
                        next_delay_secs = backoff.current_delay().as_secs_f64(),
                        "Status query throttled, backing off"
                    );
                }
                Err(e) => return Err(e),
            }
        }

        Ok(PollOutcome::TimedOut)
    }
}
