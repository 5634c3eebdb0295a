use async_trait::async_trait;
use aws_sdk_transcribe::Client;
use aws_sdk_transcribe::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_transcribe::types::{
    LanguageCode, Media, MediaFormat, Settings as JobSettings, TranscriptionJobStatus,
};

use crate::application::ports::{
    JobRequest, JobSnapshot, TranscriptionService, TranscriptionServiceError,
};
use crate::domain::{AudioObject, JobName, JobStatus};

/// Amazon Transcribe adapter. The audio object is handed to the service as
/// an `s3://` media URI; this adapter never reads it.
pub struct AwsTranscriptionService {
    client: Client,
}

impl AwsTranscriptionService {
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }

    fn media_uri(source: &AudioObject) -> String {
        format!("s3://{}/{}", source.bucket, source.key)
    }
}

#[async_trait]
impl TranscriptionService for AwsTranscriptionService {
    async fn start_job(&self, request: &JobRequest) -> Result<(), TranscriptionServiceError> {
        let media = Media::builder()
            .media_file_uri(Self::media_uri(&request.source))
            .build();

        let mut builder = self
            .client
            .start_transcription_job()
            .transcription_job_name(request.job_name.as_str())
            .media(media)
            .media_format(MediaFormat::from(request.media_format.as_str()))
            .language_code(LanguageCode::from(request.language.as_str()));

        if let Some(diarization) = request.diarization {
            builder = builder.settings(
                JobSettings::builder()
                    .show_speaker_labels(true)
                    .max_speaker_labels(diarization.max_speakers as i32)
                    .build(),
            );
        }

        builder
            .send()
            .await
            .map_err(|e| classify("start_transcription_job", e))?;

        Ok(())
    }

    async fn get_job(&self, job_name: &JobName) -> Result<JobSnapshot, TranscriptionServiceError> {
        let response = self
            .client
            .get_transcription_job()
            .transcription_job_name(job_name.as_str())
            .send()
            .await
            .map_err(|e| classify("get_transcription_job", e))?;

        let job = response.transcription_job().ok_or_else(|| {
            TranscriptionServiceError::ApiRequestFailed(
                "response carried no transcription job".to_string(),
            )
        })?;

        let status = match job.transcription_job_status() {
            Some(TranscriptionJobStatus::Completed) => JobStatus::Completed,
            Some(TranscriptionJobStatus::Failed) => JobStatus::Failed,
            // Queued, InProgress, and unrecognized variants all poll again.
            _ => JobStatus::InProgress,
        };

        Ok(JobSnapshot {
            status,
            transcript_uri: job
                .transcript()
                .and_then(|t| t.transcript_file_uri())
                .map(String::from),
            failure_reason: job.failure_reason().map(String::from),
        })
    }

    async fn delete_job(&self, job_name: &JobName) -> Result<(), TranscriptionServiceError> {
        self.client
            .delete_transcription_job()
            .transcription_job_name(job_name.as_str())
            .send()
            .await
            .map_err(|e| classify("delete_transcription_job", e))?;

        Ok(())
    }
}

/// Map an SDK error onto the port taxonomy. Structured error codes are the
/// primary signal; the message-substring check only covers errors that carry
/// no metadata.
fn classify<E>(context: &'static str, err: SdkError<E>) -> TranscriptionServiceError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
{
    if let Some(service_err) = err.as_service_error() {
        let code = service_err.meta().code().unwrap_or("unknown");
        let message = service_err.meta().message().unwrap_or("no message");
        if code == "ThrottlingException" || code == "LimitExceededException" {
            return TranscriptionServiceError::Throttled(format!("{context}: {message}"));
        }
        if code == "NotFoundException" {
            return TranscriptionServiceError::JobNotFound(format!("{context}: {message}"));
        }
        return TranscriptionServiceError::ApiRequestFailed(format!(
            "{context}: {code}: {message}"
        ));
    }

    let text = err.to_string();
    if text.contains("ThrottlingException") {
        return TranscriptionServiceError::Throttled(format!("{context}: {text}"));
    }
    TranscriptionServiceError::ApiRequestFailed(format!("{context}: {text}"))
}
