use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::application::ports::{
    JobRequest, JobSnapshot, TranscriptionService, TranscriptionServiceError,
};
use crate::domain::JobName;

/// Scripted transcription service for tests and local runs. Each status
/// query pops the next queued result; an empty queue reports a job still in
/// progress.
#[derive(Default)]
pub struct MockTranscriptionService {
    poll_results: Mutex<VecDeque<Result<JobSnapshot, TranscriptionServiceError>>>,
    start_error: Mutex<Option<TranscriptionServiceError>>,
    started: Mutex<Vec<JobRequest>>,
    deleted: Mutex<Vec<String>>,
    status_queries: AtomicUsize,
}

impl MockTranscriptionService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_poll_result(&self, result: Result<JobSnapshot, TranscriptionServiceError>) {
        self.poll_results.lock().unwrap().push_back(result);
    }

    pub fn fail_start_with(&self, error: TranscriptionServiceError) {
        *self.start_error.lock().unwrap() = Some(error);
    }

    pub fn started_jobs(&self) -> Vec<JobRequest> {
        self.started.lock().unwrap().clone()
    }

    pub fn deleted_jobs(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }

    pub fn status_query_count(&self) -> usize {
        self.status_queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranscriptionService for MockTranscriptionService {
    async fn start_job(&self, request: &JobRequest) -> Result<(), TranscriptionServiceError> {
        if let Some(error) = self.start_error.lock().unwrap().take() {
            return Err(error);
        }
        self.started.lock().unwrap().push(request.clone());
        Ok(())
    }

    async fn get_job(&self, _job_name: &JobName) -> Result<JobSnapshot, TranscriptionServiceError> {
        self.status_queries.fetch_add(1, Ordering::SeqCst);
        self.poll_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(JobSnapshot::in_progress()))
    }

    async fn delete_job(&self, job_name: &JobName) -> Result<(), TranscriptionServiceError> {
        self.deleted.lock().unwrap().push(job_name.as_str().to_string());
        Ok(())
    }
}
