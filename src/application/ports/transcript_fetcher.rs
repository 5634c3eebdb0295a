use async_trait::async_trait;

use crate::domain::TranscriptDocument;

/// Dereferences the result URI a completed job reports and parses the body
/// as a transcript document.
#[async_trait]
pub trait TranscriptFetcher: Send + Sync {
    async fn fetch(&self, uri: &str) -> Result<TranscriptDocument, TranscriptFetchError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptFetchError {
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
    #[error("malformed transcript document: {0}")]
    MalformedDocument(String),
}
