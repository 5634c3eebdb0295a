use async_trait::async_trait;

use crate::application::ports::{TranscriptFetchError, TranscriptFetcher};
use crate::domain::TranscriptDocument;

/// Fetches the transcript result document with a plain HTTP(S) GET.
pub struct HttpTranscriptFetcher {
    client: reqwest::Client,
}

impl HttpTranscriptFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpTranscriptFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TranscriptFetcher for HttpTranscriptFetcher {
    async fn fetch(&self, uri: &str) -> Result<TranscriptDocument, TranscriptFetchError> {
        tracing::debug!(uri = %uri, "Fetching transcript document");

        let response = self
            .client
            .get(uri)
            .send()
            .await
            .map_err(|e| TranscriptFetchError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptFetchError::UnexpectedStatus { status, body });
        }

        let document: TranscriptDocument = response
            .json()
            .await
            .map_err(|e| TranscriptFetchError::MalformedDocument(e.to_string()))?;

        tracing::debug!(
            transcripts = document.results.transcripts.len(),
            items = document.results.items.len(),
            diarized = document.results.speaker_labels.is_some(),
            "Transcript document parsed"
        );

        Ok(document)
    }
}
