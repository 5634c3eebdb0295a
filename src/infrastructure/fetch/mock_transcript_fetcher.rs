use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{TranscriptFetchError, TranscriptFetcher};
use crate::domain::TranscriptDocument;

/// Serves a staged transcript document instead of dereferencing a URI.
#[derive(Default)]
pub struct MockTranscriptFetcher {
    document: Mutex<Option<TranscriptDocument>>,
    fetched_uris: Mutex<Vec<String>>,
}

impl MockTranscriptFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self, document: TranscriptDocument) {
        *self.document.lock().unwrap() = Some(document);
    }

    pub fn fetched_uris(&self) -> Vec<String> {
        self.fetched_uris.lock().unwrap().clone()
    }
}

#[async_trait]
impl TranscriptFetcher for MockTranscriptFetcher {
    async fn fetch(&self, uri: &str) -> Result<TranscriptDocument, TranscriptFetchError> {
        self.fetched_uris.lock().unwrap().push(uri.to_string());
        self.document
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| TranscriptFetchError::RequestFailed("no document staged".to_string()))
    }
}
