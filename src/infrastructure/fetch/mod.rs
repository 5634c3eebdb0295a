mod http_transcript_fetcher;
mod mock_transcript_fetcher;

pub use http_transcript_fetcher::HttpTranscriptFetcher;
pub use mock_transcript_fetcher::MockTranscriptFetcher;
