mod aws_transcription_service;
mod mock_transcription_service;

pub use aws_transcription_service::AwsTranscriptionService;
pub use mock_transcription_service::MockTranscriptionService;
