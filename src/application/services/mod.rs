mod backoff;
mod transcription_pipeline;

pub use backoff::{Backoff, PollPolicy};
pub use transcription_pipeline::{
    PipelineConfig, PipelineError, PipelineOutcome, TranscriptionPipeline,
};
