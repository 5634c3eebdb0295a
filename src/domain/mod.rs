mod audio_object;
mod job_name;
mod job_status;
mod record;
mod speaker_segment;
mod transcript;

pub use audio_object::AudioObject;
pub use job_name::JobName;
pub use job_status::JobStatus;
pub use record::TranscriptionRecord;
pub use speaker_segment::{SegmentError, SpeakerSegment, reconstruct_speaker_segments};
pub use transcript::{
    ItemAlternative, ItemKind, LabeledSegment, SpeakerLabels, TranscriptDocument, TranscriptItem,
    TranscriptResults, TranscriptText,
};
