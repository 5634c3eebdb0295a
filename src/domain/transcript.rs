use serde::Deserialize;

/// Result document produced by the transcription service, fetched from the
/// URI the job reports on completion.
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptDocument {
    pub results: TranscriptResults,
}

impl TranscriptDocument {
    /// Full transcript text, when the document carries one.
    pub fn transcript_text(&self) -> Option<&str> {
        self.results
            .transcripts
            .first()
            .map(|t| t.transcript.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptResults {
    pub transcripts: Vec<TranscriptText>,
    #[serde(default)]
    pub speaker_labels: Option<SpeakerLabels>,
    #[serde(default)]
    pub items: Vec<TranscriptItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptText {
    pub transcript: String,
}

/// Diarization block: which speaker was active over which time range.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeakerLabels {
    pub segments: Vec<LabeledSegment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LabeledSegment {
    pub speaker_label: String,
    pub start_time: String,
    pub end_time: String,
}

/// One recognized item. Pronunciation items carry a start time; punctuation
/// items do not.
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptItem {
    #[serde(rename = "type")]
    pub kind: ItemKind,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub alternatives: Vec<ItemAlternative>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Pronunciation,
    Punctuation,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemAlternative {
    pub content: String,
}
