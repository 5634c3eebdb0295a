use super::transcript::{ItemKind, TranscriptResults};

/// Per-speaker text reassembled from timestamped word items.
///
/// Times are kept as the original document strings; the parsed floats are
/// only used for range checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeakerSegment {
    pub speaker: String,
    pub start_time: String,
    pub end_time: String,
    pub text: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SegmentError {
    #[error("invalid {field} timestamp: {value:?}")]
    InvalidTimestamp { field: &'static str, value: String },
}

/// Align word items to speaker time ranges, one output segment per labeled
/// segment, in document order.
///
/// An item contributes to a segment when it is a pronunciation, its own
/// start time lies within the segment's range (inclusive on both ends), and
/// it carries at least one alternative. Word order within a segment follows
/// item order in the document. Without a diarization block the result is
/// empty.
pub fn reconstruct_speaker_segments(
    results: &TranscriptResults,
) -> Result<Vec<SpeakerSegment>, SegmentError> {
    let Some(labels) = &results.speaker_labels else {
        return Ok(Vec::new());
    };

    let mut segments = Vec::with_capacity(labels.segments.len());
    for labeled in &labels.segments {
        let start = parse_seconds("segment start_time", &labeled.start_time)?;
        let end = parse_seconds("segment end_time", &labeled.end_time)?;

        // Full item scan per segment; both lists are bounded by a single
        // audio file's word count.
        let mut words: Vec<&str> = Vec::new();
        for item in &results.items {
            if item.kind != ItemKind::Pronunciation {
                continue;
            }
            let Some(raw) = &item.start_time else {
                continue;
            };
            let at = parse_seconds("item start_time", raw)?;
            if at < start || at > end {
                continue;
            }
            if let Some(alternative) = item.alternatives.first() {
                words.push(alternative.content.as_str());
            }
        }

        segments.push(SpeakerSegment {
            speaker: labeled.speaker_label.clone(),
            start_time: labeled.start_time.clone(),
            end_time: labeled.end_time.clone(),
            text: words.join(" "),
        });
    }

    Ok(segments)
}

fn parse_seconds(field: &'static str, value: &str) -> Result<f64, SegmentError> {
    value
        .parse::<f64>()
        .map_err(|_| SegmentError::InvalidTimestamp {
            field,
            value: value.to_string(),
        })
}
