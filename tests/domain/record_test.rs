use escriba::domain::{AudioObject, TranscriptionRecord};

#[test]
fn given_source_object_when_creating_record_then_fields_are_carried_over() {
    let source = AudioObject::new("meetings".to_string(), "standup.mp3".to_string());

    let record = TranscriptionRecord::new(
        &source,
        "hello world".to_string(),
        Vec::new(),
        "pt-BR".to_string(),
    );

    assert_eq!(record.source_bucket, "meetings");
    assert_eq!(record.source_key, "standup.mp3");
    assert_eq!(record.transcript, "hello world");
    assert_eq!(record.language, "pt-BR");
    assert!(record.speaker_segments.is_empty());
}

#[test]
fn given_two_records_when_creating_then_ids_differ() {
    let source = AudioObject::new("meetings".to_string(), "standup.mp3".to_string());

    let a = TranscriptionRecord::new(&source, "a".to_string(), Vec::new(), "pt-BR".to_string());
    let b = TranscriptionRecord::new(&source, "b".to_string(), Vec::new(), "pt-BR".to_string());

    assert_ne!(a.id, b.id);
}
