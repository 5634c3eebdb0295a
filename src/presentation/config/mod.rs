mod settings;

pub use settings::{
    DiarizationSettings, LoggingSettings, PollingSettings, RecordSettings, ServerSettings,
    Settings, TranscriptionSettings,
};
