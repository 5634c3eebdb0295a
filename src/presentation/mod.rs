pub mod config;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::{
    DiarizationSettings, LoggingSettings, PollingSettings, RecordSettings, ServerSettings,
    Settings, TranscriptionSettings,
};
pub use router::create_router;
pub use state::AppState;
