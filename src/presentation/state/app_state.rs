use std::sync::Arc;

use crate::application::services::TranscriptionPipeline;
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<TranscriptionPipeline>,
    pub settings: Settings,
}
