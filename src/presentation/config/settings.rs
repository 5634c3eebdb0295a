use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

use crate::application::ports::DiarizationRequest;
use crate::application::services::{PipelineConfig, PollPolicy};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub transcription: TranscriptionSettings,
    pub polling: PollingSettings,
    pub records: RecordSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub language: String,
    pub media_format: String,
    pub diarization: DiarizationSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiarizationSettings {
    pub enabled: bool,
    pub max_speakers: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PollingSettings {
    pub initial_delay_secs: u64,
    pub wait_budget_secs: u64,
    pub backoff_factor: f64,
    pub max_delay_secs: u64,
    pub max_throttle_delay_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecordSettings {
    pub table_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            transcription: TranscriptionSettings {
                language: "pt-BR".to_string(),
                media_format: "mp3".to_string(),
                diarization: DiarizationSettings {
                    enabled: false,
                    max_speakers: 4,
                },
            },
            polling: PollingSettings {
                initial_delay_secs: 10,
                wait_budget_secs: 300,
                backoff_factor: 1.5,
                max_delay_secs: 60,
                max_throttle_delay_secs: 120,
            },
            records: RecordSettings {
                table_name: "transcriptions".to_string(),
            },
            logging: LoggingSettings {
                level: "info".to_string(),
                enable_json: false,
            },
        }
    }
}

impl Settings {
    /// Defaults overridable from the environment.
    pub fn from_env() -> Self {
        let defaults = Settings::default();
        Self {
            server: ServerSettings {
                host: env_or("SERVER_HOST", defaults.server.host),
                port: env_or("SERVER_PORT", defaults.server.port),
            },
            transcription: TranscriptionSettings {
                language: env_or("TRANSCRIBE_LANGUAGE", defaults.transcription.language),
                media_format: env_or(
                    "TRANSCRIBE_MEDIA_FORMAT",
                    defaults.transcription.media_format,
                ),
                diarization: DiarizationSettings {
                    enabled: env_or(
                        "DIARIZATION_ENABLED",
                        defaults.transcription.diarization.enabled,
                    ),
                    max_speakers: env_or(
                        "DIARIZATION_MAX_SPEAKERS",
                        defaults.transcription.diarization.max_speakers,
                    ),
                },
            },
            polling: PollingSettings {
                initial_delay_secs: env_or(
                    "POLL_INITIAL_DELAY_SECS",
                    defaults.polling.initial_delay_secs,
                ),
                wait_budget_secs: env_or(
                    "POLL_WAIT_BUDGET_SECS",
                    defaults.polling.wait_budget_secs,
                ),
                backoff_factor: env_or("POLL_BACKOFF_FACTOR", defaults.polling.backoff_factor),
                max_delay_secs: env_or("POLL_MAX_DELAY_SECS", defaults.polling.max_delay_secs),
                max_throttle_delay_secs: env_or(
                    "POLL_MAX_THROTTLE_DELAY_SECS",
                    defaults.polling.max_throttle_delay_secs,
                ),
            },
            records: RecordSettings {
                table_name: env_or("RECORDS_TABLE", defaults.records.table_name),
            },
            logging: LoggingSettings {
                level: env_or("LOG_LEVEL", defaults.logging.level),
                enable_json: env_or("LOG_JSON", defaults.logging.enable_json),
            },
        }
    }

    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            language: self.transcription.language.clone(),
            media_format: self.transcription.media_format.clone(),
            diarization: self.transcription.diarization.request(),
            poll: self.polling.poll_policy(),
        }
    }
}

impl DiarizationSettings {
    pub fn request(&self) -> Option<DiarizationRequest> {
        self.enabled.then_some(DiarizationRequest {
            max_speakers: self.max_speakers,
        })
    }
}

impl PollingSettings {
    pub fn poll_policy(&self) -> PollPolicy {
        PollPolicy {
            initial_delay: Duration::from_secs(self.initial_delay_secs),
            wait_budget: Duration::from_secs(self.wait_budget_secs),
            backoff_factor: self.backoff_factor,
            max_delay: Duration::from_secs(self.max_delay_secs),
            max_throttle_delay: Duration::from_secs(self.max_throttle_delay_secs),
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
