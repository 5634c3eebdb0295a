use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::services::PipelineOutcome;
use crate::presentation::handlers::trigger::TranscribeTrigger;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct TranscriptionResponse {
    pub message: String,
    pub transcript: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, payload))]
pub async fn transcribe_handler(
    State(state): State<AppState>,
    Json(payload): Json<TranscribeTrigger>,
) -> impl IntoResponse {
    let source = match payload.into_audio_object() {
        Ok(source) => source,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected trigger payload");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response();
        }
    };

    tracing::info!(bucket = %source.bucket, key = %source.key, "Processing audio object");

    match state.pipeline.run(source).await {
        Ok(PipelineOutcome::Completed { transcript, .. }) => (
            StatusCode::OK,
            Json(TranscriptionResponse {
                message: "Transcription completed".to_string(),
                transcript,
            }),
        )
            .into_response(),
        Ok(PipelineOutcome::JobFailed { reason }) => {
            tracing::error!(reason = %reason, "Transcription failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Transcription failed".to_string(),
                }),
            )
                .into_response()
        }
        Ok(PipelineOutcome::TimedOut) => (
            StatusCode::REQUEST_TIMEOUT,
            Json(ErrorResponse {
                error: "Transcription timeout".to_string(),
            }),
        )
            .into_response(),
        // Unclassified faults stay opaque: logged, no structured body.
        Err(e) => {
            tracing::error!(error = %e, "Transcription pipeline fault");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
