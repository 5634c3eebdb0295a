use axum::Router;
use axum::response::IntoResponse;
use axum::routing::get;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use escriba::application::ports::{TranscriptFetchError, TranscriptFetcher};
use escriba::infrastructure::fetch::HttpTranscriptFetcher;

async fn start_mock_result_server(
    response_status: u16,
    response_body: &'static str,
) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/transcript.json",
        get(move || async move {
            let status = axum::http::StatusCode::from_u16(response_status).unwrap();
            (status, response_body).into_response()
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let uri = format!("http://{}/transcript.json", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (uri, shutdown_tx)
}

#[tokio::test]
async fn given_result_store_serves_document_when_fetching_then_document_is_parsed() {
    let body = r#"{
        "results": {
            "transcripts": [{"transcript": "bom dia"}],
            "items": [
                {"type": "pronunciation", "start_time": "0.1", "alternatives": [{"content": "bom"}]},
                {"type": "pronunciation", "start_time": "0.6", "alternatives": [{"content": "dia"}]}
            ]
        }
    }"#;
    let (uri, shutdown_tx) = start_mock_result_server(200, body).await;

    let fetcher = HttpTranscriptFetcher::new();
    let document = fetcher.fetch(&uri).await.unwrap();

    assert_eq!(document.transcript_text(), Some("bom dia"));
    assert_eq!(document.results.items.len(), 2);
    assert!(document.results.speaker_labels.is_none());
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_result_store_returns_error_status_when_fetching_then_status_is_reported() {
    let (uri, shutdown_tx) = start_mock_result_server(403, "expired").await;

    let fetcher = HttpTranscriptFetcher::new();
    let result = fetcher.fetch(&uri).await;

    assert!(matches!(
        result,
        Err(TranscriptFetchError::UnexpectedStatus { status: 403, .. })
    ));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_result_store_serves_invalid_json_when_fetching_then_document_is_malformed() {
    let (uri, shutdown_tx) = start_mock_result_server(200, "not json at all").await;

    let fetcher = HttpTranscriptFetcher::new();
    let result = fetcher.fetch(&uri).await;

    assert!(matches!(
        result,
        Err(TranscriptFetchError::MalformedDocument(_))
    ));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unreachable_result_store_when_fetching_then_request_fails() {
    let fetcher = HttpTranscriptFetcher::new();

    let result = fetcher.fetch("http://127.0.0.1:1/transcript.json").await;

    assert!(matches!(result, Err(TranscriptFetchError::RequestFailed(_))));
}
