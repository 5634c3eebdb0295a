use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use tokio::net::TcpListener;

use escriba::application::services::TranscriptionPipeline;
use escriba::infrastructure::fetch::HttpTranscriptFetcher;
use escriba::infrastructure::observability::{TracingConfig, init_tracing};
use escriba::infrastructure::persistence::DynamoRecordStore;
use escriba::infrastructure::transcribe::AwsTranscriptionService;
use escriba::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();
    init_tracing(
        TracingConfig {
            environment: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            json_format: settings.logging.enable_json,
            default_level: settings.logging.level.clone(),
        },
        settings.server.port,
    );

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let transcriber = Arc::new(AwsTranscriptionService::new(&aws_config));
    let fetcher = Arc::new(HttpTranscriptFetcher::new());
    let records = Arc::new(DynamoRecordStore::new(
        &aws_config,
        settings.records.table_name.clone(),
    ));

    let pipeline = Arc::new(TranscriptionPipeline::new(
        transcriber,
        fetcher,
        records,
        settings.pipeline_config(),
    ));

    let state = AppState {
        pipeline,
        settings: settings.clone(),
    };
    let router = create_router(state);

    let host: IpAddr = settings.server.host.parse()?;
    let addr = SocketAddr::new(host, settings.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
