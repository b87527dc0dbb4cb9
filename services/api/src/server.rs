use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemorySemesterRepository};
use crate::routes::{with_transcript_routes, PreviewDefaults};
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use gpa_tracker::academics::TranscriptService;
use gpa_tracker::config::AppConfig;
use gpa_tracker::error::AppError;
use gpa_tracker::telemetry;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemorySemesterRepository::default());
    let transcript_service = Arc::new(TranscriptService::new(
        repository,
        config.academics.class_size,
    ));

    let preview_defaults = PreviewDefaults {
        class_size: config.academics.class_size,
    };
    let app = with_transcript_routes(transcript_service, preview_defaults)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "gpa tracker service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
