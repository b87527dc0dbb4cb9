use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use gpa_tracker::academics::{
    transcript_router, AcademicResultsView, PerformanceEngine, Semester, SemesterRepository,
    TranscriptService,
};
use gpa_tracker::error::AppError;

/// Preview settings sourced from [`gpa_tracker::config::AppConfig`] so the
/// cohort default has one home.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PreviewDefaults {
    pub(crate) class_size: u32,
}

/// Attach the transcript CRUD routes plus the service endpoints.
pub(crate) fn with_transcript_routes<R>(
    service: Arc<TranscriptService<R>>,
    defaults: PreviewDefaults,
) -> axum::Router
where
    R: SemesterRepository + 'static,
{
    transcript_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/academic-results/preview",
            axum::routing::post(results_preview_endpoint),
        )
        .layer(Extension(defaults))
}

/// Stateless calculation over semesters supplied in the request body, for
/// clients that keep their records local and only want the numbers.
#[derive(Debug, Deserialize)]
pub(crate) struct ResultsPreviewRequest {
    pub(crate) semesters: Vec<Semester>,
    #[serde(default)]
    pub(crate) class_size: Option<u32>,
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn results_preview_endpoint(
    Extension(defaults): Extension<PreviewDefaults>,
    Json(payload): Json<ResultsPreviewRequest>,
) -> Result<Json<AcademicResultsView>, AppError> {
    let ResultsPreviewRequest {
        semesters,
        class_size,
    } = payload;

    let engine = PerformanceEngine::new();
    let result = engine
        .score(&semesters, class_size.unwrap_or(defaults.class_size))
        .map_err(gpa_tracker::academics::TranscriptServiceError::from)?;

    Ok(Json(result.results_view()))
}
