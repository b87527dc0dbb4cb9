use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{CourseDraft, CourseId, SemesterDraft, SemesterId};
use super::repository::{RepositoryError, SemesterRepository};
use super::service::{TranscriptService, TranscriptServiceError};

/// Router builder exposing the semester/course CRUD and aggregation
/// endpoints.
pub fn transcript_router<R>(service: Arc<TranscriptService<R>>) -> Router
where
    R: SemesterRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/semesters",
            get(list_semesters_handler::<R>).post(create_semester_handler::<R>),
        )
        .route(
            "/api/v1/semesters/:semester_id",
            delete(remove_semester_handler::<R>),
        )
        .route(
            "/api/v1/semesters/:semester_id/courses",
            post(add_course_handler::<R>),
        )
        .route(
            "/api/v1/semesters/:semester_id/courses/:course_id",
            delete(remove_course_handler::<R>),
        )
        .route(
            "/api/v1/academic-results",
            get(academic_results_handler::<R>),
        )
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ResultsQuery {
    pub(crate) class_size: Option<u32>,
}

pub(crate) async fn list_semesters_handler<R>(
    State(service): State<Arc<TranscriptService<R>>>,
) -> Response
where
    R: SemesterRepository + 'static,
{
    match service.list_semesters() {
        Ok(semesters) => (StatusCode::OK, axum::Json(json!({ "data": semesters }))).into_response(),
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn create_semester_handler<R>(
    State(service): State<Arc<TranscriptService<R>>>,
    axum::Json(draft): axum::Json<SemesterDraft>,
) -> Response
where
    R: SemesterRepository + 'static,
{
    match service.create_semester(draft) {
        Ok(semester) => (StatusCode::CREATED, axum::Json(semester)).into_response(),
        Err(TranscriptServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({ "error": "semester already exists" });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn remove_semester_handler<R>(
    State(service): State<Arc<TranscriptService<R>>>,
    Path(semester_id): Path<String>,
) -> Response
where
    R: SemesterRepository + 'static,
{
    match service.remove_semester(&SemesterId(semester_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(TranscriptServiceError::Repository(RepositoryError::NotFound)) => {
            not_found("semester not found")
        }
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn add_course_handler<R>(
    State(service): State<Arc<TranscriptService<R>>>,
    Path(semester_id): Path<String>,
    axum::Json(draft): axum::Json<CourseDraft>,
) -> Response
where
    R: SemesterRepository + 'static,
{
    match service.add_course(&SemesterId(semester_id), draft) {
        Ok(outcome) => (StatusCode::CREATED, axum::Json(outcome)).into_response(),
        Err(error @ TranscriptServiceError::Grade(_))
        | Err(error @ TranscriptServiceError::CreditUnits(_)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(TranscriptServiceError::Repository(RepositoryError::NotFound)) => {
            not_found("semester not found")
        }
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn remove_course_handler<R>(
    State(service): State<Arc<TranscriptService<R>>>,
    Path((semester_id, course_id)): Path<(String, String)>,
) -> Response
where
    R: SemesterRepository + 'static,
{
    match service.remove_course(&SemesterId(semester_id), &CourseId(course_id)) {
        Ok(gpa) => (StatusCode::OK, axum::Json(json!({ "gpa": gpa }))).into_response(),
        Err(TranscriptServiceError::Repository(RepositoryError::NotFound)) => {
            not_found("course not found")
        }
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn academic_results_handler<R>(
    State(service): State<Arc<TranscriptService<R>>>,
    Query(query): Query<ResultsQuery>,
) -> Response
where
    R: SemesterRepository + 'static,
{
    match service.results(query.class_size) {
        Ok(result) => (StatusCode::OK, axum::Json(result.results_view())).into_response(),
        Err(error @ TranscriptServiceError::ClassSize(_)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(error) => internal_error(error),
    }
}

fn not_found(message: &str) -> Response {
    let payload = json!({ "error": message });
    (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
}

fn internal_error(error: TranscriptServiceError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
