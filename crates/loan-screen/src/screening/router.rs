use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    routing::post,
    Router,
};
use serde_json::json;

use super::crime::CrimeDataSource;
use super::domain::{LoanId, LoanSubmission};
use super::repository::{LoanRepository, RepositoryError};
use super::service::{LoanScreeningService, ScreeningServiceError};

/// Router builder exposing the loan screening CRUD endpoints.
pub fn loan_router<R, S>(service: Arc<LoanScreeningService<R, S>>) -> Router
where
    R: LoanRepository + 'static,
    S: CrimeDataSource + 'static,
{
    Router::new()
        .route(
            "/api/v1/loans",
            post(submit_handler::<R, S>).get(list_handler::<R, S>),
        )
        .route(
            "/api/v1/loans/:loan_id",
            get(get_handler::<R, S>)
                .put(update_handler::<R, S>)
                .delete(delete_handler::<R, S>),
        )
        .with_state(service)
}

fn error_response(error: ScreeningServiceError) -> Response {
    let status = match &error {
        ScreeningServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ScreeningServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        ScreeningServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        ScreeningServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}

pub(crate) async fn submit_handler<R, S>(
    State(service): State<Arc<LoanScreeningService<R, S>>>,
    axum::Json(submission): axum::Json<LoanSubmission>,
) -> Response
where
    R: LoanRepository + 'static,
    S: CrimeDataSource + 'static,
{
    match service.submit(submission).await {
        Ok(record) => (StatusCode::CREATED, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_handler<R, S>(
    State(service): State<Arc<LoanScreeningService<R, S>>>,
) -> Response
where
    R: LoanRepository + 'static,
    S: CrimeDataSource + 'static,
{
    match service.list() {
        Ok(records) => (StatusCode::OK, axum::Json(records)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn get_handler<R, S>(
    State(service): State<Arc<LoanScreeningService<R, S>>>,
    Path(loan_id): Path<String>,
) -> Response
where
    R: LoanRepository + 'static,
    S: CrimeDataSource + 'static,
{
    match service.get(&LoanId(loan_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn update_handler<R, S>(
    State(service): State<Arc<LoanScreeningService<R, S>>>,
    Path(loan_id): Path<String>,
    axum::Json(submission): axum::Json<LoanSubmission>,
) -> Response
where
    R: LoanRepository + 'static,
    S: CrimeDataSource + 'static,
{
    match service.update(&LoanId(loan_id), submission).await {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn delete_handler<R, S>(
    State(service): State<Arc<LoanScreeningService<R, S>>>,
    Path(loan_id): Path<String>,
) -> Response
where
    R: LoanRepository + 'static,
    S: CrimeDataSource + 'static,
{
    match service.delete(&LoanId(loan_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}
