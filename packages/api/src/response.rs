// ABOUTME: Response helpers mapping storage results onto HTTP responses
// ABOUTME: Success bodies are plain entity JSON; failures carry only a status

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson, Response},
};
use serde::Serialize;
use tracing::error;

use taskboard_core::StorageError;

/// Status code clients see for a given storage failure
fn error_status(err: &StorageError) -> StatusCode {
    match err {
        StorageError::NotFound(_) => StatusCode::NOT_FOUND,
        StorageError::FutureDate(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// 200 with the value as JSON, or a bare error status
pub fn ok_or_error<T: Serialize>(result: Result<T, StorageError>, context: &str) -> Response {
    match result {
        Ok(value) => (StatusCode::OK, ResponseJson(value)).into_response(),
        Err(e) => {
            error!("{}: {}", context, e);
            error_status(&e).into_response()
        }
    }
}

/// 201 with the created value as JSON, or a bare error status
pub fn created_or_error<T: Serialize>(result: Result<T, StorageError>, context: &str) -> Response {
    match result {
        Ok(value) => (StatusCode::CREATED, ResponseJson(value)).into_response(),
        Err(e) => {
            error!("{}: {}", context, e);
            error_status(&e).into_response()
        }
    }
}

/// 204 with no body, or a bare error status
pub fn no_content_or_error(result: Result<(), StorageError>, context: &str) -> Response {
    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            error!("{}: {}", context, e);
            error_status(&e).into_response()
        }
    }
}

/// 200 with the list as JSON, 204 when it is empty, or a bare error status
pub fn list_or_no_content<T: Serialize>(
    result: Result<Vec<T>, StorageError>,
    context: &str,
) -> Response {
    match result {
        Ok(items) if items.is_empty() => StatusCode::NO_CONTENT.into_response(),
        Ok(items) => (StatusCode::OK, ResponseJson(items)).into_response(),
        Err(e) => {
            error!("{}: {}", context, e);
            error_status(&e).into_response()
        }
    }
}
