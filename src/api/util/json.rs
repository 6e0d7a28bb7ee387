use anyhow::Result;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::errors::AppError;

/// Map a domain `Result<T>` into `Json<T>`, keeping client errors distinguishable.
pub fn to_json<T: Serialize>(result: Result<T>) -> Result<Json<T>, AppError> {
    result.map(Json).map_err(AppError::from)
}

/// Same as [`to_json`] but answers `201 Created`.
pub fn to_created<T: Serialize>(result: Result<T>) -> Result<(StatusCode, Json<T>), AppError> {
    to_json(result).map(|body| (StatusCode::CREATED, body))
}

/// `204 No Content` on success.
pub fn to_no_content(result: Result<()>) -> Result<StatusCode, AppError> {
    result.map(|_| StatusCode::NO_CONTENT).map_err(AppError::from)
}
