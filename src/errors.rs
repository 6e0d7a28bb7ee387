use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

use crate::domain::common::error::DomainError;
use crate::domain::common::field_errors::FieldErrors;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(FieldErrors),

    #[error("{0}")]
    BodyParsingError(String),

    #[error("Authentication credentials were not provided.")]
    NotAuthenticated,

    #[error("Invalid token.")]
    InvalidToken,

    #[error("Not found.")]
    NotFound,

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

/// Helper for mapping any unknown error into internal error
pub fn internal_error<E: ToString>(err: E) -> AppError {
    AppError::InternalServerError(err.to_string())
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<DomainError>() {
            Ok(DomainError::Validation(errors)) => AppError::Validation(errors),
            Ok(DomainError::NotFound(_)) => AppError::NotFound,
            Err(other) => internal_error(format!("{other:#}")),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BodyParsingError(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            // An id that cannot name a row is just an unknown id.
            PathRejection::FailedToDeserializePathParams(_) => AppError::NotFound,
            other => internal_error(other.body_text()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            AppError::Validation(_) | AppError::BodyParsingError(_) => StatusCode::BAD_REQUEST,
            AppError::NotAuthenticated | AppError::InvalidToken => StatusCode::UNAUTHORIZED,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match self {
            // Field errors are the whole body, keyed by field name.
            AppError::Validation(errors) => Json(json!(errors)),
            AppError::InternalServerError(ref msg) => {
                tracing::error!("{msg}");
                Json(json!({ "detail": self.to_string() }))
            }
            other => Json(json!({ "detail": other.to_string() })),
        };

        (status, body).into_response()
    }
}
