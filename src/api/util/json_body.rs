use axum::extract::FromRequest;

use crate::errors::AppError;

/// `axum::Json` whose rejections (bad JSON, wrong types, missing
/// content type) answer 400 through `AppError`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
