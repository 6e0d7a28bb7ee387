use axum::extract::FromRequestParts;

use crate::errors::AppError;

/// `axum::extract::Path` whose rejections answer through `AppError`, so an
/// id that does not parse is a JSON 404 like any other unknown id.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct PathParam<T>(pub T);
