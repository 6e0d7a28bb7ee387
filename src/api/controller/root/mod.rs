use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::api::dto::root_dto::RootResponse;

pub struct RootController;

impl RootController {
    pub async fn index() -> Json<RootResponse> {
        Json(RootResponse::default())
    }

    pub async fn health() -> &'static str {
        "OK"
    }

    pub async fn not_found() -> impl IntoResponse {
        (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "detail": "Not found." })),
        )
    }
}
