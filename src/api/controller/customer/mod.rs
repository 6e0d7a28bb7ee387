use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::api::util::json::{to_created, to_json, to_no_content};
use crate::api::util::json_body::JsonBody;
use crate::api::util::path_param::PathParam;
use crate::app_state::AppState;
use crate::core::persistence::customer::customer_entity::CustomerEntity;
use crate::domain::customer::dto::customer_patch_request::CustomerPatchRequest;
use crate::domain::customer::dto::customer_upsert_request::CustomerUpsertRequest;
use crate::errors::AppError;

pub struct CustomerController;

impl CustomerController {
    pub async fn list_customers(
        State(state): State<AppState>,
    ) -> Result<Json<Vec<CustomerEntity>>, AppError> {
        to_json(state.customer_service.list().await)
    }

    pub async fn create_customer(
        State(state): State<AppState>,
        JsonBody(payload): JsonBody<CustomerUpsertRequest>,
    ) -> Result<(StatusCode, Json<CustomerEntity>), AppError> {
        to_created(state.customer_service.create(payload).await)
    }

    pub async fn get_customer(
        State(state): State<AppState>,
        PathParam(id): PathParam<i64>,
    ) -> Result<Json<CustomerEntity>, AppError> {
        to_json(state.customer_service.get(id).await)
    }

    pub async fn replace_customer(
        State(state): State<AppState>,
        PathParam(id): PathParam<i64>,
        JsonBody(payload): JsonBody<CustomerUpsertRequest>,
    ) -> Result<Json<CustomerEntity>, AppError> {
        to_json(state.customer_service.replace(id, payload).await)
    }

    pub async fn patch_customer(
        State(state): State<AppState>,
        PathParam(id): PathParam<i64>,
        JsonBody(payload): JsonBody<CustomerPatchRequest>,
    ) -> Result<Json<CustomerEntity>, AppError> {
        to_json(state.customer_service.patch(id, payload).await)
    }

    pub async fn delete_customer(
        State(state): State<AppState>,
        PathParam(id): PathParam<i64>,
    ) -> Result<StatusCode, AppError> {
        to_no_content(state.customer_service.delete(id).await)
    }
}
