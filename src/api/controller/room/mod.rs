use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::api::util::json::{to_created, to_json, to_no_content};
use crate::api::util::json_body::JsonBody;
use crate::api::util::path_param::PathParam;
use crate::app_state::AppState;
use crate::core::persistence::room::room_entity::RoomEntity;
use crate::domain::room::dto::room_patch_request::RoomPatchRequest;
use crate::domain::room::dto::room_upsert_request::RoomUpsertRequest;
use crate::errors::AppError;

pub struct RoomController;

impl RoomController {
    pub async fn list_rooms(
        State(state): State<AppState>,
    ) -> Result<Json<Vec<RoomEntity>>, AppError> {
        to_json(state.room_service.list().await)
    }

    pub async fn create_room(
        State(state): State<AppState>,
        JsonBody(payload): JsonBody<RoomUpsertRequest>,
    ) -> Result<(StatusCode, Json<RoomEntity>), AppError> {
        to_created(state.room_service.create(payload).await)
    }

    pub async fn get_room(
        State(state): State<AppState>,
        PathParam(id): PathParam<i64>,
    ) -> Result<Json<RoomEntity>, AppError> {
        to_json(state.room_service.get(id).await)
    }

    pub async fn replace_room(
        State(state): State<AppState>,
        PathParam(id): PathParam<i64>,
        JsonBody(payload): JsonBody<RoomUpsertRequest>,
    ) -> Result<Json<RoomEntity>, AppError> {
        to_json(state.room_service.replace(id, payload).await)
    }

    pub async fn patch_room(
        State(state): State<AppState>,
        PathParam(id): PathParam<i64>,
        JsonBody(payload): JsonBody<RoomPatchRequest>,
    ) -> Result<Json<RoomEntity>, AppError> {
        to_json(state.room_service.patch(id, payload).await)
    }

    pub async fn delete_room(
        State(state): State<AppState>,
        PathParam(id): PathParam<i64>,
    ) -> Result<StatusCode, AppError> {
        to_no_content(state.room_service.delete(id).await)
    }
}
