use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use tracing::warn;

use crate::api::dto::booking_query::BookingListQuery;
use crate::api::dto::root_dto::MessageResponse;
use crate::api::util::json::{to_created, to_json, to_no_content};
use crate::api::util::json_body::JsonBody;
use crate::api::util::path_param::PathParam;
use crate::app_state::AppState;
use crate::core::auth::principal::Caller;
use crate::core::persistence::booking::booking_entity::BookingEntity;
use crate::domain::booking::dto::booking_patch_request::BookingPatchRequest;
use crate::domain::booking::dto::booking_upsert_request::BookingUpsertRequest;
use crate::errors::AppError;

pub struct BookingController;

impl BookingController {
    pub async fn list_bookings(
        State(state): State<AppState>,
        Query(query): Query<BookingListQuery>,
    ) -> Result<Json<Vec<BookingEntity>>, AppError> {
        to_json(state.booking_service.list(query.search.as_deref()).await)
    }

    /// The booking is attached to the caller's customer profile, whatever the
    /// payload says; callers without one store `customer = null`.
    pub async fn create_booking(
        State(state): State<AppState>,
        Extension(caller): Extension<Caller>,
        JsonBody(mut payload): JsonBody<BookingUpsertRequest>,
    ) -> Result<(StatusCode, Json<BookingEntity>), AppError> {
        payload.customer = caller.customer_id();
        to_created(state.booking_service.create(payload).await)
    }

    pub async fn get_booking(
        State(state): State<AppState>,
        PathParam(id): PathParam<i64>,
    ) -> Result<Json<BookingEntity>, AppError> {
        to_json(state.booking_service.get(id).await)
    }

    pub async fn replace_booking(
        State(state): State<AppState>,
        PathParam(id): PathParam<i64>,
        JsonBody(payload): JsonBody<BookingUpsertRequest>,
    ) -> Result<Json<BookingEntity>, AppError> {
        to_json(state.booking_service.replace(id, payload).await)
    }

    pub async fn patch_booking(
        State(state): State<AppState>,
        PathParam(id): PathParam<i64>,
        JsonBody(payload): JsonBody<BookingPatchRequest>,
    ) -> Result<Json<BookingEntity>, AppError> {
        to_json(state.booking_service.patch(id, payload).await)
    }

    pub async fn delete_booking(
        State(state): State<AppState>,
        PathParam(id): PathParam<i64>,
    ) -> Result<StatusCode, AppError> {
        to_no_content(state.booking_service.delete(id).await)
    }

    /// Public booking form. Keeps `customer` from the payload.
    pub async fn submit_booking_form(
        State(state): State<AppState>,
        JsonBody(payload): JsonBody<BookingUpsertRequest>,
    ) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
        match state.booking_service.create(payload).await.map_err(AppError::from) {
            Ok(_) => Ok((
                StatusCode::CREATED,
                Json(MessageResponse {
                    message: "Room Booked!",
                }),
            )),
            Err(AppError::Validation(errors)) => {
                warn!("Booking form rejected: {errors}");
                Err(AppError::Validation(errors))
            }
            Err(other) => Err(other),
        }
    }
}
