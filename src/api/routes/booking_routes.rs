//! Booking routes: the /api/bookings/* collection and the /api/booking/ form.

use std::sync::Arc;

use axum::{middleware, routing::{get, post}, Router};

use crate::api::controller::booking::BookingController;
use crate::api::middleware::permission::{enforce_permission, Permission, PermissionGuard};
use crate::app_state::AppState;
use crate::core::auth::token_registry::TokenRegistry;

pub fn booking_routes(tokens: Arc<TokenRegistry>) -> Router<AppState> {
    Router::new()
        .route(
            "/bookings/",
            get(BookingController::list_bookings).post(BookingController::create_booking),
        )
        .route(
            "/bookings/{id}/",
            get(BookingController::get_booking)
                .put(BookingController::replace_booking)
                .patch(BookingController::patch_booking)
                .delete(BookingController::delete_booking),
        )
        .route("/booking/", post(BookingController::submit_booking_form))
        .route_layer(middleware::from_fn_with_state(
            PermissionGuard::new(tokens, Permission::AllowAny),
            enforce_permission,
        ))
}
