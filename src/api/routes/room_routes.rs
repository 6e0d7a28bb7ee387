//! Room routes (/api/rooms/*): public reads, authenticated writes.

use std::sync::Arc;

use axum::{middleware, routing::get, Router};

use crate::api::controller::room::RoomController;
use crate::api::middleware::permission::{enforce_permission, Permission, PermissionGuard};
use crate::app_state::AppState;
use crate::core::auth::token_registry::TokenRegistry;

pub fn room_routes(tokens: Arc<TokenRegistry>) -> Router<AppState> {
    Router::new()
        .route(
            "/rooms/",
            get(RoomController::list_rooms).post(RoomController::create_room),
        )
        .route(
            "/rooms/{id}/",
            get(RoomController::get_room)
                .put(RoomController::replace_room)
                .patch(RoomController::patch_room)
                .delete(RoomController::delete_room),
        )
        .route_layer(middleware::from_fn_with_state(
            PermissionGuard::new(tokens, Permission::IsAuthenticatedOrReadOnly),
            enforce_permission,
        ))
}
