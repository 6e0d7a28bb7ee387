use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::controller::root::RootController;
use crate::api::routes::{booking_routes, contact_routes, customer_routes, room_routes};
use crate::app_state::AppState;

/// Build the main application router
pub fn app_router(state: AppState) -> Router {
    let tokens = state.tokens.clone();

    // Rooms, customers, bookings and the form endpoints live under /api
    let api = Router::new()
        .merge(room_routes::room_routes(tokens.clone()))
        .merge(customer_routes::customer_routes(tokens.clone()))
        .merge(booking_routes::booking_routes(tokens.clone()))
        .merge(contact_routes::contact_routes(tokens));

    Router::new()
        .route("/", get(RootController::index))
        .route("/health", get(RootController::health))
        .nest("/api", api)
        .fallback(RootController::not_found)
        .layer(TraceLayer::new_for_http())
        // Browser front-end runs on another origin
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}
