//! Customer routes (/api/customers/*): authenticated only.

use std::sync::Arc;

use axum::{middleware, routing::get, Router};

use crate::api::controller::customer::CustomerController;
use crate::api::middleware::permission::{enforce_permission, Permission, PermissionGuard};
use crate::app_state::AppState;
use crate::core::auth::token_registry::TokenRegistry;

pub fn customer_routes(tokens: Arc<TokenRegistry>) -> Router<AppState> {
    Router::new()
        .route(
            "/customers/",
            get(CustomerController::list_customers).post(CustomerController::create_customer),
        )
        .route(
            "/customers/{id}/",
            get(CustomerController::get_customer)
                .put(CustomerController::replace_customer)
                .patch(CustomerController::patch_customer)
                .delete(CustomerController::delete_customer),
        )
        .route_layer(middleware::from_fn_with_state(
            PermissionGuard::new(tokens, Permission::IsAuthenticated),
            enforce_permission,
        ))
}
