use std::sync::Arc;

use axum::{middleware, routing::post, Router};

use crate::api::controller::contact::ContactController;
use crate::api::middleware::permission::{enforce_permission, Permission, PermissionGuard};
use crate::app_state::AppState;
use crate::core::auth::token_registry::TokenRegistry;

pub fn contact_routes(tokens: Arc<TokenRegistry>) -> Router<AppState> {
    Router::new()
        .route("/contact/", post(ContactController::submit_contact_message))
        .route_layer(middleware::from_fn_with_state(
            PermissionGuard::new(tokens, Permission::AllowAny),
            enforce_permission,
        ))
}
