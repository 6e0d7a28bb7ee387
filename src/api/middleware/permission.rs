//! Per-router access policies, enforced before the handler runs.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::Method;
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

use crate::core::auth::principal::{Caller, Principal};
use crate::core::auth::token_registry::TokenRegistry;
use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    AllowAny,
    IsAuthenticated,
    /// Safe methods are public, everything else needs a principal.
    IsAuthenticatedOrReadOnly,
}

impl Permission {
    pub fn allows(self, method: &Method, principal: Option<&Principal>) -> bool {
        match self {
            Permission::AllowAny => true,
            Permission::IsAuthenticated => principal.is_some(),
            Permission::IsAuthenticatedOrReadOnly => {
                is_safe_method(method) || principal.is_some()
            }
        }
    }
}

fn is_safe_method(method: &Method) -> bool {
    matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS)
}

#[derive(Clone)]
pub struct PermissionGuard {
    pub tokens: Arc<TokenRegistry>,
    pub permission: Permission,
}

impl PermissionGuard {
    pub fn new(tokens: Arc<TokenRegistry>, permission: Permission) -> Self {
        Self { tokens, permission }
    }
}

/// Resolves the caller, applies the router's permission and stores the
/// resulting [`Caller`] in the request extensions for handlers.
pub async fn enforce_permission(
    State(guard): State<PermissionGuard>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let principal = guard.tokens.authenticate(req.headers()).map_err(|e| {
        debug!("Rejected credentials on {} {}: {:?}", req.method(), req.uri(), e);
        AppError::InvalidToken
    })?;

    if !guard.permission.allows(req.method(), principal.as_ref()) {
        debug!("{:?} denied {} {}", guard.permission, req.method(), req.uri());
        return Err(AppError::NotAuthenticated);
    }

    req.extensions_mut().insert(Caller(principal));
    Ok(next.run(req).await)
}
