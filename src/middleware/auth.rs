//! Authentication middleware
//!
//! Extracts the bearer token from the Authorization header, verifies it,
//! and injects the caller identity into request extensions for handlers.

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::{debug, warn};

use crate::api::AppState;
use crate::services::auth::AuthUser;
use crate::utils::errors::WanderplanError;

/// Require a valid bearer token on the request
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|hv| hv.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    let Some(token) = token else {
        return WanderplanError::Authentication("Missing bearer token".to_string()).into_response();
    };

    match state.services.auth_service.verify_token(token) {
        Ok(auth_user) => {
            debug!(user_id = auth_user.id, "Request authenticated");
            request.extensions_mut().insert(auth_user);
            next.run(request).await
        }
        Err(err) => {
            warn!(error = %err, "Bearer token rejected");
            err.into_response()
        }
    }
}

/// Require the authenticated caller to hold the admin role.
/// Must run after `require_auth`.
pub async fn require_admin(request: Request, next: Next) -> Response {
    match request.extensions().get::<AuthUser>() {
        Some(auth_user) if auth_user.is_admin() => next.run(request).await,
        Some(auth_user) => {
            warn!(user_id = auth_user.id, "Non-admin attempted admin endpoint");
            WanderplanError::PermissionDenied("Admin privileges required".to_string())
                .into_response()
        }
        None => WanderplanError::Authentication("Missing bearer token".to_string()).into_response(),
    }
}
