//! Admin endpoints for the account-validation workflow

use axum::extract::{Path, Query, State};
use axum::{Extension, Json};
use serde::Deserialize;

use crate::api::AppState;
use crate::models::user::User;
use crate::services::auth::AuthUser;
use crate::utils::errors::Result;

#[derive(Debug, Default, Deserialize)]
pub struct UserListQuery {
    /// "pending" or "validated"; absent returns everyone
    pub status: Option<String>,
}

/// GET /admin/users
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<UserListQuery>,
) -> Result<Json<Vec<User>>> {
    let users = match query.status.as_deref() {
        Some("pending") => state.services.admin_service.pending_users().await?,
        Some("validated") => state.services.admin_service.validated_users().await?,
        _ => state.services.admin_service.list_users().await?,
    };
    Ok(Json(users))
}

/// POST /admin/users/{id}/validate
pub async fn validate_user(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(user_id): Path<i64>,
) -> Result<Json<User>> {
    let user = state
        .services
        .admin_service
        .validate_user(auth.id, user_id)
        .await?;
    Ok(Json(user))
}

/// DELETE /admin/users/{id}/validate
pub async fn invalidate_user(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(user_id): Path<i64>,
) -> Result<Json<User>> {
    let user = state
        .services
        .admin_service
        .invalidate_user(auth.id, user_id)
        .await?;
    Ok(Json(user))
}
