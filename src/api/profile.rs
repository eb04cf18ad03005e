//! Authenticated user's own profile endpoints

use axum::extract::State;
use axum::{Extension, Json};

use crate::api::AppState;
use crate::models::user::{UpdateUserRequest, User};
use crate::services::auth::AuthUser;
use crate::utils::errors::Result;

/// GET /user
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<User>> {
    let user = state.services.user_service.get_profile(auth.id).await?;
    Ok(Json(user))
}

/// PATCH /user
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<User>> {
    let user = state
        .services
        .user_service
        .update_profile(auth.id, request)
        .await?;
    Ok(Json(user))
}
