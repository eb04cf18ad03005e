//! Registration and login endpoints

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::models::user::{CreateUserRequest, User};
use crate::utils::errors::Result;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// POST /auth/register. Creates an account; it stays pending until an
/// admin validates it.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>)> {
    let user = state.services.auth_service.register(request).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /auth/login. Issues a bearer token for a validated account.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let (user, token) = state
        .services
        .auth_service
        .login(&request.email, &request.password)
        .await?;
    Ok(Json(LoginResponse { token, user }))
}
