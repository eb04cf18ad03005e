//! Activity endpoints, nested under trips

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};

use crate::api::AppState;
use crate::models::activity::{Activity, CreateActivityRequest, UpdateActivityRequest};
use crate::services::auth::AuthUser;
use crate::utils::errors::Result;

/// POST /trips/{id}/activities
pub async fn add_activity(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(trip_id): Path<i64>,
    Json(request): Json<CreateActivityRequest>,
) -> Result<(StatusCode, Json<Activity>)> {
    let activity = state
        .services
        .trip_service
        .add_activity(auth.id, trip_id, request)
        .await?;
    Ok((StatusCode::CREATED, Json(activity)))
}

/// PATCH /trips/{id}/activities/{aid}
pub async fn update_activity(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path((trip_id, activity_id)): Path<(i64, i64)>,
    Json(request): Json<UpdateActivityRequest>,
) -> Result<Json<Activity>> {
    let activity = state
        .services
        .trip_service
        .update_activity(auth.id, trip_id, activity_id, request)
        .await?;
    Ok(Json(activity))
}

/// DELETE /trips/{id}/activities/{aid}
pub async fn delete_activity(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path((trip_id, activity_id)): Path<(i64, i64)>,
) -> Result<StatusCode> {
    state
        .services
        .trip_service
        .delete_activity(auth.id, trip_id, activity_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
