//! Trip resource endpoints

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};

use crate::api::AppState;
use crate::models::participant::AddParticipantRequest;
use crate::models::trip::{CreateTripRequest, TripView, UpdateTripRequest};
use crate::services::auth::AuthUser;
use crate::utils::errors::Result;

/// GET /trips, the trips the caller owns or participates in
pub async fn list_trips(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<Vec<TripView>>> {
    let trips = state.services.trip_service.list_trips(auth.id).await?;
    Ok(Json(trips))
}

/// GET /trips/{id}
pub async fn get_trip(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(trip_id): Path<i64>,
) -> Result<Json<TripView>> {
    let trip = state.services.trip_service.get_trip(auth.id, trip_id).await?;
    Ok(Json(trip))
}

/// POST /trips
pub async fn create_trip(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(request): Json<CreateTripRequest>,
) -> Result<(StatusCode, Json<TripView>)> {
    let trip = state.services.trip_service.create_trip(auth.id, request).await?;
    Ok((StatusCode::CREATED, Json(trip)))
}

/// PATCH /trips/{id}
pub async fn update_trip(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(trip_id): Path<i64>,
    Json(request): Json<UpdateTripRequest>,
) -> Result<Json<TripView>> {
    let trip = state
        .services
        .trip_service
        .update_trip(auth.id, trip_id, request)
        .await?;
    Ok(Json(trip))
}

/// DELETE /trips/{id}
pub async fn delete_trip(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(trip_id): Path<i64>,
) -> Result<StatusCode> {
    state.services.trip_service.delete_trip(auth.id, trip_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /trips/{id}/participants, share with another user
pub async fn share_trip(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(trip_id): Path<i64>,
    Json(request): Json<AddParticipantRequest>,
) -> Result<StatusCode> {
    state
        .services
        .trip_service
        .share_trip(auth.id, trip_id, request.user_id)
        .await?;
    Ok(StatusCode::CREATED)
}

/// DELETE /trips/{id}/participants/{uid}, revoke a share
pub async fn unshare_trip(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path((trip_id, target_user_id)): Path<(i64, i64)>,
) -> Result<StatusCode> {
    state
        .services
        .trip_service
        .unshare_trip(auth.id, trip_id, target_user_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
