//! REST API surface
//!
//! Route assembly and shared application state for the axum handlers.

pub mod admin;
pub mod auth;
pub mod activities;
pub mod profile;
pub mod trips;

use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::{delete, get, patch, post};
use axum::Router;

use crate::database::DatabaseService;
use crate::middleware::{log_request, require_admin, require_auth};
use crate::services::ServiceFactory;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub services: ServiceFactory,
    pub db: DatabaseService,
}

impl AppState {
    pub fn new(services: ServiceFactory, db: DatabaseService) -> Self {
        Self { services, db }
    }
}

/// Build the full application router
pub fn router(state: AppState) -> Router {
    let public = Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/health", get(health));

    let protected = Router::new()
        .route("/trips", get(trips::list_trips).post(trips::create_trip))
        .route(
            "/trips/:id",
            get(trips::get_trip)
                .patch(trips::update_trip)
                .delete(trips::delete_trip),
        )
        .route("/trips/:id/activities", post(activities::add_activity))
        .route(
            "/trips/:id/activities/:aid",
            patch(activities::update_activity).delete(activities::delete_activity),
        )
        .route("/trips/:id/participants", post(trips::share_trip))
        .route("/trips/:id/participants/:uid", delete(trips::unshare_trip))
        .route("/user", get(profile::get_profile).patch(profile::update_profile))
        .route_layer(from_fn_with_state(state.clone(), require_auth));

    let admin_routes = Router::new()
        .route("/admin/users", get(admin::list_users))
        .route(
            "/admin/users/:id/validate",
            post(admin::validate_user).delete(admin::invalidate_user),
        )
        .route_layer(from_fn(require_admin))
        .route_layer(from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .merge(public)
        .merge(protected)
        .merge(admin_routes)
        .layer(from_fn(log_request))
        .with_state(state)
}

/// GET /health, liveness plus a database round trip
async fn health(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Result<axum::Json<serde_json::Value>, crate::utils::errors::WanderplanError> {
    crate::database::health_check(state.db.pool()).await?;
    Ok(axum::Json(serde_json::json!({ "status": "ok" })))
}
