//! Trip data sources
//!
//! One explicit interface over "where trips come from", with a remote
//! implementation speaking the REST API and an in-memory mock. Which
//! one a session uses is decided at composition time, never branched on
//! inside consumers.

use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::Mutex;

use crate::models::activity::{Activity, CreateActivityRequest, UpdateActivityRequest};
use crate::models::trip::{CreateTripRequest, TripStatus, TripView, UpdateTripRequest};
use crate::utils::errors::{Result, WanderplanError};

/// Remote operations the client trip store needs
#[async_trait]
pub trait TripSource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<TripView>>;
    async fn create(&self, request: CreateTripRequest) -> Result<TripView>;
    async fn update(&self, trip_id: i64, patch: UpdateTripRequest) -> Result<TripView>;
    async fn delete(&self, trip_id: i64) -> Result<()>;
    async fn add_activity(&self, trip_id: i64, request: CreateActivityRequest) -> Result<Activity>;
    async fn update_activity(
        &self,
        trip_id: i64,
        activity_id: i64,
        patch: UpdateActivityRequest,
    ) -> Result<Activity>;
    async fn delete_activity(&self, trip_id: i64, activity_id: i64) -> Result<()>;
    async fn share(&self, trip_id: i64, user_id: i64) -> Result<()>;
    async fn unshare(&self, trip_id: i64, user_id: i64) -> Result<()>;
}

/// REST-backed trip source carrying a bearer token
pub struct RemoteTripSource {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl RemoteTripSource {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Map a non-success response to the error taxonomy. 404 becomes the
    /// caller-supplied not-found variant so the id context survives.
    async fn expect_success(
        response: reqwest::Response,
        on_missing: impl FnOnce() -> WanderplanError,
    ) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .text()
            .await
            .ok()
            .and_then(|body| {
                serde_json::from_str::<serde_json::Value>(&body)
                    .ok()
                    .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
            })
            .unwrap_or_else(|| status.to_string());

        Err(match status {
            StatusCode::NOT_FOUND => on_missing(),
            StatusCode::UNAUTHORIZED => WanderplanError::Authentication(message),
            StatusCode::FORBIDDEN => WanderplanError::PermissionDenied(message),
            StatusCode::BAD_REQUEST | StatusCode::CONFLICT => WanderplanError::InvalidInput(message),
            _ => WanderplanError::ServiceUnavailable(message),
        })
    }
}

#[async_trait]
impl TripSource for RemoteTripSource {
    async fn fetch_all(&self) -> Result<Vec<TripView>> {
        let response = self
            .client
            .get(self.url("/trips"))
            .bearer_auth(&self.token)
            .send()
            .await?;
        let response = Self::expect_success(response, || {
            WanderplanError::ServiceUnavailable("trip listing missing".to_string())
        })
        .await?;
        Ok(response.json().await?)
    }

    async fn create(&self, request: CreateTripRequest) -> Result<TripView> {
        let response = self
            .client
            .post(self.url("/trips"))
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await?;
        let response = Self::expect_success(response, || {
            WanderplanError::ServiceUnavailable("trip collection missing".to_string())
        })
        .await?;
        Ok(response.json().await?)
    }

    async fn update(&self, trip_id: i64, patch: UpdateTripRequest) -> Result<TripView> {
        let response = self
            .client
            .patch(self.url(&format!("/trips/{trip_id}")))
            .bearer_auth(&self.token)
            .json(&patch)
            .send()
            .await?;
        let response =
            Self::expect_success(response, || WanderplanError::TripNotFound { trip_id }).await?;
        Ok(response.json().await?)
    }

    async fn delete(&self, trip_id: i64) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/trips/{trip_id}")))
            .bearer_auth(&self.token)
            .send()
            .await?;
        Self::expect_success(response, || WanderplanError::TripNotFound { trip_id }).await?;
        Ok(())
    }

    async fn add_activity(&self, trip_id: i64, request: CreateActivityRequest) -> Result<Activity> {
        let response = self
            .client
            .post(self.url(&format!("/trips/{trip_id}/activities")))
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await?;
        let response =
            Self::expect_success(response, || WanderplanError::TripNotFound { trip_id }).await?;
        Ok(response.json().await?)
    }

    async fn update_activity(
        &self,
        trip_id: i64,
        activity_id: i64,
        patch: UpdateActivityRequest,
    ) -> Result<Activity> {
        let response = self
            .client
            .patch(self.url(&format!("/trips/{trip_id}/activities/{activity_id}")))
            .bearer_auth(&self.token)
            .json(&patch)
            .send()
            .await?;
        let response =
            Self::expect_success(response, || WanderplanError::ActivityNotFound { activity_id })
                .await?;
        Ok(response.json().await?)
    }

    async fn delete_activity(&self, trip_id: i64, activity_id: i64) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/trips/{trip_id}/activities/{activity_id}")))
            .bearer_auth(&self.token)
            .send()
            .await?;
        Self::expect_success(response, || WanderplanError::ActivityNotFound { activity_id })
            .await?;
        Ok(())
    }

    async fn share(&self, trip_id: i64, user_id: i64) -> Result<()> {
        let response = self
            .client
            .post(self.url(&format!("/trips/{trip_id}/participants")))
            .bearer_auth(&self.token)
            .json(&serde_json::json!({ "user_id": user_id }))
            .send()
            .await?;
        Self::expect_success(response, || WanderplanError::TripNotFound { trip_id }).await?;
        Ok(())
    }

    async fn unshare(&self, trip_id: i64, user_id: i64) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/trips/{trip_id}/participants/{user_id}")))
            .bearer_auth(&self.token)
            .send()
            .await?;
        Self::expect_success(response, || WanderplanError::UserNotFound { user_id }).await?;
        Ok(())
    }
}

/// In-memory trip source for demos and tests. Simulates server-assigned
/// ids and reports not-found the way the live API does.
pub struct MockTripSource {
    current_user_id: i64,
    state: Mutex<MockState>,
}

struct MockState {
    trips: Vec<TripView>,
    next_trip_id: i64,
    next_activity_id: i64,
}

impl MockTripSource {
    pub fn new(current_user_id: i64, trips: Vec<TripView>) -> Self {
        let next_trip_id = trips.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let next_activity_id = trips
            .iter()
            .flat_map(|t| t.activities.iter().map(|a| a.id))
            .max()
            .unwrap_or(0)
            + 1;

        Self {
            current_user_id,
            state: Mutex::new(MockState {
                trips,
                next_trip_id,
                next_activity_id,
            }),
        }
    }

    pub fn empty(current_user_id: i64) -> Self {
        Self::new(current_user_id, Vec::new())
    }
}

#[async_trait]
impl TripSource for MockTripSource {
    async fn fetch_all(&self) -> Result<Vec<TripView>> {
        let state = self.state.lock().unwrap();
        Ok(state.trips.clone())
    }

    async fn create(&self, request: CreateTripRequest) -> Result<TripView> {
        let mut state = self.state.lock().unwrap();
        let id = state.next_trip_id;
        state.next_trip_id += 1;

        let trip = TripView {
            id,
            title: request.title,
            description: request.description,
            destination: request.destination,
            start_date: request.start_date,
            end_date: request.end_date,
            image_url: request.image_url,
            created_by: self.current_user_id,
            status: TripStatus::Draft,
            shared_with: Vec::new(),
            activities: Vec::new(),
        };
        state.trips.push(trip.clone());
        Ok(trip)
    }

    async fn update(&self, trip_id: i64, patch: UpdateTripRequest) -> Result<TripView> {
        let mut state = self.state.lock().unwrap();
        let trip = state
            .trips
            .iter_mut()
            .find(|t| t.id == trip_id)
            .ok_or(WanderplanError::TripNotFound { trip_id })?;

        if let Some(title) = patch.title {
            trip.title = title;
        }
        if let Some(description) = patch.description {
            trip.description = Some(description);
        }
        if let Some(destination) = patch.destination {
            trip.destination = destination;
        }
        if let Some(start_date) = patch.start_date {
            trip.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            trip.end_date = end_date;
        }
        if let Some(image_url) = patch.image_url {
            trip.image_url = Some(image_url);
        }
        if let Some(status) = patch.status {
            trip.status = status;
        }

        Ok(trip.clone())
    }

    async fn delete(&self, trip_id: i64) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.trips.len();
        state.trips.retain(|t| t.id != trip_id);
        if state.trips.len() == before {
            return Err(WanderplanError::TripNotFound { trip_id });
        }
        Ok(())
    }

    async fn add_activity(&self, trip_id: i64, request: CreateActivityRequest) -> Result<Activity> {
        let mut state = self.state.lock().unwrap();
        let id = state.next_activity_id;
        state.next_activity_id += 1;

        let trip = state
            .trips
            .iter_mut()
            .find(|t| t.id == trip_id)
            .ok_or(WanderplanError::TripNotFound { trip_id })?;

        let now = chrono::Utc::now();
        let activity = Activity {
            id,
            trip_id,
            day: request.day,
            title: request.title,
            description: request.description,
            location: request.location,
            start_time: request.start_time,
            end_time: request.end_time,
            cost: request.cost,
            category: request.category,
            created_at: now,
            updated_at: now,
        };
        trip.activities.push(activity.clone());
        Ok(activity)
    }

    async fn update_activity(
        &self,
        trip_id: i64,
        activity_id: i64,
        patch: UpdateActivityRequest,
    ) -> Result<Activity> {
        let mut state = self.state.lock().unwrap();
        let trip = state
            .trips
            .iter_mut()
            .find(|t| t.id == trip_id)
            .ok_or(WanderplanError::TripNotFound { trip_id })?;
        let activity = trip
            .activities
            .iter_mut()
            .find(|a| a.id == activity_id)
            .ok_or(WanderplanError::ActivityNotFound { activity_id })?;

        if let Some(day) = patch.day {
            activity.day = day;
        }
        if let Some(title) = patch.title {
            activity.title = title;
        }
        if let Some(description) = patch.description {
            activity.description = Some(description);
        }
        if let Some(location) = patch.location {
            activity.location = Some(location);
        }
        if let Some(start_time) = patch.start_time {
            activity.start_time = start_time;
        }
        if let Some(end_time) = patch.end_time {
            activity.end_time = Some(end_time);
        }
        if let Some(cost) = patch.cost {
            activity.cost = Some(cost);
        }
        if let Some(category) = patch.category {
            activity.category = category;
        }
        activity.updated_at = chrono::Utc::now();

        Ok(activity.clone())
    }

    async fn delete_activity(&self, trip_id: i64, activity_id: i64) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        let trip = state
            .trips
            .iter_mut()
            .find(|t| t.id == trip_id)
            .ok_or(WanderplanError::TripNotFound { trip_id })?;
        let before = trip.activities.len();
        trip.activities.retain(|a| a.id != activity_id);
        if trip.activities.len() == before {
            return Err(WanderplanError::ActivityNotFound { activity_id });
        }
        Ok(())
    }

    async fn share(&self, trip_id: i64, user_id: i64) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        let trip = state
            .trips
            .iter_mut()
            .find(|t| t.id == trip_id)
            .ok_or(WanderplanError::TripNotFound { trip_id })?;
        if trip.created_by == user_id || trip.shared_with.contains(&user_id) {
            return Err(WanderplanError::InvalidInput(
                "User already has access to this trip".to_string(),
            ));
        }
        trip.shared_with.push(user_id);
        Ok(())
    }

    async fn unshare(&self, trip_id: i64, user_id: i64) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        let trip = state
            .trips
            .iter_mut()
            .find(|t| t.id == trip_id)
            .ok_or(WanderplanError::TripNotFound { trip_id })?;
        let before = trip.shared_with.len();
        trip.shared_with.retain(|&id| id != user_id);
        if trip.shared_with.len() == before {
            return Err(WanderplanError::UserNotFound { user_id });
        }
        Ok(())
    }
}
