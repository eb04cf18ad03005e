//! Client trip store
//!
//! Single in-memory source of truth for "trips visible to the current
//! user", reconciled against a remote source. The cache only changes
//! after the remote confirms an operation; any failure leaves it in its
//! last-known-good state and hands the error back to the caller. There
//! is no retry and no pending state: when two edits to the same trip
//! race, the later response to resolve wins.

use tracing::{debug, warn};

use crate::client::source::TripSource;
use crate::models::activity::{Activity, CreateActivityRequest, UpdateActivityRequest};
use crate::models::trip::{CreateTripRequest, TripView, UpdateTripRequest};
use crate::utils::errors::{Result, WanderplanError};

pub struct TripStore {
    source: Box<dyn TripSource>,
    trips: Vec<TripView>,
}

impl TripStore {
    pub fn new(source: Box<dyn TripSource>) -> Self {
        Self {
            source,
            trips: Vec::new(),
        }
    }

    /// The cached trip collection
    pub fn trips(&self) -> &[TripView] {
        &self.trips
    }

    /// Look a trip up in the cache
    pub fn get(&self, trip_id: i64) -> Option<&TripView> {
        self.trips.iter().find(|t| t.id == trip_id)
    }

    /// Trips a user owns or that are shared with them
    pub fn visible_to(&self, user_id: i64) -> Vec<&TripView> {
        self.trips
            .iter()
            .filter(|t| t.created_by == user_id || t.shared_with.contains(&user_id))
            .collect()
    }

    /// Refresh the cache wholesale from the source
    pub async fn fetch_all(&mut self) -> Result<()> {
        let trips = self.source.fetch_all().await?;
        debug!(count = trips.len(), "Trip cache refreshed");
        self.trips = trips;
        Ok(())
    }

    /// Create a trip and append the server-assigned result to the cache
    pub async fn create(&mut self, request: CreateTripRequest) -> Result<&TripView> {
        let trip = self.source.create(request).await?;
        debug!(trip_id = trip.id, "Trip created, appended to cache");
        self.trips.push(trip);
        Ok(self.trips.last().unwrap())
    }

    /// Update a trip and merge the returned scalar fields into the cache.
    /// Sub-collections (activities, shares) stay as cached; they change
    /// only through their own operations. An id miss after the remote
    /// confirmed means a concurrent removal won the race; that is
    /// reported as a recoverable not-found, not treated as fatal.
    pub async fn update(&mut self, trip_id: i64, patch: UpdateTripRequest) -> Result<&TripView> {
        let updated = self.source.update(trip_id, patch).await?;

        let Some(trip) = self.trips.iter_mut().find(|t| t.id == trip_id) else {
            warn!(trip_id = trip_id, "Updated trip vanished from cache");
            return Err(WanderplanError::TripNotFound { trip_id });
        };

        trip.title = updated.title;
        trip.description = updated.description;
        trip.destination = updated.destination;
        trip.start_date = updated.start_date;
        trip.end_date = updated.end_date;
        trip.image_url = updated.image_url;
        trip.status = updated.status;

        Ok(self.trips.iter().find(|t| t.id == trip_id).unwrap())
    }

    /// Delete a trip. A trip absent from the cache is reported as
    /// not-found before any remote call is made.
    pub async fn delete(&mut self, trip_id: i64) -> Result<()> {
        if self.get(trip_id).is_none() {
            return Err(WanderplanError::TripNotFound { trip_id });
        }

        self.source.delete(trip_id).await?;
        self.trips.retain(|t| t.id != trip_id);
        debug!(trip_id = trip_id, "Trip removed from cache");
        Ok(())
    }

    /// Add an activity to a cached trip after the remote confirms it
    pub async fn add_activity(
        &mut self,
        trip_id: i64,
        request: CreateActivityRequest,
    ) -> Result<&Activity> {
        let activity = self.source.add_activity(trip_id, request).await?;

        let Some(trip) = self.trips.iter_mut().find(|t| t.id == trip_id) else {
            warn!(trip_id = trip_id, "Owning trip vanished from cache");
            return Err(WanderplanError::TripNotFound { trip_id });
        };

        trip.activities.push(activity);
        Ok(trip.activities.last().unwrap())
    }

    /// Merge an updated activity into the owning trip's sub-collection
    pub async fn update_activity(
        &mut self,
        trip_id: i64,
        activity_id: i64,
        patch: UpdateActivityRequest,
    ) -> Result<&Activity> {
        let updated = self.source.update_activity(trip_id, activity_id, patch).await?;

        let activity = self
            .trips
            .iter_mut()
            .find(|t| t.id == trip_id)
            .and_then(|t| t.activities.iter_mut().find(|a| a.id == activity_id))
            .ok_or(WanderplanError::ActivityNotFound { activity_id })?;

        *activity = updated;
        Ok(activity)
    }

    /// Remove an activity from the owning trip's sub-collection
    pub async fn delete_activity(&mut self, trip_id: i64, activity_id: i64) -> Result<()> {
        self.source.delete_activity(trip_id, activity_id).await?;

        if let Some(trip) = self.trips.iter_mut().find(|t| t.id == trip_id) {
            trip.activities.retain(|a| a.id != activity_id);
        }
        Ok(())
    }

    /// Grant another user access to a trip
    pub async fn share(&mut self, trip_id: i64, user_id: i64) -> Result<()> {
        self.source.share(trip_id, user_id).await?;

        if let Some(trip) = self.trips.iter_mut().find(|t| t.id == trip_id) {
            if !trip.shared_with.contains(&user_id) {
                trip.shared_with.push(user_id);
            }
        }
        Ok(())
    }

    /// Revoke a user's access to a trip
    pub async fn unshare(&mut self, trip_id: i64, user_id: i64) -> Result<()> {
        self.source.unshare(trip_id, user_id).await?;

        if let Some(trip) = self.trips.iter_mut().find(|t| t.id == trip_id) {
            trip.shared_with.retain(|&id| id != user_id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::source::MockTripSource;
    use crate::models::activity::ActivityCategory;
    use assert_matches::assert_matches;
    use chrono::NaiveDate;

    fn sample_request() -> CreateTripRequest {
        CreateTripRequest {
            title: "Summer in Paris".to_string(),
            description: Some("Exploring the city of lights".to_string()),
            destination: "Paris, France".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 6, 22).unwrap(),
            image_url: None,
        }
    }

    fn activity_request(day: i32, start: &str) -> CreateActivityRequest {
        CreateActivityRequest {
            day,
            title: format!("Activity at {start}"),
            description: None,
            location: None,
            start_time: start.to_string(),
            end_time: None,
            cost: None,
            category: ActivityCategory::Sightseeing,
        }
    }

    fn store() -> TripStore {
        TripStore::new(Box::new(MockTripSource::empty(1)))
    }

    #[tokio::test]
    async fn test_create_appends_server_assigned_trip() {
        let mut store = store();
        let trip = store.create(sample_request()).await.unwrap();
        assert_eq!(trip.id, 1);
        assert_eq!(store.trips().len(), 1);
        assert_eq!(store.get(1).unwrap().destination, "Paris, France");
    }

    #[tokio::test]
    async fn test_update_merges_scalars_and_keeps_activities() {
        let mut store = store();
        store.create(sample_request()).await.unwrap();
        store.add_activity(1, activity_request(1, "10:00")).await.unwrap();

        let patch = UpdateTripRequest {
            title: Some("Paris Revisited".to_string()),
            ..Default::default()
        };
        let trip = store.update(1, patch).await.unwrap();
        assert_eq!(trip.title, "Paris Revisited");
        assert_eq!(trip.activities.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_missing_trip_reports_not_found() {
        let mut store = store();
        let err = store.delete(99).await.unwrap_err();
        assert_matches!(err, WanderplanError::TripNotFound { trip_id: 99 });
        assert!(err.is_recoverable());
    }

    #[tokio::test]
    async fn test_failed_remote_operation_leaves_cache_unchanged() {
        let mut store = store();
        store.create(sample_request()).await.unwrap();

        // Activity on a trip the source does not know about
        let err = store.add_activity(42, activity_request(1, "09:00")).await;
        assert!(err.is_err());
        assert_eq!(store.trips().len(), 1);
        assert!(store.get(1).unwrap().activities.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_all_replaces_cache_wholesale() {
        let mut store = store();
        store.create(sample_request()).await.unwrap();
        store.delete(1).await.unwrap();

        store.fetch_all().await.unwrap();
        assert!(store.trips().is_empty());
    }

    #[tokio::test]
    async fn test_share_and_unshare_round_trip() {
        let mut store = store();
        store.create(sample_request()).await.unwrap();

        store.share(1, 2).await.unwrap();
        assert_eq!(store.get(1).unwrap().shared_with, vec![2]);
        assert_eq!(store.visible_to(2).len(), 1);

        store.unshare(1, 2).await.unwrap();
        assert!(store.get(1).unwrap().shared_with.is_empty());
        assert!(store.visible_to(2).is_empty());
    }

    #[tokio::test]
    async fn test_activity_update_and_delete() {
        let mut store = store();
        store.create(sample_request()).await.unwrap();
        store.add_activity(1, activity_request(1, "10:00")).await.unwrap();

        let patch = UpdateActivityRequest {
            start_time: Some("11:30".to_string()),
            ..Default::default()
        };
        let activity = store.update_activity(1, 1, patch).await.unwrap();
        assert_eq!(activity.start_time, "11:30");

        store.delete_activity(1, 1).await.unwrap();
        assert!(store.get(1).unwrap().activities.is_empty());
    }
}
