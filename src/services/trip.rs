//! Trip service implementation
//!
//! Trip and activity CRUD with validation and the ownership policy:
//! owners mutate, participants read. Every rule is checked before any
//! database write.

use futures::future::try_join_all;
use tracing::{debug, info, warn};

use crate::database::DatabaseService;
use crate::models::activity::{normalize_time, Activity, CreateActivityRequest, UpdateActivityRequest};
use crate::models::participant::ParticipantRole;
use crate::models::trip::{CreateTripRequest, Trip, TripView, UpdateTripRequest};
use crate::utils::errors::{Result, WanderplanError};

#[derive(Clone)]
pub struct TripService {
    db: DatabaseService,
}

impl TripService {
    pub fn new(db: DatabaseService) -> Self {
        Self { db }
    }

    /// List all trips visible to a user (owned or shared with them),
    /// each assembled with its activities and participant ids.
    pub async fn list_trips(&self, user_id: i64) -> Result<Vec<TripView>> {
        debug!(user_id = user_id, "Listing visible trips");

        let trips = self.db.trips.list_visible_to(user_id).await?;
        let views = try_join_all(trips.into_iter().map(|trip| self.assemble_view(trip))).await?;

        Ok(views)
    }

    /// Get a single trip with relations, enforcing the view policy.
    pub async fn get_trip(&self, user_id: i64, trip_id: i64) -> Result<TripView> {
        let trip = self.find_trip(trip_id).await?;
        self.check_view_access(&trip, user_id).await?;
        self.assemble_view(trip).await
    }

    /// Create a trip. The creator becomes the owner; the owner grant is
    /// written in the same transaction as the trip row.
    pub async fn create_trip(&self, user_id: i64, request: CreateTripRequest) -> Result<TripView> {
        if request.title.trim().is_empty() {
            return Err(WanderplanError::InvalidInput("Title is required".to_string()));
        }
        if request.destination.trim().is_empty() {
            return Err(WanderplanError::InvalidInput("Destination is required".to_string()));
        }
        if request.end_date < request.start_date {
            return Err(WanderplanError::InvalidInput(
                "End date must not be earlier than start date".to_string(),
            ));
        }

        let trip = self.db.trips.create(user_id, request).await?;
        info!(user_id = user_id, trip_id = trip.id, "Trip created");

        self.assemble_view(trip).await
    }

    /// Apply a partial update to a trip, owner-only. Date patches are
    /// validated against the dates the trip will end up with.
    pub async fn update_trip(&self, user_id: i64, trip_id: i64, request: UpdateTripRequest) -> Result<TripView> {
        let trip = self.find_trip(trip_id).await?;
        self.check_owner(&trip, user_id)?;

        if let Some(ref title) = request.title {
            if title.trim().is_empty() {
                return Err(WanderplanError::InvalidInput("Title cannot be empty".to_string()));
            }
        }

        let new_start = request.start_date.unwrap_or(trip.start_date);
        let new_end = request.end_date.unwrap_or(trip.end_date);
        if new_end < new_start {
            return Err(WanderplanError::InvalidInput(
                "End date must not be earlier than start date".to_string(),
            ));
        }

        let updated = self.db.trips.update(trip_id, request).await?;
        info!(user_id = user_id, trip_id = trip_id, "Trip updated");

        self.assemble_view(updated).await
    }

    /// Delete a trip, owner-only.
    pub async fn delete_trip(&self, user_id: i64, trip_id: i64) -> Result<()> {
        let trip = self.find_trip(trip_id).await?;
        self.check_owner(&trip, user_id)?;

        self.db.trips.delete(trip_id).await?;
        info!(user_id = user_id, trip_id = trip_id, "Trip deleted");
        Ok(())
    }

    /// Add an activity to a trip, owner-only.
    pub async fn add_activity(&self, user_id: i64, trip_id: i64, mut request: CreateActivityRequest) -> Result<Activity> {
        let trip = self.find_trip(trip_id).await?;
        self.check_owner(&trip, user_id)?;

        request.start_time = normalize_time(&request.start_time)?;
        request.end_time = request.end_time.as_deref().map(normalize_time).transpose()?;
        validate_activity_fields(
            &request.title,
            &request.start_time,
            request.end_time.as_deref(),
            request.cost,
            request.day,
            trip.day_count(),
        )?;

        let activity = self.db.activities.create(trip_id, request).await?;
        info!(user_id = user_id, trip_id = trip_id, activity_id = activity.id, "Activity added");
        Ok(activity)
    }

    /// Apply a partial update to an activity, owner-only. Field rules are
    /// checked against the values the activity will end up with.
    pub async fn update_activity(
        &self,
        user_id: i64,
        trip_id: i64,
        activity_id: i64,
        mut request: UpdateActivityRequest,
    ) -> Result<Activity> {
        let trip = self.find_trip(trip_id).await?;
        self.check_owner(&trip, user_id)?;

        let existing = self
            .db
            .activities
            .find_by_id(trip_id, activity_id)
            .await?
            .ok_or(WanderplanError::ActivityNotFound { activity_id })?;

        request.start_time = request.start_time.as_deref().map(normalize_time).transpose()?;
        request.end_time = request.end_time.as_deref().map(normalize_time).transpose()?;

        let title = request.title.as_deref().unwrap_or(&existing.title);
        let start_time = request.start_time.as_deref().unwrap_or(&existing.start_time);
        let end_time = request.end_time.as_deref().or(existing.end_time.as_deref());
        let cost = request.cost.or(existing.cost);
        let day = request.day.unwrap_or(existing.day);
        validate_activity_fields(title, start_time, end_time, cost, day, trip.day_count())?;

        let activity = self.db.activities.update(trip_id, activity_id, request).await?;
        info!(user_id = user_id, trip_id = trip_id, activity_id = activity_id, "Activity updated");
        Ok(activity)
    }

    /// Delete an activity, owner-only.
    pub async fn delete_activity(&self, user_id: i64, trip_id: i64, activity_id: i64) -> Result<()> {
        let trip = self.find_trip(trip_id).await?;
        self.check_owner(&trip, user_id)?;

        self.db.activities.delete(trip_id, activity_id).await?;
        info!(user_id = user_id, trip_id = trip_id, activity_id = activity_id, "Activity deleted");
        Ok(())
    }

    /// Share a trip with another user, owner-only. A user never holds two
    /// grants on the same trip.
    pub async fn share_trip(&self, user_id: i64, trip_id: i64, target_user_id: i64) -> Result<()> {
        let trip = self.find_trip(trip_id).await?;
        self.check_owner(&trip, user_id)?;

        self.db
            .users
            .find_by_id(target_user_id)
            .await?
            .ok_or(WanderplanError::UserNotFound { user_id: target_user_id })?;

        if self.db.participants.is_participant(trip_id, target_user_id).await? {
            return Err(WanderplanError::InvalidInput(
                "User already has access to this trip".to_string(),
            ));
        }

        self.db
            .participants
            .add(trip_id, target_user_id, ParticipantRole::Participant)
            .await?;
        info!(user_id = user_id, trip_id = trip_id, target_user_id = target_user_id, "Trip shared");
        Ok(())
    }

    /// Revoke a participant grant, owner-only. The owner grant itself is
    /// not removable.
    pub async fn unshare_trip(&self, user_id: i64, trip_id: i64, target_user_id: i64) -> Result<()> {
        let trip = self.find_trip(trip_id).await?;
        self.check_owner(&trip, user_id)?;

        match self.db.participants.role_of(trip_id, target_user_id).await? {
            Some(ParticipantRole::Owner) => {
                return Err(WanderplanError::InvalidInput(
                    "The owner grant cannot be removed".to_string(),
                ));
            }
            Some(ParticipantRole::Participant) => {}
            None => return Err(WanderplanError::UserNotFound { user_id: target_user_id }),
        }

        self.db.participants.remove(trip_id, target_user_id).await?;
        info!(user_id = user_id, trip_id = trip_id, target_user_id = target_user_id, "Trip unshared");
        Ok(())
    }

    async fn find_trip(&self, trip_id: i64) -> Result<Trip> {
        self.db
            .trips
            .find_by_id(trip_id)
            .await?
            .ok_or(WanderplanError::TripNotFound { trip_id })
    }

    async fn assemble_view(&self, trip: Trip) -> Result<TripView> {
        let shared_with = self.db.participants.shared_user_ids(trip.id).await?;
        let activities = self.db.activities.list_for_trip(trip.id).await?;
        Ok(TripView::from_parts(trip, shared_with, activities))
    }

    async fn check_view_access(&self, trip: &Trip, user_id: i64) -> Result<()> {
        if trip.created_by == user_id || self.db.participants.is_participant(trip.id, user_id).await? {
            return Ok(());
        }
        warn!(user_id = user_id, trip_id = trip.id, "View access denied");
        Err(WanderplanError::PermissionDenied(
            "You do not have access to this trip".to_string(),
        ))
    }

    fn check_owner(&self, trip: &Trip, user_id: i64) -> Result<()> {
        if trip.created_by == user_id {
            return Ok(());
        }
        warn!(user_id = user_id, trip_id = trip.id, "Mutation denied for non-owner");
        Err(WanderplanError::PermissionDenied(
            "Only the trip owner can modify it".to_string(),
        ))
    }
}

/// Field rules shared by activity create and update paths. Times must
/// already be normalized.
fn validate_activity_fields(
    title: &str,
    start_time: &str,
    end_time: Option<&str>,
    cost: Option<f64>,
    day: i32,
    trip_days: i64,
) -> Result<()> {
    if title.trim().is_empty() {
        return Err(WanderplanError::InvalidInput("Title is required".to_string()));
    }
    if let Some(end) = end_time {
        if end <= start_time {
            return Err(WanderplanError::InvalidInput(
                "End time must be after start time".to_string(),
            ));
        }
    }
    if let Some(cost) = cost {
        if cost < 0.0 {
            return Err(WanderplanError::InvalidInput(
                "Cost cannot be negative".to_string(),
            ));
        }
    }
    if day < 1 || i64::from(day) > trip_days {
        return Err(WanderplanError::InvalidInput(format!(
            "Day must be between 1 and {trip_days}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_day_bounds() {
        assert!(validate_activity_fields("Louvre", "10:00", None, None, 1, 8).is_ok());
        assert!(validate_activity_fields("Louvre", "10:00", None, None, 8, 8).is_ok());
        assert!(validate_activity_fields("Louvre", "10:00", None, None, 0, 8).is_err());
        assert!(validate_activity_fields("Louvre", "10:00", None, None, 9, 8).is_err());
    }

    #[test]
    fn test_activity_end_after_start() {
        assert!(validate_activity_fields("Lunch", "12:30", Some("14:00"), None, 1, 3).is_ok());
        assert!(validate_activity_fields("Lunch", "12:30", Some("12:30"), None, 1, 3).is_err());
        assert!(validate_activity_fields("Lunch", "12:30", Some("09:00"), None, 1, 3).is_err());
    }

    #[test]
    fn test_activity_cost_non_negative() {
        assert!(validate_activity_fields("Museum", "09:00", None, Some(0.0), 1, 2).is_ok());
        assert!(validate_activity_fields("Museum", "09:00", None, Some(-1.0), 1, 2).is_err());
    }
}
