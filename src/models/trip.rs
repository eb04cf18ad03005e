//! Trip model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

use crate::models::activity::Activity;

/// Trip lifecycle status, closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "trip_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    Draft,
    Active,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Trip {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub image_url: Option<String>,
    pub created_by: i64,
    pub status: TripStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Trip together with its activities and the users it is shared with.
///
/// This is the wire shape returned by the API and the unit the client-side
/// store caches; the participant list excludes the owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripView {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub image_url: Option<String>,
    pub created_by: i64,
    pub status: TripStatus,
    #[serde(default)]
    pub shared_with: Vec<i64>,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

/// Trip duration in days, inclusive of both endpoints: a trip starting and
/// ending on the same date is 1 day. Always >= 1.
pub fn day_count(start_date: NaiveDate, end_date: NaiveDate) -> i64 {
    (end_date - start_date).num_days().abs() + 1
}

impl Trip {
    pub fn day_count(&self) -> i64 {
        day_count(self.start_date, self.end_date)
    }
}

impl TripView {
    pub fn day_count(&self) -> i64 {
        day_count(self.start_date, self.end_date)
    }

    pub fn from_parts(trip: Trip, shared_with: Vec<i64>, activities: Vec<Activity>) -> Self {
        Self {
            id: trip.id,
            title: trip.title,
            description: trip.description,
            destination: trip.destination,
            start_date: trip.start_date,
            end_date: trip.end_date,
            image_url: trip.image_url,
            created_by: trip.created_by,
            status: trip.status,
            shared_with,
            activities,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTripRequest {
    pub title: String,
    pub description: Option<String>,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTripRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub destination: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub image_url: Option<String>,
    pub status: Option<TripStatus>,
}
