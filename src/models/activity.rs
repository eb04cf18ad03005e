//! Activity model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Activity category, closed set.
///
/// Serialized capitalized on the wire ("Sightseeing"), stored lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "activity_category", rename_all = "lowercase")]
pub enum ActivityCategory {
    Sightseeing,
    Food,
    Transportation,
    Accommodation,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Activity {
    pub id: i64,
    pub trip_id: i64,
    /// 1-based day offset from the trip start date.
    pub day: i32,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    /// Zero-padded 24-hour "HH:MM".
    pub start_time: String,
    pub end_time: Option<String>,
    pub cost: Option<f64>,
    pub category: ActivityCategory,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateActivityRequest {
    pub day: i32,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_time: String,
    pub end_time: Option<String>,
    pub cost: Option<f64>,
    pub category: ActivityCategory,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateActivityRequest {
    pub day: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub cost: Option<f64>,
    pub category: Option<ActivityCategory>,
}

/// Normalize a time-of-day string to zero-padded 24-hour "HH:MM".
///
/// Within-day ordering compares these strings lexicographically, which is
/// total only for the fixed-width representation, so every time entering
/// the system goes through here first. Accepts "H:MM" and "HH:MM".
pub fn normalize_time(input: &str) -> Result<String, crate::utils::errors::WanderplanError> {
    use crate::utils::errors::WanderplanError;

    let trimmed = input.trim();
    let (hours, minutes) = trimmed
        .split_once(':')
        .ok_or_else(|| WanderplanError::InvalidInput(format!("Invalid time: {trimmed}")))?;

    let h: u32 = hours
        .parse()
        .map_err(|_| WanderplanError::InvalidInput(format!("Invalid time: {trimmed}")))?;
    let m: u32 = minutes
        .parse()
        .map_err(|_| WanderplanError::InvalidInput(format!("Invalid time: {trimmed}")))?;

    if h > 23 || m > 59 || minutes.len() != 2 {
        return Err(WanderplanError::InvalidInput(format!("Invalid time: {trimmed}")));
    }

    Ok(format!("{h:02}:{m:02}"))
}
