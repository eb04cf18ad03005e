//! Trip participant grant model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Access role a user holds on a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "participant_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ParticipantRole {
    Owner,
    Participant,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TripParticipant {
    pub id: i64,
    pub trip_id: i64,
    pub user_id: i64,
    pub role: ParticipantRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddParticipantRequest {
    pub user_id: i64,
}
