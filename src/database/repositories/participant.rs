//! Trip participant repository implementation

use sqlx::PgPool;
use chrono::Utc;
use crate::models::participant::{TripParticipant, ParticipantRole};
use crate::utils::errors::WanderplanError;

#[derive(Debug, Clone)]
pub struct ParticipantRepository {
    pool: PgPool,
}

impl ParticipantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Add a participant grant. The unique (trip_id, user_id) constraint
    /// rejects duplicate grants at the database level.
    pub async fn add(&self, trip_id: i64, user_id: i64, role: ParticipantRole) -> Result<TripParticipant, WanderplanError> {
        let participant = sqlx::query_as::<_, TripParticipant>(
            r#"
            INSERT INTO trip_participants (trip_id, user_id, role, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, trip_id, user_id, role, created_at, updated_at
            "#
        )
        .bind(trip_id)
        .bind(user_id)
        .bind(role)
        .bind(Utc::now())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(participant)
    }

    /// Remove a participant grant
    pub async fn remove(&self, trip_id: i64, user_id: i64) -> Result<(), WanderplanError> {
        let result = sqlx::query(
            "DELETE FROM trip_participants WHERE trip_id = $1 AND user_id = $2"
        )
        .bind(trip_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(WanderplanError::UserNotFound { user_id });
        }

        Ok(())
    }

    /// User ids the trip is shared with, excluding the owner grant
    pub async fn shared_user_ids(&self, trip_id: i64) -> Result<Vec<i64>, WanderplanError> {
        let rows: Vec<(i64,)> = sqlx::query_as(
            "SELECT user_id FROM trip_participants WHERE trip_id = $1 AND role = 'participant' ORDER BY created_at ASC"
        )
        .bind(trip_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    /// Check whether a user holds any grant on a trip
    pub async fn is_participant(&self, trip_id: i64, user_id: i64) -> Result<bool, WanderplanError> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM trip_participants WHERE trip_id = $1 AND user_id = $2"
        )
        .bind(trip_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0 > 0)
    }

    /// Role a user holds on a trip, if any
    pub async fn role_of(&self, trip_id: i64, user_id: i64) -> Result<Option<ParticipantRole>, WanderplanError> {
        let row: Option<(ParticipantRole,)> = sqlx::query_as(
            "SELECT role FROM trip_participants WHERE trip_id = $1 AND user_id = $2"
        )
        .bind(trip_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(role,)| role))
    }
}
