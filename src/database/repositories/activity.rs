//! Activity repository implementation

use sqlx::PgPool;
use chrono::Utc;
use crate::models::activity::{Activity, CreateActivityRequest, UpdateActivityRequest};
use crate::utils::errors::WanderplanError;

#[derive(Debug, Clone)]
pub struct ActivityRepository {
    pool: PgPool,
}

impl ActivityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new activity on a trip
    pub async fn create(&self, trip_id: i64, request: CreateActivityRequest) -> Result<Activity, WanderplanError> {
        let activity = sqlx::query_as::<_, Activity>(
            r#"
            INSERT INTO activities (trip_id, day, title, description, location, start_time, end_time, cost, category, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, trip_id, day, title, description, location, start_time, end_time, cost, category, created_at, updated_at
            "#
        )
        .bind(trip_id)
        .bind(request.day)
        .bind(request.title)
        .bind(request.description)
        .bind(request.location)
        .bind(request.start_time)
        .bind(request.end_time)
        .bind(request.cost)
        .bind(request.category)
        .bind(Utc::now())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(activity)
    }

    /// Find activity by ID within a trip
    pub async fn find_by_id(&self, trip_id: i64, id: i64) -> Result<Option<Activity>, WanderplanError> {
        let activity = sqlx::query_as::<_, Activity>(
            "SELECT id, trip_id, day, title, description, location, start_time, end_time, cost, category, created_at, updated_at FROM activities WHERE id = $1 AND trip_id = $2"
        )
        .bind(id)
        .bind(trip_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(activity)
    }

    /// List activities for a trip ordered by day, then start time.
    /// start_time is zero-padded HH:MM text, so the text sort is the
    /// chronological sort.
    pub async fn list_for_trip(&self, trip_id: i64) -> Result<Vec<Activity>, WanderplanError> {
        let activities = sqlx::query_as::<_, Activity>(
            "SELECT id, trip_id, day, title, description, location, start_time, end_time, cost, category, created_at, updated_at FROM activities WHERE trip_id = $1 ORDER BY day ASC, start_time ASC, id ASC"
        )
        .bind(trip_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(activities)
    }

    /// Apply a partial update to an activity
    pub async fn update(&self, trip_id: i64, id: i64, request: UpdateActivityRequest) -> Result<Activity, WanderplanError> {
        let activity = sqlx::query_as::<_, Activity>(
            r#"
            UPDATE activities
            SET day = COALESCE($3, day),
                title = COALESCE($4, title),
                description = COALESCE($5, description),
                location = COALESCE($6, location),
                start_time = COALESCE($7, start_time),
                end_time = COALESCE($8, end_time),
                cost = COALESCE($9, cost),
                category = COALESCE($10, category),
                updated_at = $11
            WHERE id = $1 AND trip_id = $2
            RETURNING id, trip_id, day, title, description, location, start_time, end_time, cost, category, created_at, updated_at
            "#
        )
        .bind(id)
        .bind(trip_id)
        .bind(request.day)
        .bind(request.title)
        .bind(request.description)
        .bind(request.location)
        .bind(request.start_time)
        .bind(request.end_time)
        .bind(request.cost)
        .bind(request.category)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?
        .ok_or(WanderplanError::ActivityNotFound { activity_id: id })?;

        Ok(activity)
    }

    /// Delete activity
    pub async fn delete(&self, trip_id: i64, id: i64) -> Result<(), WanderplanError> {
        let result = sqlx::query("DELETE FROM activities WHERE id = $1 AND trip_id = $2")
            .bind(id)
            .bind(trip_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(WanderplanError::ActivityNotFound { activity_id: id });
        }

        Ok(())
    }
}
