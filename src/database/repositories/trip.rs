//! Trip repository implementation

use sqlx::PgPool;
use chrono::Utc;
use crate::models::trip::{Trip, CreateTripRequest, UpdateTripRequest};
use crate::utils::errors::WanderplanError;

#[derive(Debug, Clone)]
pub struct TripRepository {
    pool: PgPool,
}

impl TripRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new trip and the owner's participant grant in one
    /// transaction, so a trip never exists without its owner grant.
    pub async fn create(&self, created_by: i64, request: CreateTripRequest) -> Result<Trip, WanderplanError> {
        let mut tx = self.pool.begin().await?;

        let trip = sqlx::query_as::<_, Trip>(
            r#"
            INSERT INTO trips (title, description, destination, start_date, end_date, image_url, created_by, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, 'draft', $8, $9)
            RETURNING id, title, description, destination, start_date, end_date, image_url, created_by, status, created_at, updated_at
            "#
        )
        .bind(request.title)
        .bind(request.description)
        .bind(request.destination)
        .bind(request.start_date)
        .bind(request.end_date)
        .bind(request.image_url)
        .bind(created_by)
        .bind(Utc::now())
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO trip_participants (trip_id, user_id, role, created_at, updated_at)
            VALUES ($1, $2, 'owner', $3, $4)
            "#
        )
        .bind(trip.id)
        .bind(created_by)
        .bind(Utc::now())
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(trip)
    }

    /// Find trip by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Trip>, WanderplanError> {
        let trip = sqlx::query_as::<_, Trip>(
            "SELECT id, title, description, destination, start_date, end_date, image_url, created_by, status, created_at, updated_at FROM trips WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(trip)
    }

    /// List trips visible to a user: created by them, or shared with them
    /// through a participant grant.
    pub async fn list_visible_to(&self, user_id: i64) -> Result<Vec<Trip>, WanderplanError> {
        let trips = sqlx::query_as::<_, Trip>(
            r#"
            SELECT DISTINCT t.id, t.title, t.description, t.destination, t.start_date, t.end_date, t.image_url, t.created_by, t.status, t.created_at, t.updated_at
            FROM trips t
            LEFT JOIN trip_participants tp ON tp.trip_id = t.id
            WHERE t.created_by = $1 OR tp.user_id = $1
            ORDER BY t.start_date ASC, t.id ASC
            "#
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(trips)
    }

    /// Apply a partial update to a trip
    pub async fn update(&self, id: i64, request: UpdateTripRequest) -> Result<Trip, WanderplanError> {
        let trip = sqlx::query_as::<_, Trip>(
            r#"
            UPDATE trips
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                destination = COALESCE($4, destination),
                start_date = COALESCE($5, start_date),
                end_date = COALESCE($6, end_date),
                image_url = COALESCE($7, image_url),
                status = COALESCE($8, status),
                updated_at = $9
            WHERE id = $1
            RETURNING id, title, description, destination, start_date, end_date, image_url, created_by, status, created_at, updated_at
            "#
        )
        .bind(id)
        .bind(request.title)
        .bind(request.description)
        .bind(request.destination)
        .bind(request.start_date)
        .bind(request.end_date)
        .bind(request.image_url)
        .bind(request.status)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?
        .ok_or(WanderplanError::TripNotFound { trip_id: id })?;

        Ok(trip)
    }

    /// Delete trip; grants and activities go with it via ON DELETE CASCADE
    pub async fn delete(&self, id: i64) -> Result<(), WanderplanError> {
        let result = sqlx::query("DELETE FROM trips WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(WanderplanError::TripNotFound { trip_id: id });
        }

        Ok(())
    }
}
