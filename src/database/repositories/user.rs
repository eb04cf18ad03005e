//! User repository implementation

use sqlx::PgPool;
use chrono::Utc;
use crate::models::user::{User, UpdateUserRequest};
use crate::utils::errors::WanderplanError;

#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user account. Accounts start unvalidated with the
    /// `user` role; an admin flips the flag later.
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, WanderplanError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, role, validated, password_hash, created_at, updated_at)
            VALUES ($1, $2, 'user', false, $3, $4, $5)
            RETURNING id, name, email, role, validated, password_hash, created_at, updated_at
            "#
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(Utc::now())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, WanderplanError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, role, validated, password_hash, created_at, updated_at FROM users WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find user by email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, WanderplanError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, role, validated, password_hash, created_at, updated_at FROM users WHERE email = $1"
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Update user profile fields
    pub async fn update(&self, id: i64, request: UpdateUserRequest) -> Result<User, WanderplanError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = COALESCE($2, name),
                email = COALESCE($3, email),
                updated_at = $4
            WHERE id = $1
            RETURNING id, name, email, role, validated, password_hash, created_at, updated_at
            "#
        )
        .bind(id)
        .bind(request.name)
        .bind(request.email)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?
        .ok_or(WanderplanError::UserNotFound { user_id: id })?;

        Ok(user)
    }

    /// Flip the validated flag on an account
    pub async fn set_validated(&self, id: i64, validated: bool) -> Result<User, WanderplanError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET validated = $2, updated_at = $3
            WHERE id = $1
            RETURNING id, name, email, role, validated, password_hash, created_at, updated_at
            "#
        )
        .bind(id)
        .bind(validated)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?
        .ok_or(WanderplanError::UserNotFound { user_id: id })?;

        Ok(user)
    }

    /// List all users
    pub async fn list(&self) -> Result<Vec<User>, WanderplanError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, name, email, role, validated, password_hash, created_at, updated_at FROM users ORDER BY created_at ASC"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    /// List users by validation state
    pub async fn list_by_validation(&self, validated: bool) -> Result<Vec<User>, WanderplanError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, name, email, role, validated, password_hash, created_at, updated_at FROM users WHERE validated = $1 ORDER BY created_at ASC"
        )
        .bind(validated)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }
}
