//! User service implementation
//!
//! Profile reads and updates for the authenticated user.

use tracing::{debug, info};

use crate::database::repositories::UserRepository;
use crate::models::user::{UpdateUserRequest, User};
use crate::utils::errors::{Result, WanderplanError};

#[derive(Clone)]
pub struct UserService {
    user_repository: UserRepository,
}

impl UserService {
    pub fn new(user_repository: UserRepository) -> Self {
        Self { user_repository }
    }

    /// Get a user's profile
    pub async fn get_profile(&self, user_id: i64) -> Result<User> {
        debug!(user_id = user_id, "Getting user profile");
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(WanderplanError::UserNotFound { user_id })
    }

    /// Update a user's own profile
    pub async fn update_profile(&self, user_id: i64, request: UpdateUserRequest) -> Result<User> {
        debug!(user_id = user_id, "Updating user profile");

        if let Some(ref name) = request.name {
            if name.trim().is_empty() {
                return Err(WanderplanError::InvalidInput("Name cannot be empty".to_string()));
            }
        }
        if let Some(ref email) = request.email {
            if !email.contains('@') {
                return Err(WanderplanError::InvalidInput("A valid email is required".to_string()));
            }
            if let Some(existing) = self.user_repository.find_by_email(email).await? {
                if existing.id != user_id {
                    return Err(WanderplanError::EmailTaken(email.clone()));
                }
            }
        }

        // Confirm the account exists before patching
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(WanderplanError::UserNotFound { user_id })?;

        let user = self.user_repository.update(user_id, request).await?;
        info!(user_id = user_id, "User profile updated");
        Ok(user)
    }

    /// Look a user up by id
    pub async fn get_user_by_id(&self, user_id: i64) -> Result<Option<User>> {
        self.user_repository.find_by_id(user_id).await
    }
}
