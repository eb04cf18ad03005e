//! Admin service implementation
//!
//! Account validation workflow: admins see every account and flip the
//! validated flag. Role gating happens in the middleware; this service
//! only encodes the roster operations themselves.

use tracing::{debug, info};

use crate::database::repositories::UserRepository;
use crate::models::user::User;
use crate::utils::errors::Result;
use crate::utils::logging::log_admin_action;

#[derive(Clone)]
pub struct AdminService {
    user_repository: UserRepository,
}

impl AdminService {
    pub fn new(user_repository: UserRepository) -> Self {
        Self { user_repository }
    }

    /// List every account
    pub async fn list_users(&self) -> Result<Vec<User>> {
        debug!("Listing all users");
        self.user_repository.list().await
    }

    /// Accounts still waiting for validation
    pub async fn pending_users(&self) -> Result<Vec<User>> {
        self.user_repository.list_by_validation(false).await
    }

    /// Accounts already validated
    pub async fn validated_users(&self) -> Result<Vec<User>> {
        self.user_repository.list_by_validation(true).await
    }

    /// Approve an account. Unknown ids are reported as not-found, never
    /// silently swallowed.
    pub async fn validate_user(&self, admin_id: i64, user_id: i64) -> Result<User> {
        let user = self.user_repository.set_validated(user_id, true).await?;
        log_admin_action(admin_id, "validate_user", Some(&user_id.to_string()));
        info!(admin_id = admin_id, user_id = user_id, "User validated");
        Ok(user)
    }

    /// Send an account back to pending
    pub async fn invalidate_user(&self, admin_id: i64, user_id: i64) -> Result<User> {
        let user = self.user_repository.set_validated(user_id, false).await?;
        log_admin_action(admin_id, "invalidate_user", Some(&user_id.to_string()));
        info!(admin_id = admin_id, user_id = user_id, "User invalidated");
        Ok(user)
    }
}
