//! Admin user roster
//!
//! In-memory list of accounts with their validation state, as the admin
//! screen works with it. Authorization is the caller's concern; the
//! roster only encodes the toggles and the pending/validated partition.

use crate::models::user::User;
use crate::utils::errors::{Result, WanderplanError};

pub struct UserRoster {
    users: Vec<User>,
}

impl UserRoster {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn get(&self, user_id: i64) -> Option<&User> {
        self.users.iter().find(|u| u.id == user_id)
    }

    /// Mark an account validated. An unknown id is reported as not-found,
    /// never silently ignored.
    pub fn validate(&mut self, user_id: i64) -> Result<&User> {
        self.set_validated(user_id, true)
    }

    /// Send an account back to pending
    pub fn invalidate(&mut self, user_id: i64) -> Result<&User> {
        self.set_validated(user_id, false)
    }

    fn set_validated(&mut self, user_id: i64, validated: bool) -> Result<&User> {
        let user = self
            .users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(WanderplanError::UserNotFound { user_id })?;
        user.validated = validated;
        Ok(user)
    }

    /// Split the roster into (pending, validated). Every user lands in
    /// exactly one of the two.
    pub fn partition_by_validation(&self) -> (Vec<&User>, Vec<&User>) {
        self.users.iter().partition(|u| !u.validated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::UserRole;
    use assert_matches::assert_matches;

    fn user(id: i64, name: &str, validated: bool) -> User {
        let now = chrono::Utc::now();
        User {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            role: UserRole::User,
            validated,
            password_hash: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    fn roster() -> UserRoster {
        UserRoster::new(vec![
            user(1, "Admin User", true),
            user(2, "Regular User", true),
            user(3, "Pending User", false),
        ])
    }

    #[test]
    fn test_partition_is_exhaustive_and_disjoint() {
        let roster = roster();
        let (pending, validated) = roster.partition_by_validation();
        assert_eq!(pending.len() + validated.len(), roster.users().len());
        assert!(pending.iter().all(|u| !u.validated));
        assert!(validated.iter().all(|u| u.validated));
    }

    #[test]
    fn test_validate_then_invalidate_round_trip() {
        let mut roster = roster();
        assert!(!roster.get(3).unwrap().validated);

        roster.validate(3).unwrap();
        assert!(roster.get(3).unwrap().validated);

        roster.invalidate(3).unwrap();
        assert!(!roster.get(3).unwrap().validated);
    }

    #[test]
    fn test_unknown_id_reports_not_found() {
        let mut roster = roster();
        let err = roster.validate(42).unwrap_err();
        assert_matches!(err, WanderplanError::UserNotFound { user_id: 42 });
    }
}
