//! Services module
//!
//! This module contains business logic services

pub mod admin;
pub mod auth;
pub mod trip;
pub mod user;

// Re-export commonly used services
pub use admin::AdminService;
pub use auth::{AuthService, AuthUser, Claims};
pub use trip::TripService;
pub use user::UserService;

use crate::config::settings::Settings;
use crate::database::DatabaseService;

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub auth_service: AuthService,
    pub user_service: UserService,
    pub trip_service: TripService,
    pub admin_service: AdminService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(db: DatabaseService, settings: Settings) -> Self {
        let auth_service = AuthService::new(db.users.clone(), settings);
        let user_service = UserService::new(db.users.clone());
        let admin_service = AdminService::new(db.users.clone());
        let trip_service = TripService::new(db);

        Self {
            auth_service,
            user_service,
            trip_service,
            admin_service,
        }
    }
}
