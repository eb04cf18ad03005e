//! Wanderplan
//!
//! A group trip-planning service: users create trips, fill their days
//! with activities, and share trips with other users; admins validate
//! new accounts. This library provides the REST backend and the
//! client-side trip store, filtering, and roster logic.

pub mod api;
pub mod client;
pub mod config;
pub mod database;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{Result, WanderplanError};

// Re-export main components for easy access
pub use api::AppState;
pub use client::{TripFilter, TripStore, UserRoster};
pub use database::DatabaseService;
pub use services::ServiceFactory;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
