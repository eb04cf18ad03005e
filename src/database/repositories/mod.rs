//! Database repositories module
//!
//! This module contains all repository implementations for data access

pub mod user;
pub mod trip;
pub mod activity;
pub mod participant;

// Re-export repositories
pub use user::UserRepository;
pub use trip::TripRepository;
pub use activity::ActivityRepository;
pub use participant::ParticipantRepository;
