//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod user;
pub mod trip;
pub mod activity;
pub mod participant;

// Re-export commonly used models
pub use user::{User, UserRole, CreateUserRequest, UpdateUserRequest};
pub use trip::{Trip, TripView, TripStatus, CreateTripRequest, UpdateTripRequest, day_count};
pub use activity::{Activity, ActivityCategory, CreateActivityRequest, UpdateActivityRequest, normalize_time};
pub use participant::{TripParticipant, ParticipantRole, AddParticipantRequest};
