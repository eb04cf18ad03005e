//! Test data helpers
//!
//! Builders for trips, activities, and users shared by the integration
//! tests. The sample collection mirrors a realistic seeded session: one
//! shared trip, one owned trip, one empty weekend trip.

#![allow(dead_code)]

use chrono::NaiveDate;
use wanderplan::models::activity::{Activity, ActivityCategory, CreateActivityRequest};
use wanderplan::models::trip::{CreateTripRequest, TripStatus, TripView};
use wanderplan::models::user::{User, UserRole};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn make_activity(
    id: i64,
    trip_id: i64,
    day: i32,
    title: &str,
    start_time: &str,
    category: ActivityCategory,
) -> Activity {
    let now = chrono::Utc::now();
    Activity {
        id,
        trip_id,
        day,
        title: title.to_string(),
        description: None,
        location: None,
        start_time: start_time.to_string(),
        end_time: None,
        cost: None,
        category,
        created_at: now,
        updated_at: now,
    }
}

pub fn make_trip(
    id: i64,
    title: &str,
    destination: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
    created_by: i64,
) -> TripView {
    TripView {
        id,
        title: title.to_string(),
        description: None,
        destination: destination.to_string(),
        start_date,
        end_date,
        image_url: None,
        created_by,
        status: TripStatus::Draft,
        shared_with: Vec::new(),
        activities: Vec::new(),
    }
}

/// The three-trip collection used across tests
pub fn sample_trips() -> Vec<TripView> {
    let mut paris = make_trip(
        1,
        "Summer in Paris",
        "Paris, France",
        date(2025, 6, 15),
        date(2025, 6, 22),
        2,
    );
    paris.shared_with = vec![1];
    paris.activities = vec![
        make_activity(1, 1, 1, "Eiffel Tower Visit", "10:00", ActivityCategory::Sightseeing),
        make_activity(2, 1, 1, "Lunch at Le Jules Verne", "12:30", ActivityCategory::Food),
    ];

    let mut tokyo = make_trip(
        2,
        "Tokyo Adventure",
        "Tokyo, Japan",
        date(2025, 9, 10),
        date(2025, 9, 20),
        1,
    );
    tokyo.activities = vec![make_activity(
        3,
        2,
        1,
        "Tokyo Skytree",
        "09:00",
        ActivityCategory::Sightseeing,
    )];

    let nyc = make_trip(
        3,
        "New York City Weekend",
        "New York, USA",
        date(2025, 5, 22),
        date(2025, 5, 25),
        2,
    );

    vec![paris, tokyo, nyc]
}

pub fn make_user(id: i64, name: &str, role: UserRole, validated: bool) -> User {
    let now = chrono::Utc::now();
    User {
        id,
        name: name.to_string(),
        email: format!("user{id}@example.com"),
        role,
        validated,
        password_hash: String::new(),
        created_at: now,
        updated_at: now,
    }
}

pub fn create_trip_request(title: &str, destination: &str, start: NaiveDate, end: NaiveDate) -> CreateTripRequest {
    CreateTripRequest {
        title: title.to_string(),
        description: None,
        destination: destination.to_string(),
        start_date: start,
        end_date: end,
        image_url: None,
    }
}

pub fn create_activity_request(day: i32, title: &str, start_time: &str) -> CreateActivityRequest {
    CreateActivityRequest {
        day,
        title: title.to_string(),
        description: None,
        location: None,
        start_time: start_time.to_string(),
        end_time: None,
        cost: None,
        category: ActivityCategory::Sightseeing,
    }
}
