//! Trip filtering and day-by-day aggregation
//!
//! Pure derivations over the cached trip collection; nothing here
//! mutates or performs I/O.

use chrono::NaiveDate;

use crate::models::activity::{Activity, ActivityCategory};
use crate::models::trip::TripView;

pub use crate::models::trip::day_count;

/// Composable trip filter. Absent fields impose no constraint, so the
/// default filter is the identity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripFilter {
    /// Case-insensitive substring match on the destination
    pub destination: Option<String>,
    /// Keep trips starting on or after this date
    pub start_date: Option<NaiveDate>,
    /// Keep trips ending on or before this date
    pub end_date: Option<NaiveDate>,
    /// Keep trips with at least one activity of this category
    pub category: Option<ActivityCategory>,
}

impl TripFilter {
    pub fn is_empty(&self) -> bool {
        self == &TripFilter::default()
    }

    /// All supplied criteria must hold (logical AND)
    pub fn matches(&self, trip: &TripView) -> bool {
        if let Some(ref destination) = self.destination {
            if !trip
                .destination
                .to_lowercase()
                .contains(&destination.to_lowercase())
            {
                return false;
            }
        }

        if let Some(start) = self.start_date {
            if trip.start_date < start {
                return false;
            }
        }

        if let Some(end) = self.end_date {
            if trip.end_date > end {
                return false;
            }
        }

        if let Some(category) = self.category {
            if !trip.activities.iter().any(|a| a.category == category) {
                return false;
            }
        }

        true
    }
}

/// Apply a filter to a trip collection, preserving order
pub fn filter_trips<'a>(trips: &'a [TripView], filter: &TripFilter) -> Vec<&'a TripView> {
    trips.iter().filter(|trip| filter.matches(trip)).collect()
}

/// One day of a trip's itinerary
#[derive(Debug)]
pub struct DayPlan<'a> {
    /// 1-based day number
    pub day: i64,
    pub activities: Vec<&'a Activity>,
}

/// Group a trip's activities by day, one bucket per day of the trip in
/// order, each sorted by start time. The comparison is plain string
/// ordering, which is chronological only because start times are
/// zero-padded "HH:MM"; anything else must be normalized first.
pub fn group_by_day(trip: &TripView) -> Vec<DayPlan<'_>> {
    (1..=trip.day_count())
        .map(|day| {
            let mut activities: Vec<&Activity> = trip
                .activities
                .iter()
                .filter(|a| i64::from(a.day) == day)
                .collect();
            activities.sort_by(|a, b| a.start_time.cmp(&b.start_time));
            DayPlan { day, activities }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::trip::TripStatus;

    fn activity(id: i64, day: i32, start: &str, category: ActivityCategory) -> Activity {
        let now = chrono::Utc::now();
        Activity {
            id,
            trip_id: 1,
            day,
            title: format!("activity {id}"),
            description: None,
            location: None,
            start_time: start.to_string(),
            end_time: None,
            cost: None,
            category,
            created_at: now,
            updated_at: now,
        }
    }

    fn trip(id: i64, destination: &str, start: (i32, u32, u32), end: (i32, u32, u32), activities: Vec<Activity>) -> TripView {
        TripView {
            id,
            title: format!("trip {id}"),
            description: None,
            destination: destination.to_string(),
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
            image_url: None,
            created_by: 1,
            status: TripStatus::Draft,
            shared_with: Vec::new(),
            activities,
        }
    }

    fn sample_trips() -> Vec<TripView> {
        vec![
            trip(
                1,
                "Paris, France",
                (2025, 6, 15),
                (2025, 6, 22),
                vec![
                    activity(1, 1, "10:00", ActivityCategory::Sightseeing),
                    activity(2, 1, "12:30", ActivityCategory::Food),
                ],
            ),
            trip(
                2,
                "Tokyo, Japan",
                (2025, 9, 10),
                (2025, 9, 20),
                vec![activity(3, 1, "09:00", ActivityCategory::Sightseeing)],
            ),
            trip(3, "New York, USA", (2025, 5, 22), (2025, 5, 25), vec![]),
        ]
    }

    #[test]
    fn test_day_count_inclusive_of_both_ends() {
        let paris = &sample_trips()[0];
        assert_eq!(paris.day_count(), 8);

        let single_day = trip(9, "Home", (2025, 1, 1), (2025, 1, 1), vec![]);
        assert_eq!(single_day.day_count(), 1);
    }

    #[test]
    fn test_destination_filter_is_case_insensitive_substring() {
        let trips = sample_trips();
        let filter = TripFilter {
            destination: Some("paris".to_string()),
            ..Default::default()
        };
        let matched = filter_trips(&trips, &filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, 1);
    }

    #[test]
    fn test_date_range_filter_bounds() {
        let trips = sample_trips();
        let filter = TripFilter {
            start_date: NaiveDate::from_ymd_opt(2025, 6, 1),
            end_date: NaiveDate::from_ymd_opt(2025, 6, 30),
            ..Default::default()
        };
        let matched = filter_trips(&trips, &filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, 1);
    }

    #[test]
    fn test_category_filter_requires_matching_activity() {
        let trips = sample_trips();
        let filter = TripFilter {
            category: Some(ActivityCategory::Food),
            ..Default::default()
        };
        let matched = filter_trips(&trips, &filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, 1);
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let trips = sample_trips();
        let filter = TripFilter::default();
        assert!(filter.is_empty());
        let matched = filter_trips(&trips, &filter);
        assert_eq!(matched.len(), trips.len());
        // Same elements, in order, by identity
        for (original, kept) in trips.iter().zip(matched) {
            assert!(std::ptr::eq(original, kept));
        }
    }

    #[test]
    fn test_filters_compose_like_simultaneous_application() {
        let trips = sample_trips();
        let destination_only = TripFilter {
            destination: Some("Paris".to_string()),
            ..Default::default()
        };
        let both = TripFilter {
            destination: Some("Paris".to_string()),
            category: Some(ActivityCategory::Food),
            ..Default::default()
        };
        let category_only = TripFilter {
            category: Some(ActivityCategory::Food),
            ..Default::default()
        };

        // destination then category over the intermediate result
        let intermediate: Vec<TripView> = filter_trips(&trips, &destination_only)
            .into_iter()
            .cloned()
            .collect();
        let sequential: Vec<i64> = filter_trips(&intermediate, &category_only)
            .iter()
            .map(|t| t.id)
            .collect();
        let simultaneous: Vec<i64> = filter_trips(&trips, &both).iter().map(|t| t.id).collect();
        assert_eq!(sequential, simultaneous);
    }

    #[test]
    fn test_within_day_ordering_by_padded_time() {
        let t = trip(
            5,
            "Rome, Italy",
            (2025, 3, 1),
            (2025, 3, 2),
            vec![
                activity(1, 1, "14:00", ActivityCategory::Other),
                activity(2, 1, "09:30", ActivityCategory::Other),
                activity(3, 1, "09:05", ActivityCategory::Other),
            ],
        );
        let days = group_by_day(&t);
        assert_eq!(days.len(), 2);
        let times: Vec<&str> = days[0].activities.iter().map(|a| a.start_time.as_str()).collect();
        assert_eq!(times, vec!["09:05", "09:30", "14:00"]);
        assert!(days[1].activities.is_empty());
    }

    #[test]
    fn test_group_by_day_buckets_by_day_index() {
        let t = trip(
            6,
            "Oslo, Norway",
            (2025, 7, 1),
            (2025, 7, 3),
            vec![
                activity(1, 2, "10:00", ActivityCategory::Other),
                activity(2, 1, "08:00", ActivityCategory::Other),
                activity(3, 3, "12:00", ActivityCategory::Other),
                activity(4, 2, "09:00", ActivityCategory::Other),
            ],
        );
        let days = group_by_day(&t);
        assert_eq!(days.len(), 3);
        assert_eq!(days[0].activities.len(), 1);
        assert_eq!(days[1].activities.len(), 2);
        assert_eq!(days[1].activities[0].start_time, "09:00");
        assert_eq!(days[2].activities.len(), 1);
    }
}
