//! Remote trip source against a mocked REST server

mod helpers;

use assert_matches::assert_matches;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use wanderplan::client::{RemoteTripSource, TripSource};
use wanderplan::WanderplanError;

use helpers::{create_trip_request, date};

fn trip_body() -> serde_json::Value {
    json!({
        "id": 1,
        "title": "Summer in Paris",
        "description": "Exploring the city of lights",
        "destination": "Paris, France",
        "start_date": "2025-06-15",
        "end_date": "2025-06-22",
        "image_url": null,
        "created_by": 2,
        "status": "draft",
        "shared_with": [1],
        "activities": [
            {
                "id": 1,
                "trip_id": 1,
                "day": 1,
                "title": "Eiffel Tower Visit",
                "description": null,
                "location": "Champ de Mars",
                "start_time": "10:00",
                "end_time": "12:00",
                "cost": 25.0,
                "category": "Sightseeing",
                "created_at": "2025-01-01T00:00:00Z",
                "updated_at": "2025-01-01T00:00:00Z"
            }
        ]
    })
}

#[tokio::test]
async fn test_fetch_all_sends_bearer_and_parses_trips() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/trips"))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([trip_body()])))
        .mount(&server)
        .await;

    let source = RemoteTripSource::new(server.uri(), "secret-token");
    let trips = source.fetch_all().await.unwrap();

    assert_eq!(trips.len(), 1);
    assert_eq!(trips[0].destination, "Paris, France");
    assert_eq!(trips[0].day_count(), 8);
    assert_eq!(trips[0].activities[0].start_time, "10:00");
}

#[tokio::test]
async fn test_create_returns_created_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/trips"))
        .respond_with(ResponseTemplate::new(201).set_body_json(trip_body()))
        .mount(&server)
        .await;

    let source = RemoteTripSource::new(server.uri(), "secret-token");
    let trip = source
        .create(create_trip_request(
            "Summer in Paris",
            "Paris, France",
            date(2025, 6, 15),
            date(2025, 6, 22),
        ))
        .await
        .unwrap();

    assert_eq!(trip.id, 1);
}

#[tokio::test]
async fn test_missing_trip_maps_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/trips/42"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Trip not found: 42"})))
        .mount(&server)
        .await;

    let source = RemoteTripSource::new(server.uri(), "secret-token");
    let err = source.delete(42).await.unwrap_err();

    assert_matches!(err, WanderplanError::TripNotFound { trip_id: 42 });
}

#[tokio::test]
async fn test_forbidden_maps_to_permission_denied() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/trips/7"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_json(json!({"error": "Only the trip owner can modify it"})),
        )
        .mount(&server)
        .await;

    let source = RemoteTripSource::new(server.uri(), "secret-token");
    let err = source.delete(7).await.unwrap_err();

    assert_matches!(err, WanderplanError::PermissionDenied(_));
}

#[tokio::test]
async fn test_validation_error_surfaces_server_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/trips"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"error": "End date must not be earlier than start date"})),
        )
        .mount(&server)
        .await;

    let source = RemoteTripSource::new(server.uri(), "secret-token");
    let err = source
        .create(create_trip_request(
            "Backwards",
            "Nowhere",
            date(2025, 6, 22),
            date(2025, 6, 15),
        ))
        .await
        .unwrap_err();

    match err {
        WanderplanError::InvalidInput(msg) => {
            assert_eq!(msg, "End date must not be earlier than start date")
        }
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}
