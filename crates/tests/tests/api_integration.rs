use std::collections::HashSet;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use seethio_api::{build_app, ApiConfig};
use seethio_core::{DayPlan, ExhaustionPolicy, PlannerConfig, ReferenceCatalog};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    build_app(&ApiConfig::default()).expect("app should build")
}

fn itinerary_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/generate-itinerary")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn health_reports_catalog_and_metrics() {
    let (status, body) = send(
        app(),
        Request::builder().uri("/health").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["catalog"]["destinations"], 7);
    assert_eq!(body["catalog"]["exhaustion_policy"], "recycle");
    assert_eq!(body["metrics"]["requests_total"], 0);
}

#[tokio::test]
async fn catalog_lists_destinations_and_interests() {
    let (status, body) = send(
        app(),
        Request::builder().uri("/v1/catalog").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let names = body["destinations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|destination| destination["name"].as_str().unwrap().to_string())
        .collect::<Vec<_>>();
    assert_eq!(names.len(), 7);
    assert!(names.contains(&"Lalibela".to_string()));
    assert_eq!(
        body["interests"],
        json!(["Sights & Landmarks", "History", "Nature & Wildlife", "Adventure"])
    );
}

#[tokio::test]
async fn lalibela_adventure_returns_three_distinct_days() {
    let (status, body) = send(
        app(),
        itinerary_request(json!({
            "location": "Lalibela",
            "trip_length": 3,
            "trip_interest": "Adventure"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let days: Vec<DayPlan> = serde_json::from_value(body).unwrap();
    assert_eq!(days.len(), 3);

    let catalog = ReferenceCatalog::builtin();
    let activities = catalog
        .activities("Lalibela", seethio_core::InterestCategory::Adventure)
        .unwrap();
    for (index, day) in days.iter().enumerate() {
        assert_eq!(day.day as usize, index + 1);
        assert_eq!(day.destination, "Lalibela");
        assert!(activities.contains(&day.activity));
    }
    assert_eq!(days.iter().map(|d| &d.hotel).collect::<HashSet<_>>().len(), 3);
    assert_eq!(
        days.iter().map(|d| &d.restaurant).collect::<HashSet<_>>().len(),
        3
    );
}

#[tokio::test]
async fn day_objects_use_pascal_case_keys() {
    let (status, body) = send(
        app(),
        itinerary_request(json!({
            "location": "Mekele",
            "trip_length": 1,
            "trip_interest": "History"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let day = &body[0];
    assert_eq!(day["Day"], 1);
    assert_eq!(day["Destination"], "Mekele");
    assert_eq!(day["Activity"], "Visit to Emperor Yohannes IV Palace");
    assert!(day["Hotel"].is_string());
    assert!(day["Restaurant"].is_string());
}

#[tokio::test]
async fn seeded_requests_are_reproducible() {
    let body = json!({
        "location": "Addis Ababa",
        "trip_length": 4,
        "trip_interest": "History",
        "seed": 2024
    });

    let (_, first) = send(app(), itinerary_request(body.clone())).await;
    let (_, second) = send(app(), itinerary_request(body)).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn unknown_destination_is_a_bad_request() {
    let (status, body) = send(
        app(),
        itinerary_request(json!({
            "location": "Atlantis",
            "trip_length": 2,
            "trip_interest": "Adventure"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "unknown_destination");
}

#[tokio::test]
async fn unknown_interest_is_a_bad_request() {
    let (status, body) = send(
        app(),
        itinerary_request(json!({
            "location": "Axum",
            "trip_length": 2,
            "trip_interest": "Nightlife"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "unknown_interest");
}

#[tokio::test]
async fn uncurated_interest_is_not_found() {
    let (status, body) = send(
        app(),
        itinerary_request(json!({
            "location": "Harar",
            "trip_length": 2,
            "trip_interest": "Nature & Wildlife"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "no_activities_available");
}

#[tokio::test]
async fn negative_trip_length_is_rejected() {
    let (status, body) = send(
        app(),
        itinerary_request(json!({
            "location": "Axum",
            "trip_length": -1,
            "trip_interest": "History"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_trip_length");
}

#[tokio::test]
async fn missing_fields_return_documented_error() {
    for body in [
        json!({ "trip_length": 2, "trip_interest": "History" }),
        json!({ "location": "Axum", "trip_interest": "History" }),
        json!({ "location": "Axum", "trip_length": 0, "trip_interest": "History" }),
        json!({ "location": "Axum", "trip_length": 2, "trip_interest": "" }),
    ] {
        let (status, payload) = send(app(), itinerary_request(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(payload, json!({ "error": "Missing required data." }));
    }
}

#[tokio::test]
async fn fail_policy_rejects_trips_longer_than_pool() {
    let config = ApiConfig {
        planner: PlannerConfig {
            exhaustion: ExhaustionPolicy::Fail,
            ..PlannerConfig::default()
        },
        ..ApiConfig::default()
    };
    let app = build_app(&config).expect("app should build");

    let (status, body) = send(
        app,
        itinerary_request(json!({
            "location": "Axum",
            "trip_length": 6,
            "trip_interest": "History"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "pool_exhausted");
}

#[tokio::test]
async fn recycle_policy_plans_long_trips() {
    let (status, body) = send(
        app(),
        itinerary_request(json!({
            "location": "Axum",
            "trip_length": 12,
            "trip_interest": "History"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(12));
}

#[tokio::test]
async fn metrics_track_generated_itineraries() {
    let app = app();

    let (status, _) = send(
        app.clone(),
        itinerary_request(json!({
            "location": "Bahirdar",
            "trip_length": 2,
            "trip_interest": "Adventure"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, health) = send(
        app,
        Request::builder().uri("/health").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(health["metrics"]["itineraries_generated_total"], 1);
    assert_eq!(health["metrics"]["days_planned_total"], 2);
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let config = ApiConfig {
        max_body_bytes: 64,
        ..ApiConfig::default()
    };
    let app = build_app(&config).expect("app should build");

    let payload = json!({
        "location": "Lalibela".repeat(20),
        "trip_length": 3,
        "trip_interest": "Adventure"
    })
    .to_string();
    let request = Request::builder()
        .method("POST")
        .uri("/generate-itinerary")
        .header("content-type", "application/json")
        .header("content-length", payload.len())
        .body(Body::from(payload))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}
