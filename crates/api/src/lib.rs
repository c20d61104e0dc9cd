mod config;

use std::sync::Arc;

use anyhow::Result;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use seethio_core::{ItineraryRequest, PlannerError};
use seethio_observability::{AppMetrics, MetricsSnapshot};
use seethio_service::ItineraryService;
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

pub use crate::config::ApiConfig;

const WELCOME_TEXT: &str = "Welcome to Seethio Trip Itinerary API";
const MISSING_DATA_MESSAGE: &str = "Missing required data.";

#[derive(Clone)]
pub struct ApiState {
    pub service: Arc<ItineraryService>,
    pub metrics: Arc<AppMetrics>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp_utc: String,
    metrics: MetricsSnapshot,
    catalog: HealthCatalog,
}

#[derive(Debug, Serialize)]
struct HealthCatalog {
    destinations: usize,
    exhaustion_policy: &'static str,
    max_trip_days: u32,
}

/// Body of `POST /generate-itinerary`. Fields are optional so a missing one
/// is answered with the documented 400 instead of a deserialization error.
#[derive(Debug, Default, Deserialize)]
struct GenerateItineraryBody {
    location: Option<String>,
    trip_length: Option<i64>,
    trip_interest: Option<String>,
    seed: Option<u64>,
}

impl GenerateItineraryBody {
    fn into_request(self) -> Option<(ItineraryRequest, Option<u64>)> {
        let location = self.location.filter(|value| !value.trim().is_empty())?;
        let trip_length = self.trip_length.filter(|days| *days != 0)?;
        let interest = self.trip_interest.filter(|value| !value.trim().is_empty())?;
        Some((
            ItineraryRequest::new(location, trip_length, interest),
            self.seed,
        ))
    }
}

pub fn build_app(config: &ApiConfig) -> Result<Router> {
    let metrics = AppMetrics::shared();
    let service = ItineraryService::load(
        config.catalog_path.as_deref(),
        config.planner,
        metrics.clone(),
    )?;

    let state = ApiState {
        service: Arc::new(service),
        metrics,
    };

    Ok(build_router(state, config))
}

pub fn build_router(state: ApiState, config: &ApiConfig) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/v1/catalog", get(catalog))
        .route("/generate-itinerary", post(generate_itinerary))
        .layer(build_cors_layer(&config.allowed_origins))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
        .with_state(state)
}

async fn root() -> &'static str {
    WELCOME_TEXT
}

async fn health(State(state): State<ApiState>) -> impl IntoResponse {
    let planner = state.service.config();
    let payload = HealthResponse {
        status: "ok",
        timestamp_utc: chrono::Utc::now().to_rfc3339(),
        metrics: state.metrics.snapshot(),
        catalog: HealthCatalog {
            destinations: state.service.catalog().len(),
            exhaustion_policy: planner.exhaustion.as_code(),
            max_trip_days: planner.max_trip_days,
        },
    };
    (StatusCode::OK, Json(payload))
}

async fn catalog(State(state): State<ApiState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.service.catalog_summary()))
}

async fn generate_itinerary(
    State(state): State<ApiState>,
    payload: Result<Json<GenerateItineraryBody>, JsonRejection>,
) -> Response {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            let status = match rejection.status() {
                StatusCode::PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
                _ => StatusCode::BAD_REQUEST,
            };
            return (
                status,
                Json(serde_json::json!({
                    "error": "invalid_json",
                    "message": rejection.body_text()
                })),
            )
                .into_response();
        }
    };

    let Some((request, seed)) = body.into_request() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": MISSING_DATA_MESSAGE })),
        )
            .into_response();
    };

    match state.service.generate(&request, seed) {
        Ok(itinerary) => (StatusCode::OK, Json(itinerary.days)).into_response(),
        Err(error) => (
            planner_error_status(&error),
            Json(serde_json::json!({
                "error": error.code(),
                "message": error.to_string()
            })),
        )
            .into_response(),
    }
}

fn planner_error_status(error: &PlannerError) -> StatusCode {
    match error {
        PlannerError::UnknownDestination(_)
        | PlannerError::UnknownInterest(_)
        | PlannerError::InvalidTripLength { .. } => StatusCode::BAD_REQUEST,
        PlannerError::NoActivitiesAvailable { .. } => StatusCode::NOT_FOUND,
        PlannerError::PoolExhausted { .. } => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

fn build_cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins = allowed_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use seethio_core::{InterestCategory, PoolKind};
    use tower::ServiceExt;

    use super::*;

    fn app() -> Router {
        build_app(&ApiConfig::default()).expect("app should build")
    }

    #[test]
    fn missing_fields_are_detected() {
        let body = GenerateItineraryBody {
            location: Some("Lalibela".to_string()),
            trip_length: Some(3),
            trip_interest: Some("  ".to_string()),
            seed: None,
        };
        assert!(body.into_request().is_none());

        let zero_days = GenerateItineraryBody {
            location: Some("Lalibela".to_string()),
            trip_length: Some(0),
            trip_interest: Some("Adventure".to_string()),
            seed: None,
        };
        assert!(zero_days.into_request().is_none());

        assert!(GenerateItineraryBody::default().into_request().is_none());
    }

    #[test]
    fn negative_length_reaches_the_planner() {
        let body = GenerateItineraryBody {
            location: Some("Lalibela".to_string()),
            trip_length: Some(-2),
            trip_interest: Some("Adventure".to_string()),
            seed: Some(4),
        };
        let (request, seed) = body.into_request().expect("fields are present");
        assert_eq!(request.trip_length, -2);
        assert_eq!(seed, Some(4));
    }

    #[test]
    fn planner_errors_map_to_client_statuses() {
        assert_eq!(
            planner_error_status(&PlannerError::UnknownDestination("Atlantis".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            planner_error_status(&PlannerError::NoActivitiesAvailable {
                destination: "Harar".to_string(),
                interest: InterestCategory::Adventure,
            }),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            planner_error_status(&PlannerError::PoolExhausted {
                pool: PoolKind::Hotel,
                destination: "Axum".to_string(),
                available: 5,
                requested: 6,
            }),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[tokio::test]
    async fn root_returns_welcome_text() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], WELCOME_TEXT.as_bytes());
    }

    #[tokio::test]
    async fn malformed_json_is_a_bad_request() {
        let request = Request::builder()
            .method("POST")
            .uri("/generate-itinerary")
            .header("content-type", "application/json")
            .body(Body::from("{\"location\": "))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed["error"], "invalid_json");
    }
}
