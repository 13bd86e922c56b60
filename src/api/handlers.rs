//! HTTP request handlers for the vacation pay API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::{info, warn};
use uuid::Uuid;

use super::request::CalculationQuery;
use super::response::ApiError;
use super::state::AppState;

/// Path of the calculation endpoint, spelled as published to clients.
pub const CALCULATE_PATH: &str = "/calculacte";

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(CALCULATE_PATH, get(calculate_handler))
        .with_state(state)
}

/// Handler for `GET /calculacte`.
///
/// Returns the vacation pay as a JSON number, or `400 Bad Request` with a
/// plain-text diagnostic.
async fn calculate_handler(
    State(state): State<AppState>,
    query: Result<Query<CalculationQuery>, QueryRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing vacation pay request");

    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            let body_text = rejection.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "Query string rejected"
            );
            return ApiError::invalid_query(body_text).into_response();
        }
    };

    let start_time = Instant::now();
    let result = query.vacation_start().and_then(|start| {
        state.calculator().calculate_breakdown(
            query.average_wage,
            query.vacation_days_amount,
            start,
        )
    });

    match result {
        Ok(breakdown) => {
            info!(
                correlation_id = %correlation_id,
                start_date = %breakdown.start_date,
                requested_days = breakdown.requested_days,
                payable_days = breakdown.payable_days,
                amount = breakdown.amount,
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            (StatusCode::OK, Json(breakdown.amount)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation rejected"
            );
            ApiError::from(err).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, header},
    };
    use tower::ServiceExt;

    async fn send_get(uri: &str) -> (StatusCode, Option<String>, String) {
        let router = create_router(AppState::default());
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_valid_request_returns_200_with_number() {
        let (status, content_type, body) = send_get(
            "/calculacte?averageWage=29300&vacationDaysAmount=10\
             &vacationStartDay=24&vacationStartMonth=10&vacationStartYear=2022",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(body, "8000.0");
    }

    #[tokio::test]
    async fn test_invalid_wage_returns_illegal_argument() {
        let (status, _, body) = send_get(
            "/calculacte?averageWage=0&vacationDaysAmount=10\
             &vacationStartDay=24&vacationStartMonth=10&vacationStartYear=2022",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.starts_with("Illegal argument exception:\n"), "{body}");
    }

    #[tokio::test]
    async fn test_invalid_date_returns_date_time_exception() {
        let (status, _, body) = send_get(
            "/calculacte?averageWage=29300&vacationDaysAmount=10\
             &vacationStartDay=31&vacationStartMonth=4&vacationStartYear=2022",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.starts_with("Date time exception:\n"), "{body}");
    }

    #[tokio::test]
    async fn test_missing_parameter_returns_400() {
        let (status, _, body) = send_get("/calculacte?averageWage=29300&vacationDaysAmount=10").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.starts_with("Illegal argument exception:\n"), "{body}");
    }

    #[tokio::test]
    async fn test_post_not_allowed() {
        let router = create_router(AppState::default());
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculacte")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
