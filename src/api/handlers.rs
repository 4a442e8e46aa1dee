//! HTTP request handlers for the prediction API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::EmployeeRecord;
use crate::pipeline;

use super::request::EmployeeRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/predict", post(predict_handler))
        .with_state(state)
}

/// Handler for POST /predict endpoint.
///
/// Accepts an employee record and returns the salary, attrition, and loss
/// predictions.
async fn predict_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing prediction request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Schema-shape errors: missing, unknown, or out-of-set values
                    if body_text.contains("missing field")
                        || body_text.contains("unknown field")
                        || body_text.contains("unknown variant")
                    {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Convert request type to domain type
    let record: EmployeeRecord = request.into();

    // Run the prediction pipeline
    let start_time = Instant::now();
    match pipeline::predict(&record, state.models()) {
        Ok(result) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                predicted_salary = result.predicted_salary,
                attrition = ?result.attrition,
                estimated_loss = result.estimated_loss,
                duration_us = duration.as_micros(),
                "Prediction completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Prediction failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Attrition, PredictionResult};
    use crate::predictor::ModelStore;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let models = ModelStore::load("./models").expect("Failed to load models");
        AppState::new(models)
    }

    fn valid_request_json() -> serde_json::Value {
        serde_json::json!({
            "Age": 45,
            "BusinessTravel": "Travel_Rarely",
            "DailyRate": 1200,
            "Department": "Research & Development",
            "DistanceFromHome": 1,
            "Education": 4,
            "EducationField": "Medical",
            "Gender": "Male",
            "JobLevel": 3,
            "JobRole": "Manager",
            "JobSatisfaction": 3,
            "MaritalStatus": "Married",
            "NumCompaniesWorked": 2,
            "OverTime": "No",
            "PerformanceRating": 3,
            "RelationshipSatisfaction": 3,
            "StockOptionLevel": 1,
            "TotalWorkingYears": 18,
            "TrainingTimesLastYear": 2,
            "WorkLifeBalance": 3,
            "YearsAtCompany": 5,
            "YearsInCurrentRole": 3,
            "YearsSinceLastPromotion": 1,
            "YearsWithCurrManager": 3,
            "EnvironmentSatisfaction": 3,
            "JobInvolvement": 3
        })
    }

    async fn post_predict(body: String) -> (StatusCode, Vec<u8>) {
        let router = create_router(create_test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/predict")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_api_001_valid_request_returns_200() {
        let (status, body) = post_predict(valid_request_json().to_string()).await;

        assert_eq!(status, StatusCode::OK);

        let result: PredictionResult = serde_json::from_slice(&body).unwrap();
        assert_eq!(result.attrition, Attrition::No);
        assert_eq!(result.estimated_loss, 0);
        assert!(result.predicted_salary > 0.0);
    }

    #[tokio::test]
    async fn test_api_002_malformed_json_returns_400() {
        let (status, body) = post_predict("{invalid json".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_api_003_missing_field_returns_400() {
        let mut json = valid_request_json();
        json.as_object_mut().unwrap().remove("Age");

        let (status, body) = post_predict(json.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(
            error.message.contains("missing field") || error.message.contains("Age"),
            "Expected error message to mention the missing field, got: {}",
            error.message
        );
    }

    #[tokio::test]
    async fn test_api_004_unknown_field_returns_400() {
        let mut json = valid_request_json();
        json.as_object_mut()
            .unwrap()
            .insert("MonthlyIncome".to_string(), serde_json::json!(5000));

        let (status, body) = post_predict(json.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("unknown field"));
    }

    #[tokio::test]
    async fn test_api_005_out_of_set_enum_returns_400() {
        let mut json = valid_request_json();
        json.as_object_mut()
            .unwrap()
            .insert("OverTime".to_string(), serde_json::json!("Sometimes"));

        let (status, body) = post_predict(json.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_api_006_out_of_range_value_returns_400() {
        let mut json = valid_request_json();
        json.as_object_mut()
            .unwrap()
            .insert("Age".to_string(), serde_json::json!(99));

        let (status, body) = post_predict(json.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_EMPLOYEE");
        assert!(error.message.contains("Age"));
    }

    #[tokio::test]
    async fn test_api_007_unseen_job_role_returns_500() {
        let mut json = valid_request_json();
        json.as_object_mut()
            .unwrap()
            .insert("JobRole".to_string(), serde_json::json!("Astronaut"));

        let (status, body) = post_predict(json.to_string()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "PREDICTION_FAILED");
    }
}
