//! HTTP request handlers for the Commission Report Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::rejection::JsonRejection,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::report::build_report;

use super::request::ReportRequest;
use super::response::{ApiError, ApiErrorResponse, ReportResponse};

/// Creates the API router with all endpoints.
pub fn create_router() -> Router {
    Router::new().route("/report", post(report_handler))
}

/// Handler for the POST /report endpoint.
///
/// Accepts a sale list plus an optional quarter filter and returns the
/// computed commission report.
async fn report_handler(payload: Result<Json<ReportRequest>, JsonRejection>) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

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
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
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
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
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

    // Resolve the quarter filter; a non-empty malformed value is rejected
    let quarter = match request.quarter_filter() {
        Ok(quarter) => quarter,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Invalid quarter filter"
            );
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    let start_time = Instant::now();
    let report = build_report(&request.sales, quarter);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        sales_count = request.sales.len(),
        quarters = report.quarters.len(),
        rows = report.summary_rows.len(),
        duration_us = duration.as_micros(),
        "Report computed successfully"
    );

    let response = ReportResponse {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        quarter,
        report,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}
