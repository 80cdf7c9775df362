//! HTTP request handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::SecondsFormat;

use super::AppState;
use crate::models::{
    AnalysisRequest, AnalysisResult, CidrRange, ErrorResponse, HealthResponse, ValidationRequest,
};

/// Request body could not be decoded.
#[derive(Debug)]
pub struct InvalidRequest(JsonRejection);

impl From<JsonRejection> for InvalidRequest {
    fn from(rejection: JsonRejection) -> Self {
        InvalidRequest(rejection)
    }
}

impl IntoResponse for InvalidRequest {
    fn into_response(self) -> Response {
        log::info!("rejecting request body: {}", self.0.body_text());
        let body = ErrorResponse {
            error: "Invalid request format".to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// Analyze a set of CIDRs
pub async fn analyze_cidrs(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, InvalidRequest> {
    let Json(request) = payload?;
    log::info!(
        "analyze: {} cidrs, {} vpc_cidrs, {} subnet_cidrs",
        request.cidrs.len(),
        request.vpc_cidrs.len(),
        request.subnet_cidrs.len()
    );

    Ok(Json(crate::analyze(&request, &state.analyzer)))
}

/// Validate a single CIDR
pub async fn validate_cidr(
    payload: Result<Json<ValidationRequest>, JsonRejection>,
) -> Result<Json<CidrRange>, InvalidRequest> {
    let Json(request) = payload?;
    log::info!("validate: '{}'", request.cidr);

    Ok(Json(crate::validate_cidr(&request.cidr)))
}

/// Health check
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    })
}
