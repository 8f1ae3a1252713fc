//! REST API endpoints for repair cost estimates

use std::collections::BTreeMap;

use actix_web::{HttpResponse, Responder, get, post, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::error::ApiError;
use crate::model::CostEstimate;
use crate::service::CostEstimator;
use crate::service::estimator::DEFAULT_REGION_FACTOR;

#[derive(Debug, Deserialize, ToSchema)]
pub struct EstimateRequest {
    /// Defect category key, e.g. `water_damage`
    pub defect_type: String,
    /// Severity score, intended range 0-100
    pub severity: i64,
    /// Regional market factor (default 1.0)
    pub region_factor: Option<f64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EstimateResponse {
    pub defect_type: String,
    pub estimate: CostEstimate,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CostTableResponse {
    pub baseline_costs: BTreeMap<String, f64>,
    pub fallback_base_cost: f64,
    pub band_ratio: f64,
}

/// Estimate the repair cost range for a defect
#[utoipa::path(
    post,
    path = "/v1/estimates",
    request_body = EstimateRequest,
    responses(
        (status = 200, description = "Estimate computed", body = EstimateResponse),
        (status = 400, description = "Invalid region factor or body", body = crate::api::error::ErrorResponse)
    ),
    tag = "estimates"
)]
#[post("/v1/estimates")]
pub async fn create_estimate(
    estimator: web::Data<CostEstimator>,
    request: web::Json<EstimateRequest>,
) -> Result<HttpResponse, ApiError> {
    let region_factor = request.region_factor.unwrap_or(DEFAULT_REGION_FACTOR);
    if !region_factor.is_finite() || region_factor < 0.0 {
        return Err(ApiError::BadRequest(format!(
            "region_factor must be a finite, non-negative number (got {})",
            region_factor
        )));
    }

    let estimate = estimator.estimate(&request.defect_type, request.severity, region_factor);

    tracing::info!(
        defect_type = %request.defect_type,
        severity = request.severity,
        region_factor = region_factor,
        min_usd = estimate.min_estimate_usd,
        max_usd = estimate.max_estimate_usd,
        "Cost estimate computed"
    );

    Ok(HttpResponse::Ok().json(EstimateResponse {
        defect_type: request.into_inner().defect_type,
        estimate,
        generated_at: Utc::now(),
    }))
}

/// Baseline cost table in use
#[utoipa::path(
    get,
    path = "/v1/estimates/cost-table",
    responses(
        (status = 200, description = "Cost table", body = CostTableResponse)
    ),
    tag = "estimates"
)]
#[get("/v1/estimates/cost-table")]
pub async fn cost_table(estimator: web::Data<CostEstimator>) -> impl Responder {
    let table = estimator.table();
    HttpResponse::Ok().json(CostTableResponse {
        baseline_costs: table.baseline_costs.clone(),
        fallback_base_cost: table.fallback_base_cost,
        band_ratio: table.band_ratio,
    })
}

/// Configure estimate routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_estimate).service(cost_table);
}
